//! Submission flow tests for the registration form.
//!
//! Drives `RegistrationForm::submit` against the mock registration service
//! and recording notifier, covering:
//! 1. Rejections (markers, one toast, no registration call)
//! 2. Successful registration (member built from trimmed values)
//! 3. Registration failures and double submission

use std::rc::Rc;

use registration_core::form::{REGISTERED_MESSAGE, REGISTRATION_FAILED_MESSAGE};
use registration_core::testing::{MockMemberLibrary, RecordingNotifier};
use registration_core::validation::MISSING_FIELDS_MESSAGE;
use registration_core::{
    Field, RegistrationFields, RegistrationForm, RuleSet, SubmissionState, SubmitOutcome, Toast,
    ToastIcon, Violation,
};

fn valid_fields() -> RegistrationFields {
    RegistrationFields::default()
        .with(Field::Username, "  marie.curie ")
        .with(Field::LastName, " Curie")
        .with(Field::FirstName, "Marie ")
        .with(Field::Password, "radium1898")
        .with(Field::PhoneNumber, "")
        .with(Field::Street, " Rue d'Ulm ")
        .with(Field::BuildingNumber, "24b")
        .with(Field::UnitNumber, "")
        .with(Field::Postcode, "75005")
        .with(Field::Commune, "Paris")
        .with(Field::Country, "France ")
}

fn form_with(
    library: MockMemberLibrary,
) -> (RegistrationForm, Rc<MockMemberLibrary>, Rc<RecordingNotifier>) {
    let library = Rc::new(library);
    let notifier = Rc::new(RecordingNotifier::new());
    let form = RegistrationForm::new(RuleSet::standard(), library.clone(), notifier.clone());
    (form, library, notifier)
}

// =============================================================================
// Rejections
// =============================================================================

/// One empty required field marks every empty required field
#[tokio::test]
async fn empty_required_fields_are_all_marked() {
    let (form, library, notifier) = form_with(MockMemberLibrary::new());

    let fields = valid_fields()
        .with(Field::Street, "   ")
        .with(Field::Commune, "");

    let outcome = form.submit(&fields).await;

    assert_eq!(outcome.invalid_fields(), &[Field::Street, Field::Commune]);
    match &outcome {
        SubmitOutcome::Rejected(failure) => assert_eq!(failure.violation, Violation::Missing),
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(notifier.toasts(), vec![Toast::error(MISSING_FIELDS_MESSAGE)]);
    assert_eq!(library.call_count(), 0);
    assert_eq!(form.state(), SubmissionState::Idle);
}

/// Only the first failing rule produces a toast
#[tokio::test]
async fn rejection_fires_exactly_one_toast() {
    let (form, library, notifier) = form_with(MockMemberLibrary::new());

    let fields = valid_fields()
        .with(Field::FirstName, "Jean-Paul")
        .with(Field::PhoneNumber, "123")
        .with(Field::Country, "F1");

    let outcome = form.submit(&fields).await;

    assert_eq!(outcome.invalid_fields(), &[Field::FirstName]);
    assert_eq!(
        notifier.toasts(),
        vec![Toast::error("Le prénom est trop grand ou est invalide")]
    );
    assert_eq!(library.call_count(), 0);
}

/// Markers reflect only the latest attempt
#[tokio::test]
async fn markers_are_recomputed_on_every_attempt() {
    let (form, library, _notifier) = form_with(MockMemberLibrary::new());

    let first = form
        .submit(&valid_fields().with(Field::PhoneNumber, "123"))
        .await;
    assert_eq!(first.invalid_fields(), &[Field::PhoneNumber]);

    let second = form
        .submit(&valid_fields().with(Field::Postcode, "B-75005"))
        .await;
    assert_eq!(second.invalid_fields(), &[Field::Postcode]);

    let third = form.submit(&valid_fields()).await;
    assert!(third.invalid_fields().is_empty());
    assert!(third.is_registered());
    assert_eq!(library.call_count(), 1);
}

// =============================================================================
// Registration
// =============================================================================

/// A valid form registers a member built from trimmed values
#[tokio::test]
async fn valid_form_registers_trimmed_member_once() {
    let (form, library, notifier) = form_with(MockMemberLibrary::new());

    let outcome = form.submit(&valid_fields()).await;

    assert!(outcome.is_registered());
    assert_eq!(library.call_count(), 1);

    let member = &library.calls()[0];
    assert_eq!(member.username, "marie.curie");
    assert_eq!(member.last_name, "Curie");
    assert_eq!(member.first_name, "Marie");
    assert_eq!(member.password, "radium1898");
    assert_eq!(member.phone_number, None);
    assert_eq!(member.address.unit_number, None);
    assert_eq!(member.address.building_number, "24b");
    assert_eq!(member.address.street, "Rue d'Ulm");
    assert_eq!(member.address.postcode, "75005");
    assert_eq!(member.address.commune, "Paris");
    assert_eq!(member.address.country, "France");

    let toast = notifier.last().unwrap();
    assert_eq!(toast.icon, ToastIcon::Success);
    assert_eq!(toast.title, REGISTERED_MESSAGE);
    assert_eq!(notifier.toasts().len(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
}

/// Optional values are carried when present
#[tokio::test]
async fn optional_fields_are_submitted_when_filled() {
    let (form, library, _notifier) = form_with(MockMemberLibrary::new());

    let fields = valid_fields()
        .with(Field::PhoneNumber, " +331 234 56789 ")
        .with(Field::UnitNumber, "3A");

    assert!(form.submit(&fields).await.is_registered());

    let member = &library.calls()[0];
    assert_eq!(member.phone_number.as_deref(), Some("+331 234 56789"));
    assert_eq!(member.address.unit_number.as_deref(), Some("3A"));
}

// =============================================================================
// Failures and re-entrancy
// =============================================================================

/// A failed registration shows an error toast and leaves the form usable
#[tokio::test]
async fn registration_failure_is_reported() {
    let (form, library, notifier) =
        form_with(MockMemberLibrary::new().failing("username already taken"));

    let outcome = form.submit(&valid_fields()).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(library.call_count(), 1);
    assert_eq!(
        notifier.toasts(),
        vec![Toast::error(REGISTRATION_FAILED_MESSAGE)]
    );
    assert_eq!(form.state(), SubmissionState::Idle);

    let retry = form.submit(&valid_fields()).await;
    assert!(matches!(retry, SubmitOutcome::Failed(_)));
    assert_eq!(library.call_count(), 2);
}

/// A second submit while the first is pending is refused
#[tokio::test]
async fn submit_while_submitting_is_busy() {
    let (library, gate) = MockMemberLibrary::new().held();
    let (form, library, notifier) = form_with(library);
    let fields = valid_fields();

    let first = form.submit(&fields);
    futures::pin_mut!(first);
    assert!(futures::poll!(first.as_mut()).is_pending());
    assert!(form.is_submitting());

    let second = form.submit(&fields).await;
    assert!(matches!(second, SubmitOutcome::Busy));
    assert!(notifier.toasts().is_empty());

    gate.release();
    assert!(first.await.is_registered());

    assert_eq!(library.call_count(), 1);
    assert_eq!(notifier.toasts().len(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
}

/// A refused submit leaves the pending attempt in charge
#[tokio::test]
async fn busy_submit_keeps_pending_attempt_submitting() {
    let (library, gate) = MockMemberLibrary::new().held();
    let (form, library, notifier) = form_with(library);

    let first_fields = valid_fields();
    let first = form.submit(&first_fields);
    futures::pin_mut!(first);
    assert!(futures::poll!(first.as_mut()).is_pending());

    let invalid = valid_fields().with(Field::Postcode, "");
    let second = form.submit(&invalid).await;
    assert!(matches!(second, SubmitOutcome::Busy));
    assert!(second.invalid_fields().is_empty());
    assert_eq!(form.state(), SubmissionState::Submitting);
    assert!(notifier.toasts().is_empty());

    gate.release();
    assert!(first.await.is_registered());
    assert_eq!(library.call_count(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
}
