//! Registration form submission flow
//!
//! One submit attempt goes Idle → Validating, then either Invalid → Idle,
//! or Valid → Submitting → Done/Failed → Idle. Validation is synchronous;
//! the registration call is the only suspension point.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::domain::{Member, RegisteredMember};
use crate::error::{RegistrationError, ValidationFailure};
use crate::fields::{Field, RegistrationFields};
use crate::library::MemberLibrary;
use crate::notification::{Notifier, Toast};
use crate::validation::RuleSet;

pub const REGISTERED_MESSAGE: &str =
    "Vous êtes désormais dans l'attente de la validation d'un administrateur de votre profil";
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "L'inscription a échoué, veuillez réessayer plus tard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Valid,
    Submitting,
    Done,
    Failed,
}

/// Result of one submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A rule failed; nothing was sent
    Rejected(ValidationFailure),
    /// The service accepted the member
    Registered(RegisteredMember),
    /// The service call failed
    Failed(RegistrationError),
    /// A previous attempt is still waiting on the service
    Busy,
}

impl SubmitOutcome {
    /// Inputs to mark invalid after this attempt
    pub fn invalid_fields(&self) -> &[Field] {
        match self {
            SubmitOutcome::Rejected(failure) => failure.fields.as_slice(),
            _ => &[],
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, SubmitOutcome::Registered(_))
    }
}

/// The registration form's behaviour, independent of rendering.
///
/// Rules, registration service and toast surface are injected and live as
/// long as the form.
pub struct RegistrationForm {
    rules: RuleSet,
    library: Rc<dyn MemberLibrary>,
    notifier: Rc<dyn Notifier>,
    state: Cell<SubmissionState>,
}

impl RegistrationForm {
    pub fn new(rules: RuleSet, library: Rc<dyn MemberLibrary>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            rules,
            library,
            notifier,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    fn transition(&self, next: SubmissionState) {
        debug!(from = ?self.state.get(), to = ?next, "Registration form state");
        self.state.set(next);
    }

    /// Run the rules and build the member, without side effects.
    pub fn check(&self, fields: &RegistrationFields) -> Result<Member, ValidationFailure> {
        self.rules.validate(fields)?;
        Ok(fields.to_member())
    }

    /// Handle one click on the submit button.
    ///
    /// Refused with [`SubmitOutcome::Busy`] while an earlier attempt is still
    /// submitting: no validation, no toast, no second call.
    pub async fn submit(&self, fields: &RegistrationFields) -> SubmitOutcome {
        if self.is_submitting() {
            warn!("Submit ignored, registration already in progress");
            return SubmitOutcome::Busy;
        }

        self.transition(SubmissionState::Validating);

        let member = match self.check(fields) {
            Ok(member) => member,
            Err(failure) => {
                warn!(
                    fields = ?failure.fields,
                    violation = ?failure.violation,
                    "Registration form rejected"
                );
                self.transition(SubmissionState::Invalid);
                self.notifier.fire(Toast::error(failure.message));
                self.transition(SubmissionState::Idle);
                return SubmitOutcome::Rejected(failure);
            }
        };

        self.transition(SubmissionState::Valid);
        self.register(member).await
    }

    async fn register(&self, member: Member) -> SubmitOutcome {
        self.transition(SubmissionState::Submitting);

        let outcome = match self.library.register_member(&member).await {
            Ok(registered) => {
                info!(
                    username = %member.username,
                    member_id = %registered.id,
                    status = %registered.status,
                    "Member registered"
                );
                self.transition(SubmissionState::Done);
                self.notifier.fire(Toast::success(REGISTERED_MESSAGE));
                SubmitOutcome::Registered(registered)
            }
            Err(e) => {
                error!(username = %member.username, "Member registration failed: {}", e);
                self.transition(SubmissionState::Failed);
                self.notifier.fire(Toast::error(REGISTRATION_FAILED_MESSAGE));
                SubmitOutcome::Failed(e)
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }
}
