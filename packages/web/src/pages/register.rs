//! Member registration page

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use registration_core::{
    Field, Member, MemberLibrary, RegisteredMember, RegistrationError, RegistrationFields,
    RegistrationForm, RuleSet, SubmitOutcome,
};

use crate::components::FieldInput;
use crate::server_fns::register_member;
use crate::state::use_toasts;

/// Reaches the registration API through the `register_member` server function
struct ServerFnLibrary;

#[async_trait(?Send)]
impl MemberLibrary for ServerFnLibrary {
    async fn register_member(
        &self,
        member: &Member,
    ) -> Result<RegisteredMember, RegistrationError> {
        register_member(member.clone())
            .await
            .map_err(|e| RegistrationError::Server(e.to_string()))
    }
}

/// Registration page - sign up as a new member pending admin approval
#[component]
pub fn Register() -> Element {
    let toasts = use_toasts();
    let form = use_hook(|| {
        Rc::new(RegistrationForm::new(
            RuleSet::standard(),
            Rc::new(ServerFnLibrary),
            Rc::new(toasts),
        ))
    });

    let mut fields = use_signal(RegistrationFields::default);
    let mut invalid = use_signal(Vec::<Field>::new);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        // Flip before spawning so a second event in the same tick is refused
        is_submitting.set(true);
        invalid.set(Vec::new());

        let form = form.clone();
        let values = fields();

        spawn(async move {
            let outcome = form.submit(&values).await;
            if matches!(outcome, SubmitOutcome::Busy) {
                // The attempt already in flight owns the page state
                return;
            }

            invalid.set(outcome.invalid_fields().to_vec());
            is_submitting.set(false);
        });
    };

    let input = move |field: Field| {
        rsx! {
            FieldInput {
                field,
                value: fields.read().get(field).to_string(),
                invalid: invalid.read().contains(&field),
                disabled: is_submitting(),
                oninput: move |value: String| fields.write().set(field, value),
            }
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            main {
                class: "max-w-3xl mx-auto px-4 py-12",

                div {
                    class: "bg-white rounded-lg shadow-sm border-4 border-gray-900 p-10",

                    h1 {
                        class: "text-4xl font-bold text-gray-900 text-center mb-8",
                        "Inscription"
                    }

                    form {
                        class: "space-y-6",
                        onsubmit: handle_submit,

                        {input(Field::Username)}

                        div {
                            class: "flex gap-4",
                            {input(Field::LastName)}
                            {input(Field::FirstName)}
                        }

                        div {
                            class: "flex gap-4",
                            {input(Field::Street)}
                            {input(Field::PhoneNumber)}
                        }

                        div {
                            class: "flex gap-4",
                            {input(Field::BuildingNumber)}
                            {input(Field::UnitNumber)}
                            {input(Field::Postcode)}
                        }

                        div {
                            class: "flex gap-4",
                            {input(Field::Commune)}
                            {input(Field::Country)}
                        }

                        {input(Field::Password)}

                        div {
                            class: "text-center",
                            button {
                                id: "submitRegister",
                                r#type: "submit",
                                class: "px-8 py-3 bg-blue-600 text-white text-lg rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_submitting(),
                                if is_submitting() {
                                    "Inscription..."
                                } else {
                                    "S'inscrire"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
