//! Labelled form input

use dioxus::prelude::*;
use registration_core::Field;

/// One registration input, bound to its [`Field`]
#[component]
pub fn FieldInput(
    field: Field,
    value: String,
    invalid: bool,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let border = if invalid {
        "border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300 focus:ring-blue-500"
    };

    let aria_invalid = if invalid { "true" } else { "false" };

    rsx! {
        div {
            class: "flex-1",
            label {
                r#for: field.id(),
                class: "block text-sm font-medium text-gray-700 mb-2",
                "{field.label()}"
                if field.is_required() {
                    span { class: "text-red-500", " *" }
                }
            }
            input {
                id: field.id(),
                r#type: field.input_type(),
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
                placeholder: field.placeholder(),
                class: "w-full px-4 py-3 border {border} rounded-lg focus:outline-none focus:ring-2",
                "aria-invalid": aria_invalid,
                disabled: disabled
            }
        }
    }
}
