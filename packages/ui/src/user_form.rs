use dioxus::prelude::*;
use store::{FormField, FormState};

use crate::components::{Button, ButtonVariant, Input, Label};

/// Inline form for creating or editing a user.
///
/// Shows "Save" while creating and "Update" while editing.
#[component]
pub fn UserForm(
    form: FormState,
    on_input: EventHandler<(FormField, String)>,
    on_submit: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let submit_label = if form.editing_id().is_some() {
        "Update"
    } else {
        "Save"
    };

    rsx! {
        div {
            class: "form-container",

            div {
                class: "form-field",
                Label { html_for: "user-first-name", "First Name" }
                Input {
                    id: "user-first-name",
                    placeholder: "Enter First Name",
                    value: form.first_name.clone(),
                    oninput: move |evt: FormEvent| on_input.call((FormField::FirstName, evt.value())),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "user-last-name", "Last Name" }
                Input {
                    id: "user-last-name",
                    placeholder: "Enter Last Name",
                    value: form.last_name.clone(),
                    oninput: move |evt: FormEvent| on_input.call((FormField::LastName, evt.value())),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "user-email", "Email" }
                Input {
                    id: "user-email",
                    input_type: "email",
                    placeholder: "Enter Email",
                    value: form.email.clone(),
                    oninput: move |evt: FormEvent| on_input.call((FormField::Email, evt.value())),
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_submit.call(()),
                    "{submit_label}"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
            }
        }
    }
}
