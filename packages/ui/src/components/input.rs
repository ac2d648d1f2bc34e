use dioxus::prelude::*;

/// Controlled text input: renders `value` and reports every keystroke.
#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(into, default = "text".to_string())] input_type: String,
    #[props(into, default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
