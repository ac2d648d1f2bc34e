use dioxus::prelude::*;

#[component]
pub fn Label(#[props(into)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}
