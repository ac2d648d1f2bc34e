use dioxus::prelude::*;

/// The single error line under the form.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        p {
            class: "error-banner",
            role: "alert",
            "{message}"
        }
    }
}
