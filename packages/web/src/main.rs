use api::ApiConfig;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Base URL baked in at build time, e.g. `USERS_API_URL=http://localhost:3000 dx serve`.
fn web_config() -> ApiConfig {
    match option_env!("USERS_API_URL") {
        Some(url) if !url.trim().is_empty() => ApiConfig::new(url),
        _ => ApiConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = web_config();
        tracing::info!(base_url = %config.base_url, "starting userboard");
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::UsersProvider {
            config: config,
            ui::views::UsersView {}
        }
    }
}
