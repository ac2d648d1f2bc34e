use std::sync::OnceLock;

use api::ApiConfig;
use dioxus::prelude::*;

/// Loaded before launch; logged once the Dioxus logger is up.
static CONFIG: OnceLock<Result<ApiConfig, String>> = OnceLock::new();

fn main() {
    let _ = CONFIG.set(ApiConfig::load().map_err(|e| e.to_string()));
    dioxus::launch(App);
}

fn desktop_config() -> ApiConfig {
    match CONFIG.get() {
        Some(Ok(config)) => config.clone(),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "{} unusable, using defaults", ApiConfig::filename());
            ApiConfig::default()
        }
        None => ApiConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = desktop_config();
        tracing::info!(base_url = %config.base_url, "starting userboard");
        config
    });

    rsx! {
        ui::UsersProvider {
            config: config,
            ui::views::UsersView {}
        }
    }
}
