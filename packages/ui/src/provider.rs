//! User list context and hooks for the UI.

use api::{ApiConfig, HttpUsersApi, UsersApi};
use dioxus::prelude::*;
use store::UserListState;

/// HTTP client plus the phone number sent on every write.
#[derive(Clone, Debug)]
pub struct UsersClient {
    pub api: HttpUsersApi,
    pub phone: String,
}

impl UsersClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: HttpUsersApi::from_config(config),
            phone: config.placeholder_phone.clone(),
        }
    }
}

/// Get the user list state.
/// Returns a signal that updates after every applied transition.
pub fn use_users() -> Signal<UserListState> {
    use_context::<Signal<UserListState>>()
}

/// Get the client the provider was configured with.
pub fn use_users_client() -> UsersClient {
    use_context::<UsersClient>()
}

/// Provider component that owns the user list state.
/// Loads the collection once on mount; it is never reloaded afterwards.
#[component]
pub fn UsersProvider(config: ApiConfig, children: Element) -> Element {
    let client = use_context_provider(|| UsersClient::new(&config));
    let mut users = use_context_provider(|| Signal::new(UserListState::new()));

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            tracing::info!(base_url = client.api.base_url(), "loading users");
            let result = client.api.list_users().await;
            users.write().apply_fetched(result);
        }
    });

    rsx! {
        {children}
    }
}
