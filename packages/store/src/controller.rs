use api::{ApiConfig, UsersApi, PLACEHOLDER_PHONE};

use crate::form::{FormMode, FormState};
use crate::state::UserListState;

/// Drives a [`UserListState`] against a [`UsersApi`] without a UI.
///
/// Each async operation snapshots the form, awaits one remote call and applies
/// the result. Nothing guards against overlapping calls.
pub struct UserListController<A: UsersApi> {
    api: A,
    phone: String,
    state: UserListState,
}

impl<A: UsersApi> UserListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            phone: PLACEHOLDER_PHONE.to_string(),
            state: UserListState::new(),
        }
    }

    pub fn with_config(api: A, config: &ApiConfig) -> Self {
        Self {
            phone: config.placeholder_phone.clone(),
            ..Self::new(api)
        }
    }

    pub fn state(&self) -> &UserListState {
        &self.state
    }

    /// Direct access to the form inputs, as a text field would have.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.state.form
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the full collection. Meant to run once at startup.
    pub async fn fetch_all(&mut self) {
        let result = self.api.list_users().await;
        self.state.apply_fetched(result);
    }

    pub fn begin_create(&mut self) {
        self.state.begin_create();
    }

    pub fn begin_edit(&mut self, id: i64) -> bool {
        self.state.begin_edit(id)
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Create a user from the form contents.
    pub async fn save(&mut self) {
        let payload = self.state.payload(&self.phone);
        let result = self.api.create_user(&payload).await;
        self.state.apply_created(result);
    }

    /// Update the user being edited. Does nothing outside `Editing` mode.
    pub async fn update(&mut self) {
        let Some(id) = self.state.form.editing_id() else {
            tracing::debug!("update requested while not editing");
            return;
        };
        let payload = self.state.payload(&self.phone);
        let result = self.api.update_user(id, &payload).await;
        self.state.apply_updated(id, &payload, result);
    }

    /// Save or update depending on the form mode.
    pub async fn submit(&mut self) {
        match self.state.form.mode {
            FormMode::Creating => self.save().await,
            FormMode::Editing(_) => self.update().await,
            FormMode::Idle => {}
        }
    }

    pub async fn delete(&mut self, id: i64) {
        let result = self.api.delete_user(id).await;
        self.state.apply_deleted(id, result);
    }
}
