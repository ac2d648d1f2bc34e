//! # View state for the user list
//!
//! [`UserListState`] is the whole application state: the mirrored records, the
//! form and a single error slot. It changes only through the named transitions
//! below; none of them touch the network. Callers snapshot a [`UserPayload`],
//! await the remote call themselves and hand the result to the matching
//! `apply_*` method. That split lets the Dioxus views hold the state in a signal
//! without keeping a borrow across an `.await`.
//!
//! | Transition | Remote call | On success | On failure |
//! |------------|-------------|------------|------------|
//! | [`apply_fetched`](UserListState::apply_fetched) | list | replace list | [`UserListError::FetchFailed`] |
//! | [`apply_created`](UserListState::apply_created) | create | append server record, [`clear`](UserListState::clear) | [`UserListError::CreateFailed`], form kept |
//! | [`apply_updated`](UserListState::apply_updated) | update | merge payload in place, [`clear`](UserListState::clear) | [`UserListError::UpdateFailed`] |
//! | [`apply_deleted`](UserListState::apply_deleted) | delete | drop the id | [`UserListError::DeleteFailed`] |
//!
//! Responses are applied in arrival order against whatever the state is at that
//! moment; overlapping calls are not sequenced and the last one wins. The list
//! is never re-fetched after the first load, so it can drift from the server.

use api::{ApiError, UserPayload, UserRecord};
use thiserror::Error;

use crate::form::{FormMode, FormState};
use crate::name::split_name;

/// The error slot's possible contents. Only the kind is kept, never the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UserListError {
    #[error("Error fetching users")]
    FetchFailed,
    #[error("Error saving user")]
    CreateFailed,
    #[error("Error updating user")]
    UpdateFailed,
    #[error("Error deleting user")]
    DeleteFailed,
}

/// One table row. `serial` is the 1-based display position, not an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub serial: usize,
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserListState {
    pub users: Vec<UserRecord>,
    pub form: FormState,
    pub error: Option<UserListError>,
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start entering a new user: empty fields, show the form.
    pub fn begin_create(&mut self) {
        self.form.reset();
        self.form.mode = FormMode::Creating;
    }

    /// Load the local record `id` into the form for editing.
    ///
    /// Returns `false` and changes nothing when `id` is not in the list.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(user) = self.users.iter().find(|u| u.id == id) else {
            tracing::debug!(id, "edit requested for unknown user");
            return false;
        };
        let (first_name, last_name) = split_name(&user.name);
        self.form = FormState {
            mode: FormMode::Editing(id),
            first_name,
            last_name,
            email: user.email.clone(),
        };
        true
    }

    /// Reset the form, hide it and clear the error, whatever the mode.
    pub fn clear(&mut self) {
        self.form.reset();
        self.error = None;
    }

    /// The write body for the current form contents.
    pub fn payload(&self, phone: &str) -> UserPayload {
        UserPayload {
            name: self.form.full_name(),
            email: self.form.email.clone(),
            phone: phone.to_string(),
        }
    }

    pub fn apply_fetched(&mut self, result: Result<Vec<UserRecord>, ApiError>) {
        match result {
            Ok(users) => {
                tracing::debug!(count = users.len(), "users loaded");
                self.users = users;
            }
            Err(e) => self.fail(UserListError::FetchFailed, &e),
        }
    }

    pub fn apply_created(&mut self, result: Result<UserRecord, ApiError>) {
        match result {
            Ok(user) => {
                tracing::debug!(id = user.id, "user created");
                self.users.push(user);
                self.clear();
            }
            Err(e) => self.fail(UserListError::CreateFailed, &e),
        }
    }

    /// Merge the locally built `payload` into record `id`. The server's
    /// response is not consulted.
    pub fn apply_updated(&mut self, id: i64, payload: &UserPayload, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::debug!(id, "user updated");
                if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                    user.merge(payload);
                }
                self.clear();
            }
            Err(e) => self.fail(UserListError::UpdateFailed, &e),
        }
    }

    pub fn apply_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::debug!(id, "user deleted");
                self.users.retain(|u| u.id != id);
            }
            Err(e) => self.fail(UserListError::DeleteFailed, &e),
        }
    }

    /// Rows in display order, names split the same way as [`Self::begin_edit`].
    pub fn rows(&self) -> Vec<UserRow> {
        self.users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let (first_name, last_name) = split_name(&user.name);
                UserRow {
                    serial: index + 1,
                    id: user.id,
                    first_name,
                    last_name,
                    email: user.email.clone(),
                }
            })
            .collect()
    }

    /// Text for the error slot, if set.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    fn fail(&mut self, kind: UserListError, cause: &ApiError) {
        tracing::warn!(error = %cause, "{kind}");
        self.error = Some(kind);
    }
}
