//! # Store crate — user list view state
//!
//! The UI-independent half of the user list: pure name helpers, the form and
//! its mode, [`UserListState`] with its named transitions, and
//! [`UserListController`] which runs those transitions against any
//! [`api::UsersApi`].

mod controller;
pub mod form;
pub mod name;
pub mod state;

pub use controller::UserListController;
pub use form::{FormField, FormMode, FormState};
pub use name::{join_name, split_name};
pub use state::{UserListError, UserListState, UserRow};
