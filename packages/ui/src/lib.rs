//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const USERS_CSS: Asset = asset!("/assets/users.css");

pub mod actions;

mod provider;
pub use provider::{use_users, use_users_client, UsersClient, UsersProvider};

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::UserTable;

mod error_banner;
pub use error_banner::ErrorBanner;
