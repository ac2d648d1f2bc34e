//! # API crate — client for the remote users collection
//!
//! Everything the front ends need to talk to a REST `users` resource such as
//! `https://jsonplaceholder.typicode.com/users`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`UserRecord`] (a listed or created user) and [`UserPayload`] (the write body) |
//! | [`config`] | [`ApiConfig`]: base URL and placeholder phone, from `userboard.toml` and env |
//! | [`error`] | [`ApiError`], [`ConfigError`] and the [`Operation`] enum |
//!
//! ## [`UsersApi`]
//!
//! The async seam between the view state and the network, with two
//! implementations:
//!
//! - [`HttpUsersApi`] — reqwest, works on WASM (fetch) and native.
//! - [`MemoryUsersApi`] — in-process collection with per-operation failure
//!   injection and a request log.
//!
//! | Call | Request | Used result |
//! |------|---------|-------------|
//! | `list_users` | `GET /users` | full array |
//! | `create_user` | `POST /users` `{name, email, phone}` | echoed record with server id |
//! | `update_user` | `PUT /users/{id}` `{name, email, phone}` | status only |
//! | `delete_user` | `DELETE /users/{id}` | status only |

mod client;
pub mod config;
pub mod error;
mod http;
mod memory;
pub mod models;

pub use client::UsersApi;
pub use config::{ApiConfig, DEFAULT_BASE_URL, PLACEHOLDER_PHONE};
pub use error::{ApiError, ConfigError, Operation};
pub use http::HttpUsersApi;
pub use memory::{MemoryUsersApi, Request};
pub use models::{UserPayload, UserRecord};
