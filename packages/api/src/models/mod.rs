//! Wire models for the remote users collection.

mod user;

pub use user::{UserPayload, UserRecord};
