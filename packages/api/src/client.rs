use std::future::Future;

use crate::error::ApiError;
use crate::models::{UserPayload, UserRecord};

/// Async interface to the remote users collection.
///
/// Futures are not required to be `Send` so the same implementations run on
/// the browser's fetch backend and on native tokio.
pub trait UsersApi {
    /// `GET /users`
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, ApiError>>;
    /// `POST /users`, returning the server's echo with its assigned id.
    fn create_user(
        &self,
        payload: &UserPayload,
    ) -> impl Future<Output = Result<UserRecord, ApiError>>;
    /// `PUT /users/{id}`. The response body is not consulted.
    fn update_user(
        &self,
        id: i64,
        payload: &UserPayload,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// `DELETE /users/{id}`
    fn delete_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}
