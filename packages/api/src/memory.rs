use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::UsersApi;
use crate::error::{ApiError, Operation};
use crate::models::{UserPayload, UserRecord};

/// A call received by [`MemoryUsersApi`], in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    List,
    Create(UserPayload),
    Update(i64, UserPayload),
    Delete(i64),
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserRecord>,
    failing: HashSet<Operation>,
    requests: Vec<Request>,
}

impl Inner {
    fn check(&self, op: Operation) -> Result<(), ApiError> {
        if self.failing.contains(&op) {
            Err(ApiError::Unavailable(op))
        } else {
            Ok(())
        }
    }
}

/// In-memory UsersApi for testing and offline use.
///
/// Ids are assigned as one past the current maximum. Individual operations can
/// be made to fail with [`MemoryUsersApi::fail`].
#[derive(Clone, Debug, Default)]
pub struct MemoryUsersApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUsersApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let api = Self::default();
        api.lock().users = users;
        api
    }

    /// Make every subsequent call of `op` fail.
    pub fn fail(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    /// Undo [`Self::fail`].
    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    /// Server-side view of the collection.
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UsersApi for MemoryUsersApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let mut inner = self.lock();
        inner.requests.push(Request::List);
        inner.check(Operation::List)?;
        Ok(inner.users.clone())
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, ApiError> {
        let mut inner = self.lock();
        inner.requests.push(Request::Create(payload.clone()));
        inner.check(Operation::Create)?;
        let id = inner.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = UserRecord::from_payload(id, payload);
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.requests.push(Request::Update(id, payload.clone()));
        inner.check(Operation::Update)?;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(ApiError::NotFound(id))?;
        user.merge(payload);
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.requests.push(Request::Delete(id));
        inner.check(Operation::Delete)?;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        if inner.users.len() == before {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}
