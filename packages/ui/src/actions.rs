//! Remote operations started from event handlers.
//!
//! Each one snapshots what it needs from the signal, spawns the request and
//! applies the response to the state as it is when the response lands. Nothing
//! is cancelled or de-duplicated: two quick clicks on Save send two creates.

use api::UsersApi;
use dioxus::prelude::*;
use store::{FormMode, UserListState};

use crate::provider::UsersClient;

/// Save or update depending on the form mode.
pub fn submit(users: Signal<UserListState>, client: UsersClient) {
    let mode = users.read().form.mode;
    match mode {
        FormMode::Creating => save_user(users, client),
        FormMode::Editing(id) => update_user(users, client, id),
        FormMode::Idle => {}
    }
}

pub fn save_user(mut users: Signal<UserListState>, client: UsersClient) {
    let payload = users.read().payload(&client.phone);
    spawn(async move {
        let result = client.api.create_user(&payload).await;
        users.write().apply_created(result);
    });
}

pub fn update_user(mut users: Signal<UserListState>, client: UsersClient, id: i64) {
    let payload = users.read().payload(&client.phone);
    spawn(async move {
        let result = client.api.update_user(id, &payload).await;
        users.write().apply_updated(id, &payload, result);
    });
}

pub fn delete_user(mut users: Signal<UserListState>, client: UsersClient, id: i64) {
    spawn(async move {
        let result = client.api.delete_user(id).await;
        users.write().apply_deleted(id, result);
    });
}
