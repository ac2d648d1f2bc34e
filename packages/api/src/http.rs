//! reqwest-backed [`UsersApi`].

use crate::client::UsersApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{UserPayload, UserRecord};

/// Talks to `{base_url}/users` over HTTP. Any non-2xx status is an error.
#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}

impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, "fetching users");
        let users = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UserRecord>>()
            .await?;
        Ok(users)
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, name = %payload.name, "creating user");
        let user = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json::<UserRecord>()
            .await?;
        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<(), ApiError> {
        let url = self.member_url(id);
        tracing::debug!(%url, name = %payload.name, "updating user");
        self.client
            .put(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let url = self.member_url(id);
        tracing::debug!(%url, "deleting user");
        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    /// Id the test server refuses to update or delete.
    const BROKEN_ID: i64 = 99;

    #[derive(Clone, Default)]
    struct ServerState {
        received: Arc<Mutex<Vec<(String, Option<UserPayload>)>>>,
    }

    impl ServerState {
        fn record(&self, call: &str, payload: Option<UserPayload>) {
            self.received
                .lock()
                .unwrap()
                .push((call.to_string(), payload));
        }
    }

    async fn list(State(state): State<ServerState>) -> Json<Value> {
        state.record("list", None);
        Json(json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz" },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv" }
        ]))
    }

    async fn create(
        State(state): State<ServerState>,
        Json(payload): Json<UserPayload>,
    ) -> (StatusCode, Json<Value>) {
        state.record("create", Some(payload.clone()));
        (
            StatusCode::CREATED,
            Json(json!({
                "name": payload.name,
                "email": payload.email,
                "phone": payload.phone,
                "id": 11
            })),
        )
    }

    async fn update(
        State(state): State<ServerState>,
        Path(id): Path<i64>,
        Json(payload): Json<UserPayload>,
    ) -> StatusCode {
        state.record(&format!("update {id}"), Some(payload));
        if id == BROKEN_ID {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }

    async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
        state.record(&format!("delete {id}"), None);
        if id == BROKEN_ID {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }

    async fn spawn_users_server() -> (String, ServerState) {
        let state = ServerState::default();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/users", get(list).post(create))
            .route("/users/{id}", put(update).delete(remove))
            .with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (format!("http://{addr}"), state)
    }

    fn payload(name: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: "jane@example.com".to_string(),
            phone: "123-456-7890".to_string(),
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = HttpUsersApi::new("http://example.test/");
        assert_eq!(api.base_url(), "http://example.test");
        assert_eq!(api.collection_url(), "http://example.test/users");
        assert_eq!(api.member_url(7), "http://example.test/users/7");
    }

    #[tokio::test]
    async fn test_list_users() {
        let (base_url, state) = spawn_users_server().await;
        let api = HttpUsersApi::new(base_url);

        let users = api.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[1].email, "Shanna@melissa.tv");
        assert_eq!(state.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_user_returns_server_id() {
        let (base_url, state) = spawn_users_server().await;
        let api = HttpUsersApi::new(base_url);

        let created = api.create_user(&payload("Jane Doe")).await.unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(created.name, "Jane Doe");
        assert_eq!(created.phone.as_deref(), Some("123-456-7890"));

        let received = state.received.lock().unwrap();
        assert_eq!(received[0], ("create".to_string(), Some(payload("Jane Doe"))));
    }

    #[tokio::test]
    async fn test_update_user_sends_put_to_member() {
        let (base_url, state) = spawn_users_server().await;
        let api = HttpUsersApi::new(base_url);

        api.update_user(1, &payload("Jane Graham")).await.unwrap();

        let received = state.received.lock().unwrap();
        assert_eq!(
            received[0],
            ("update 1".to_string(), Some(payload("Jane Graham")))
        );
    }

    #[tokio::test]
    async fn test_delete_user() {
        let (base_url, state) = spawn_users_server().await;
        let api = HttpUsersApi::new(base_url);

        api.delete_user(2).await.unwrap();
        assert_eq!(state.received.lock().unwrap()[0].0, "delete 2");
    }

    #[tokio::test]
    async fn test_error_status_is_failure() {
        let (base_url, _state) = spawn_users_server().await;
        let api = HttpUsersApi::new(base_url);

        let err = api.update_user(BROKEN_ID, &payload("X Y")).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(api.delete_user(BROKEN_ID).await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpUsersApi::new(format!("http://{addr}"));
        assert!(matches!(
            api.list_users().await,
            Err(ApiError::Transport(_))
        ));
    }
}
