//! Authentication endpoints and session lifecycle on [`Client`].

use serde::Serialize;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::Client;
use crate::models::LoginResponse;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

impl<S: KeyValueStore> Client<S> {
    /// `POST /Authentication/login`.
    ///
    /// On success the session becomes authenticated as the returned user and
    /// the `userId`/`token` pair is persisted. On any non-2xx the session is
    /// left exactly as it was and the backend's message ("Invalid login" and
    /// friends) comes back in the error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post_json(
                "/Authentication/login",
                &Credentials { username, password },
            )
            .await?;
        self.session()
            .establish(response.user_id, username, &response.token)
            .await;
        Ok(response)
    }

    /// `POST /Authentication/register`.
    ///
    /// Registration does not imply login: the session is untouched whatever
    /// the outcome. Failures carry the backend's message.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.post_unit(
            "/Authentication/register",
            &Credentials { username, password },
        )
        .await
    }

    /// Forget the current login. Purely local: storage entries are removed
    /// and the in-memory session resets; the backend is not called.
    pub async fn logout(&self) {
        self.session().clear().await;
    }

    /// Restore a previous login from the persisted store, if one exists.
    /// See [`SessionHandle::hydrate`](crate::SessionHandle::hydrate).
    pub async fn hydrate(&self) {
        self.session().hydrate().await;
    }
}
