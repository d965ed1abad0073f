//! # Authorization pipeline
//!
//! [`Client`] wraps a `reqwest::Client` with the two interception points every
//! QuoteShelf call goes through:
//!
//! 1. **Outgoing** — if the session holds a token, the request gains an
//!    `Authorization: Bearer <token>` header. Nothing else is touched, and a
//!    request issued without a token goes out unmodified. Pure data
//!    transformation, cannot fail.
//! 2. **Incoming** — a 401 response clears the session (storage included) and
//!    broadcasts [`SessionEvent::Expired`](crate::SessionEvent) before the
//!    error is handed back to the caller. The failure is never swallowed;
//!    the teardown is an added side effect.
//!
//! Endpoint modules ([`crate::auth`], [`crate::books`], [`crate::quotes`],
//! [`crate::forum`]) are thin typed wrappers over the `*_json` helpers here.
//!
//! There is no retry after re-authentication and no ordering across
//! independent in-flight calls: each request reads whatever token the session
//! holds at the moment it is built.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{KeyValueStore, QuoteShelfConfig};

use crate::error::ApiError;
use crate::session::SessionHandle;

/// HTTP client for the QuoteShelf backend, generic over the persisted store
/// backing its session.
#[derive(Clone, Debug)]
pub struct Client<S: KeyValueStore> {
    http: reqwest::Client,
    base: String,
    session: SessionHandle<S>,
}

impl<S: KeyValueStore> Client<S> {
    /// Build a client against `base_url` (no trailing slash needed) with a
    /// fresh, unauthenticated session persisted in `store`.
    pub fn new(base_url: &str, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
            session: SessionHandle::new(store),
        }
    }

    /// Build a client from a parsed `quoteshelf.toml`.
    pub fn from_config(config: &QuoteShelfConfig, store: S) -> Self {
        Self::new(&config.api.base_url, store)
    }

    /// The session holder backing this client.
    pub fn session(&self) -> &SessionHandle<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attach the bearer token, if any, to an outgoing request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.current().token {
            Some(token) => {
                tracing::debug!("attaching bearer token to outgoing request");
                request.bearer_auth(token)
            }
            None => request,
        }
    }

    /// Send a request through the pipeline and map non-success statuses to
    /// [`ApiError::Backend`], running the 401 session teardown on the way.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("authentication rejected by backend, clearing session");
            self.session.expire().await;
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Backend {
            status,
            message: backend_message(status, &body),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST whose response body the caller does not care about.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.patch(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error body. Backends answer with
/// either `{"message": "..."}` or plain text; fall back to the status line
/// when the body is empty.
fn backend_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
