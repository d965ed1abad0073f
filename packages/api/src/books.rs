//! Book collection endpoints. Payloads are opaque to the auth core; these
//! calls exist so every piece of app traffic rides the same pipeline.

use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::Client;
use crate::models::{BookPatch, NewBook, UserBook};

impl<S: KeyValueStore> Client<S> {
    /// `GET /Books` — the caller's book collection.
    pub async fn list_books(&self) -> Result<Vec<UserBook>, ApiError> {
        self.get_json("/Books").await
    }

    /// `GET /Users/{user_id}/books` — a specific user's collection, as shown
    /// on their books page.
    pub async fn user_books(&self, user_id: i64) -> Result<Vec<UserBook>, ApiError> {
        self.get_json(&format!("/Users/{user_id}/books")).await
    }

    /// `GET /Books/{id}`.
    pub async fn get_book(&self, id: i64) -> Result<UserBook, ApiError> {
        self.get_json(&format!("/Books/{id}")).await
    }

    /// `POST /Books`.
    pub async fn create_book(&self, book: &NewBook) -> Result<UserBook, ApiError> {
        self.post_json("/Books", book).await
    }

    /// `PUT /Books/{id}` with a partial payload.
    pub async fn update_book(&self, id: i64, patch: &BookPatch) -> Result<UserBook, ApiError> {
        self.put_json(&format!("/Books/{id}"), patch).await
    }

    /// `DELETE /Books/{id}`.
    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Books/{id}")).await
    }
}
