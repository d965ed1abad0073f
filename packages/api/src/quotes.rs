//! Quote collection endpoints, including the favorite toggle.

use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::Client;
use crate::models::{FavoriteResponse, NewQuote, QuotePatch, UserQuote};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoritePatch {
    is_favorite: bool,
}

impl<S: KeyValueStore> Client<S> {
    /// `GET /Users/{user_id}/quotes` — a specific user's quotes, as shown on
    /// their quotes page and aggregated by [`Client::forum`].
    pub async fn user_quotes(&self, user_id: i64) -> Result<Vec<UserQuote>, ApiError> {
        self.get_json(&format!("/Users/{user_id}/quotes")).await
    }

    /// `GET /Quotes/{id}`.
    pub async fn get_quote(&self, id: i64) -> Result<UserQuote, ApiError> {
        self.get_json(&format!("/Quotes/{id}")).await
    }

    /// `POST /Quotes`.
    pub async fn create_quote(&self, quote: &NewQuote) -> Result<UserQuote, ApiError> {
        self.post_json("/Quotes", quote).await
    }

    /// `PUT /Quotes/{id}` with a partial payload.
    pub async fn update_quote(&self, id: i64, patch: &QuotePatch) -> Result<UserQuote, ApiError> {
        self.put_json(&format!("/Quotes/{id}"), patch).await
    }

    /// `DELETE /Quotes/{id}`.
    pub async fn delete_quote(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Quotes/{id}")).await
    }

    /// `PATCH /Quotes/{id}/favorite`.
    ///
    /// The backend enforces the favorites cap; a rejection comes back as a
    /// [`ApiError::Backend`] carrying its message, with the quote unchanged.
    pub async fn set_favorite(&self, id: i64, is_favorite: bool) -> Result<FavoriteResponse, ApiError> {
        self.patch_json(
            &format!("/Quotes/{id}/favorite"),
            &FavoritePatch { is_favorite },
        )
        .await
    }
}
