//! # Wire models for the QuoteShelf backend
//!
//! Everything the backend sends or accepts is camelCase JSON (`userId`,
//! `isFavorite`, `publishedDate`), so each struct carries
//! `#[serde(rename_all = "camelCase")]`.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`LoginResponse`] | Body of a successful `POST /Authentication/login`. |
//! | [`UserBook`] | A book in a user's collection. |
//! | [`UserQuote`] | A quote, including its favorite flag. |
//! | [`FavoriteResponse`] | Body of `PATCH /Quotes/{id}/favorite`. |
//! | [`ForumUser`] | A user plus their public quotes, as shown on the forum page. |
//!
//! The `New*`/`*Patch` structs are request payloads; patch fields are
//! `Option` and skipped when unset so partial updates stay partial on the
//! wire.

use serde::{Deserialize, Serialize};

/// Body of a successful login: the authenticated user's id and the bearer
/// token every later request carries.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: i64,
    pub token: String,
}

/// A book in a user's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub user_id: i64,
}

/// Payload for creating a book.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub user_id: i64,
}

/// Partial update for a book; unset fields are left untouched by the backend.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// A quote, as stored in a user's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuote {
    pub id: i64,
    pub description: String,
    pub author: Option<String>,
    pub user_id: Option<i64>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Payload for creating a quote.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Partial update for a quote.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Body of `PATCH /Quotes/{id}/favorite`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: i64,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A user record from `GET /Users`. The backend has been seen spelling the
/// name field both `username` and `userName`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: i64,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
}

/// A user plus their public quotes, as aggregated for the forum page.
#[derive(Clone, Debug, PartialEq)]
pub struct ForumUser {
    pub id: i64,
    pub name: String,
    pub quotes: Vec<UserQuote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_format() {
        let res: LoginResponse =
            serde_json::from_str(r#"{"userId": 7, "token": "tkn123"}"#).unwrap();
        assert_eq!(res.user_id, 7);
        assert_eq!(res.token, "tkn123");
    }

    #[test]
    fn test_quote_missing_favorite_defaults_false() {
        let quote: UserQuote = serde_json::from_str(
            r#"{"id": 1, "description": "To be", "author": "Shakespeare", "userId": 7}"#,
        )
        .unwrap();
        assert!(!quote.is_favorite);
    }

    #[test]
    fn test_book_patch_skips_unset_fields() {
        let patch = BookPatch {
            title: Some("Dune".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"title":"Dune"}"#
        );
    }

    #[test]
    fn test_api_user_name_spellings() {
        let a: ApiUser = serde_json::from_str(r#"{"id": 1, "username": "alice"}"#).unwrap();
        let b: ApiUser = serde_json::from_str(r#"{"id": 2, "userName": "bob"}"#).unwrap();
        let c: ApiUser = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(a.username.as_deref(), Some("alice"));
        assert_eq!(b.username.as_deref(), Some("bob"));
        assert!(c.username.is_none());
    }
}
