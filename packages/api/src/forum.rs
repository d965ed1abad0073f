//! Forum view: every user with their public quotes.

use futures_util::future::join_all;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::Client;
use crate::models::{ApiUser, ForumUser};

impl<S: KeyValueStore> Client<S> {
    /// `GET /Users`, then `GET /Users/{id}/quotes` for each user, all quote
    /// listings in flight at once.
    ///
    /// A user whose quotes fail to load contributes an empty list rather than
    /// failing the whole page; only the initial user listing is fatal.
    pub async fn forum(&self) -> Result<Vec<ForumUser>, ApiError> {
        let users: Vec<ApiUser> = self.get_json("/Users").await?;

        let quotes = join_all(users.iter().map(|user| self.user_quotes(user.id))).await;

        Ok(users
            .into_iter()
            .zip(quotes)
            .map(|(user, quotes)| ForumUser {
                id: user.id,
                name: user
                    .username
                    .unwrap_or_else(|| format!("User {}", user.id)),
                quotes: quotes.unwrap_or_default(),
            })
            .collect())
    }
}
