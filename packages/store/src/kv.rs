//! # Key-value storage behind session and preference state
//!
//! [`KeyValueStore`] is the small async interface the rest of QuoteShelf uses
//! to remember state across restarts: the bearer token and user id of the
//! logged-in user, and the UI theme preference. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::file_store`]).
//!
//! Backends are infallible by signature: a store that cannot read answers
//! `None`, and a store that cannot write drops the write. A session sitting on
//! a broken store keeps working in memory for the current process; it just
//! does not survive the next restart.

/// Storage key holding the bearer token of the logged-in user.
pub const KEY_TOKEN: &str = "token";

/// Storage key holding the decimal string id of the logged-in user.
pub const KEY_USER_ID: &str = "userId";

/// Storage key holding the UI theme preference.
pub const KEY_THEME: &str = "theme";

/// Async trait for reading and writing persisted string entries.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}
