//! # Session state holder
//!
//! Single source of truth for who is logged in. The rest of the workspace —
//! and any frontend sitting on top — reads authentication state from here and
//! never touches the `token`/`userId` storage keys directly.
//!
//! In-memory state lives in a `tokio::sync::watch` channel so observers can
//! subscribe for reactive rendering; the persisted mirror is whatever
//! [`KeyValueStore`] the handle was built with. Every mutation writes the
//! store first and publishes to the channel second, so an observer never sees
//! an authenticated session the store does not yet back. `send_modify`
//! serialises concurrent mutations, which keeps the memory/storage pair
//! consistent when handles are cloned across tasks.

use std::sync::Arc;

use store::{KeyValueStore, KEY_TOKEN, KEY_USER_ID};
use tokio::sync::{broadcast, watch};

/// Authentication state of the current client process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Session {
    /// True iff both a user id and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some() && self.token.is_some()
    }
}

/// Out-of-band session notifications, delivered on a broadcast channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the current token. The session has already been
    /// cleared; a frontend should navigate to its login screen.
    Expired,
}

/// Cloneable handle to the session state and its persisted mirror.
#[derive(Clone, Debug)]
pub struct SessionHandle<S: KeyValueStore> {
    store: S,
    state: Arc<watch::Sender<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl<S: KeyValueStore> SessionHandle<S> {
    pub fn new(store: S) -> Self {
        let (state, _) = watch::channel(Session::default());
        let (events, _) = broadcast::channel(8);
        Self {
            store,
            state: Arc::new(state),
            events,
        }
    }

    /// Restore a previous login from the persisted store. Call once at
    /// startup, before issuing any requests.
    ///
    /// The stored token is trusted without asking the backend; a stale or
    /// revoked token is only discovered when the first authenticated call
    /// comes back 401.
    pub async fn hydrate(&self) {
        let stored_id = self.store.get(KEY_USER_ID).await;
        let token = self.store.get(KEY_TOKEN).await;

        if let (Some(stored_id), Some(token)) = (stored_id, token) {
            match stored_id.trim().parse::<i64>() {
                Ok(user_id) if user_id > 0 => {
                    // Username is not persisted and stays unset until the
                    // next login.
                    self.state.send_modify(|session| {
                        *session = Session {
                            user_id: Some(user_id),
                            username: None,
                            token: Some(token),
                        };
                    });
                    tracing::debug!(user_id, "session restored from storage");
                }
                _ => {
                    tracing::debug!(stored_id = %stored_id, "ignoring stored session with invalid user id");
                }
            }
        }
    }

    /// Record a successful login in storage and memory.
    pub(crate) async fn establish(&self, user_id: i64, username: &str, token: &str) {
        self.store.set(KEY_USER_ID, &user_id.to_string()).await;
        self.store.set(KEY_TOKEN, token).await;
        self.state.send_modify(|session| {
            *session = Session {
                user_id: Some(user_id),
                username: Some(username.to_string()),
                token: Some(token.to_string()),
            };
        });
        tracing::debug!(user_id, username, "session established");
    }

    /// Clear the session from storage and memory. Idempotent and infallible;
    /// no network call is made (tokens are stateless, they simply stop being
    /// sent). The `theme` preference is untouched.
    pub async fn clear(&self) {
        self.store.remove(KEY_USER_ID).await;
        self.store.remove(KEY_TOKEN).await;
        self.state.send_modify(|session| *session = Session::default());
    }

    /// React to an authentication rejection: clear the session, then signal
    /// observers. Clearing does not depend on anyone listening — a frontend
    /// with no event subscriber still loses the dead session.
    pub(crate) async fn expire(&self) {
        self.clear().await;
        let _ = self.events.send(SessionEvent::Expired);
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Subscribe to session changes for reactive rendering.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Subscribe to session notifications such as [`SessionEvent::Expired`].
    pub fn events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{FileStore, MemoryStore};

    #[tokio::test]
    async fn test_hydrate_restores_stored_pair() {
        let store = MemoryStore::new();
        store.set(KEY_USER_ID, "7").await;
        store.set(KEY_TOKEN, "tkn123").await;

        let handle = SessionHandle::new(store);
        assert!(!handle.current().is_authenticated());

        handle.hydrate().await;
        let session = handle.current();
        assert!(session.is_authenticated());
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.token.as_deref(), Some("tkn123"));
        assert_eq!(session.username, None);
    }

    #[tokio::test]
    async fn test_hydrate_requires_both_entries() {
        let store = MemoryStore::new();
        store.set(KEY_TOKEN, "tkn123").await;

        let handle = SessionHandle::new(store);
        handle.hydrate().await;
        assert!(!handle.current().is_authenticated());
    }

    #[tokio::test]
    async fn test_hydrate_rejects_bad_user_id() {
        for bad_id in ["abc", "0", "-3", ""] {
            let store = MemoryStore::new();
            store.set(KEY_USER_ID, bad_id).await;
            store.set(KEY_TOKEN, "tkn123").await;

            let handle = SessionHandle::new(store);
            handle.hydrate().await;
            assert!(
                !handle.current().is_authenticated(),
                "user id {bad_id:?} should not hydrate"
            );
        }
    }

    #[tokio::test]
    async fn test_establish_persists_and_publishes() {
        let store = MemoryStore::new();
        let handle = SessionHandle::new(store.clone());
        let mut watcher = handle.subscribe();

        handle.establish(7, "alice", "tkn123").await;

        let session = handle.current();
        assert!(session.is_authenticated());
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(store.get(KEY_USER_ID).await.as_deref(), Some("7"));
        assert_eq!(store.get(KEY_TOKEN).await.as_deref(), Some("tkn123"));

        assert!(watcher.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        let handle = SessionHandle::new(store.clone());
        handle.establish(7, "alice", "tkn123").await;

        handle.clear().await;
        let after_first = handle.current();
        assert_eq!(after_first, Session::default());
        assert!(store.get(KEY_USER_ID).await.is_none());
        assert!(store.get(KEY_TOKEN).await.is_none());

        handle.clear().await;
        assert_eq!(handle.current(), after_first);
    }

    #[tokio::test]
    async fn test_clear_leaves_theme_alone() {
        let store = MemoryStore::new();
        store.set(store::KEY_THEME, "dark").await;

        let handle = SessionHandle::new(store.clone());
        handle.establish(7, "alice", "tkn123").await;
        handle.clear().await;

        assert_eq!(store.get(store::KEY_THEME).await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_expire_clears_and_signals_once() {
        let store = MemoryStore::new();
        let handle = SessionHandle::new(store.clone());
        handle.establish(7, "alice", "tkn123").await;
        let mut events = handle.events();

        handle.expire().await;

        assert!(!handle.current().is_authenticated());
        assert!(store.get(KEY_TOKEN).await.is_none());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::Expired);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broken_store_degrades_to_memory() {
        // The store's base path sits under a regular file, so directory
        // creation and every write fail, and every read answers None.
        let blocker =
            std::env::temp_dir().join(format!("quoteshelf_blocker_{}", std::process::id()));
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileStore::new(blocker.join("data"));

        let handle = SessionHandle::new(store.clone());
        handle.establish(7, "alice", "tkn123").await;

        let session = handle.current();
        assert!(session.is_authenticated());
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.token.as_deref(), Some("tkn123"));
        // Nothing made it to disk; this login will not survive a restart.
        assert!(store.get(KEY_USER_ID).await.is_none());
        assert!(store.get(KEY_TOKEN).await.is_none());

        // Clearing over the broken store is still infallible and idempotent.
        handle.clear().await;
        assert!(!handle.current().is_authenticated());
        handle.clear().await;
        assert!(!handle.current().is_authenticated());

        let _ = std::fs::remove_file(&blocker);
    }

    #[tokio::test]
    async fn test_expire_without_subscribers_still_clears() {
        let store = MemoryStore::new();
        let handle = SessionHandle::new(store.clone());
        handle.establish(7, "alice", "tkn123").await;

        handle.expire().await;
        assert!(!handle.current().is_authenticated());
        assert!(store.get(KEY_USER_ID).await.is_none());
    }
}
