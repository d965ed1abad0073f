//! # API crate — QuoteShelf backend client
//!
//! Everything a QuoteShelf frontend needs to talk to the backend: the session
//! state holder, the authorization pipeline wrapped around `reqwest`, and
//! typed wrappers for each endpoint group.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionHandle`]: observable login state plus its persisted `token`/`userId` mirror |
//! | [`http`] | [`Client`]: bearer-token injection on the way out, 401 session teardown on the way in |
//! | [`auth`] | `login`, `register`, `logout`, `hydrate` |
//! | [`books`] / [`quotes`] / [`forum`] | Thin typed endpoint wrappers riding the pipeline |
//! | [`models`] | camelCase wire structs |
//! | [`error`] | [`ApiError`] |
//!
//! ## Typical startup
//!
//! ```no_run
//! # async fn start() {
//! let store = store::FileStore::new(std::path::PathBuf::from("/tmp/quoteshelf"));
//! let client = api::Client::new("http://localhost:5000/api", store);
//!
//! // Restore a previous login, if storage has one.
//! client.hydrate().await;
//!
//! // React to token rejection, e.g. by navigating to the login screen.
//! let mut events = client.session().events();
//! # }
//! ```

pub mod auth;
pub mod books;
pub mod error;
pub mod forum;
pub mod http;
pub mod models;
pub mod quotes;
pub mod session;

pub use error::ApiError;
pub use http::Client;
pub use models::{
    ApiUser, BookPatch, FavoriteResponse, ForumUser, LoginResponse, NewBook, NewQuote, QuotePatch,
    UserBook, UserQuote,
};
pub use session::{Session, SessionEvent, SessionHandle};
