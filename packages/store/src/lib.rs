pub mod config;
pub mod prefs;

mod kv;
pub use kv::{KeyValueStore, KEY_THEME, KEY_TOKEN, KEY_USER_ID};

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use config::QuoteShelfConfig;
pub use prefs::Theme;
