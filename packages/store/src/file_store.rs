//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists entries as one file per key under a base directory.
//! It is what keeps a login alive across app restarts on desktop platforms.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token       # bearer token string
//! ├── userId      # decimal user id string
//! └── theme       # "dark" or "light"
//! ```
//!
//! The base directory is created lazily on first write. Every I/O failure is
//! swallowed: reads answer `None`, writes are dropped. That matches the
//! degraded-storage contract in [`crate::kv`].

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
