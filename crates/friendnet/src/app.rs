//! Application context for a session.
//!
//! `App` owns the graph store for the lifetime of one session and is
//! passed by reference to every command. Nothing about the network lives
//! in global state.

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::store::{GraphStore, new_in_memory_store};
use std::path::Path;

/// Application context for CLI operations.
pub struct App {
    /// The storage backend (trait object for polymorphism)
    store: Box<dyn GraphStore>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("store", &"<dyn GraphStore>")
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an App with an empty in-memory network.
    pub fn new() -> Self {
        Self::with_store(new_in_memory_store())
    }

    /// Create an App around an existing store.
    pub fn with_store(store: Box<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Create an App seeded from a YAML network file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// seeded user or connection is rejected.
    pub async fn from_config(path: &Path) -> Result<Self> {
        let config = NetworkConfig::load(path).await?;
        let mut app = Self::new();
        config.apply(app.store_mut()).await?;
        Ok(app)
    }

    /// Get a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut dyn GraphStore {
        self.store.as_mut()
    }

    /// Get an immutable reference to the store.
    pub fn store(&self) -> &dyn GraphStore {
        self.store.as_ref()
    }
}
