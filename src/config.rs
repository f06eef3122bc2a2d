//! Configuration for workbook handling.
//!
//! Provides the handler configuration shared by the parse orchestrator and
//! the file handler, including the region index policy for server files
//! whose region page is missing or malformed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for consumption workbook processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Root directory of the server file store
    pub store_root: PathBuf,

    /// Treat a missing/malformed region index page as "no regions recorded"
    /// instead of a hard failure. Off by default: a server file without a
    /// readable region page cannot guarantee duplicate detection.
    pub permissive_region_index: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from("./server-files"),
            permissive_region_index: false,
        }
    }
}

impl HandlerConfig {
    /// Create configuration with a custom store root
    pub fn with_store_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.store_root = root.into();
        self
    }

    /// Enable or disable the permissive region index policy
    pub fn with_permissive_region_index(mut self, permissive: bool) -> Self {
        self.permissive_region_index = permissive;
        self
    }
}
