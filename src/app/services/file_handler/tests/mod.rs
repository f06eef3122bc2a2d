//! Tests for server file merging and deletion
//!
//! Fixture helpers live with the workbook parser tests and are reused
//! here, together with a handler rooted at a fresh store directory.

use std::sync::Arc;
use tempfile::TempDir;

use super::FileHandler;
use crate::app::adapters::store::DirStore;
use crate::config::HandlerConfig;


/// A handler over a fresh store directory, plus the tempdir keeping it alive
pub fn test_handler() -> (FileHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(DirStore::new(dir.path()));
    let config = HandlerConfig::default().with_store_root(dir.path());
    (FileHandler::new(store, config), dir)
}
