//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::sync::Arc;

use crate::core::content::{Choice, ContentModel, Node};
use crate::core::engine::{Navigator, NavigatorOptions};
use crate::core::store::{MemoryStore, Store, StoreError};

/// A store whose every operation fails, like a full or disabled disk.
pub struct FailingStore;

impl Store for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Io(io::Error::other("storage disabled")))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::other("quota exceeded")))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::other("storage disabled")))
    }
}

/// A three-node tree whose root has one dangling option (index 2).
pub fn sample_content() -> ContentModel {
    ContentModel::new([
        Node::question(
            "root",
            "Pick one",
            vec![
                Choice::new("Leaf", "leaf"),
                Choice::new("Branch", "branch"),
                Choice::new("Nowhere", "missing"),
            ],
        ),
        Node::question("branch", "Deeper?", vec![Choice::new("Leaf", "leaf")]),
        Node::result("leaf", "Done", "**All** done."),
    ])
}

/// Navigator over the built-in tree with an in-memory store.
pub fn test_navigator() -> Navigator {
    Navigator::open(
        Arc::new(ContentModel::builtin().expect("built-in tree parses")),
        Box::new(MemoryStore::new()),
        NavigatorOptions::default(),
    )
}

/// Flatten a test terminal buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
