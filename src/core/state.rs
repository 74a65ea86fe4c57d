//! # Navigation State
//!
//! Everything the navigator mutates, in one place.
//!
//! ```text
//! NavigationState
//! ├── current: Option<NodeId>   // node on screen (None before first entry / after reset)
//! ├── history: Vec<NodeId>      // ancestors only, pushed on descend, popped on back
//! └── language: String          // active language key
//!
//! Screen
//! ├── Intro                     // idle/start screen, also the fallback for bad ids
//! ├── Question(NodeId)
//! └── Result(NodeId)
//! ```
//!
//! Only `current` and `history` are mirrored to storage (as `SavedNavigation`).
//! The language is stored separately and is the one value read back at startup.

use serde::{Deserialize, Serialize};

use crate::core::content::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Question(NodeId),
    Result(NodeId),
}

impl Screen {
    /// Node shown on this screen, if any.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Screen::Intro => None,
            Screen::Question(id) | Screen::Result(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Option<NodeId>,
    pub history: Vec<NodeId>,
    pub language: String,
}

impl NavigationState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            current: None,
            history: Vec::new(),
            language: language.into(),
        }
    }

    pub fn back_enabled(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn saved(&self) -> SavedNavigation {
        SavedNavigation {
            current: self.current.clone(),
            history: self.history.clone(),
        }
    }
}

/// Stored shape of the navigation position: `{ "current": ..., "history": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNavigation {
    pub current: Option<NodeId>,
    pub history: Vec<NodeId>,
}
