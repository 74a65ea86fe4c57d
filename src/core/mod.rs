//! # Core Application Logic
//!
//! This module contains Lifeline's business logic: the decision tree, the
//! navigation engine and everything it persists. It knows nothing about
//! any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ContentModel (tree)  │
//!                    │  • Navigator (engine)   │
//!                    │  • Action → update()    │
//!                    │                         │
//!                    │  Storage behind traits  │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    CLI     │
//!          │  Adapter   │                │  check /   │
//!          │ (ratatui)  │                │   show     │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`text`]: `LocalizedText` and the language fallback algorithm
//! - [`content`]: Nodes, the content model and its validation
//! - [`state`]: `NavigationState` and the current `Screen`
//! - [`view`]: Render-ready projections of a screen
//! - [`engine`]: The `Navigator`, the only owner of navigation state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`store`]: Best-effort key-value persistence
//! - [`clipboard`]: Copying advice text out of the app
//! - [`markup`]: Markdown bodies as plain text
//! - [`config`]: Layered configuration

pub mod action;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod engine;
pub mod markup;
pub mod state;
pub mod store;
pub mod text;
pub mod view;
