//! # Content Model
//!
//! The decision tree: an immutable map from node id to node, loaded once at
//! startup and only read afterwards.
//!
//! ```text
//! ContentModel
//! └── nodes: IndexMap<NodeId, Node>
//!     ├── "general_intro" → Question { question, options: [Choice { text, next }] }
//!     └── "general_error" → Result { title, body }
//! ```
//!
//! Loading is forgiving. A node whose JSON has the wrong shape, or that is
//! neither a question nor a result, is dropped and reported, and [`ContentModel::validate`] reports dangling
//! option targets, empty option lists, id/key mismatches and cycles without
//! refusing the tree. The navigator treats any id it cannot find as a
//! return to the intro screen.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::text::LocalizedText;

pub type NodeId = String;

/// The tree shipped with the binary.
const BUILTIN_TREE: &str = include_str!("../../assets/tree.json");

// ============================================================================
// Node Types
// ============================================================================

/// One selectable answer of a question node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub text: LocalizedText,
    #[serde(default)]
    pub next: NodeId,
}

impl Choice {
    pub fn new(text: impl Into<LocalizedText>, next: impl Into<NodeId>) -> Self {
        Self {
            text: text.into(),
            next: next.into(),
        }
    }
}

/// Title and body of a result node. The body is Markdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Advice {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub body: LocalizedText,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Question {
        question: LocalizedText,
        options: Vec<Choice>,
    },
    Result(Advice),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl Node {
    pub fn question(
        id: impl Into<NodeId>,
        question: impl Into<LocalizedText>,
        options: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Question {
                question: question.into(),
                options,
            },
        }
    }

    pub fn result(
        id: impl Into<NodeId>,
        title: impl Into<LocalizedText>,
        body: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Result(Advice {
                title: title.into(),
                body: body.into(),
            }),
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self.kind, NodeKind::Question { .. })
    }
}

/// Wire shape of a node before it is sorted into question/result.
#[derive(Deserialize)]
struct RawNode {
    id: Option<String>,
    question: Option<LocalizedText>,
    #[serde(default)]
    options: Vec<Choice>,
    result: Option<Advice>,
}

// ============================================================================
// Start Targets
// ============================================================================

/// The two externally reachable entry points of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTarget {
    General,
    Git,
}

impl StartTarget {
    pub const ALL: [StartTarget; 2] = [StartTarget::General, StartTarget::Git];

    pub fn root_id(self) -> &'static str {
        match self {
            StartTarget::General => "general_intro",
            StartTarget::Git => "git_intro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StartTarget::General => "General Coding Help",
            StartTarget::Git => "Git & GitHub Help",
        }
    }
}

// ============================================================================
// Issues and Errors
// ============================================================================

/// A problem found in the authored tree. Never fatal on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    IdMismatch { key: NodeId, id: NodeId },
    DanglingTarget { node: NodeId, option: usize, target: NodeId },
    NoOptions { node: NodeId },
    NoRenderableShape { node: NodeId },
    Malformed { node: NodeId, error: String },
    Cycle { node: NodeId },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::IdMismatch { key, id } => {
                write!(f, "node '{key}' declares id '{id}'")
            }
            ContentIssue::DanglingTarget {
                node,
                option,
                target,
            } => write!(
                f,
                "node '{node}' option {} points to missing node '{target}'",
                option + 1
            ),
            ContentIssue::NoOptions { node } => write!(f, "question '{node}' has no options"),
            ContentIssue::NoRenderableShape { node } => {
                write!(f, "node '{node}' is neither a question nor a result")
            }
            ContentIssue::Malformed { node, error } => {
                write!(f, "node '{node}' is malformed: {error}")
            }
            ContentIssue::Cycle { node } => write!(f, "node '{node}' is reachable from itself"),
        }
    }
}

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "content parse error: {e}"),
        }
    }
}

impl std::error::Error for ContentError {}

// ============================================================================
// Content Model
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    nodes: IndexMap<NodeId, Node>,
    /// Shape problems found while loading (nodes that were dropped).
    load_issues: Vec<ContentIssue>,
}

impl ContentModel {
    /// Build a model from nodes, keyed by each node's own id.
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            load_issues: Vec::new(),
        }
    }

    /// The tree embedded in the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_TREE)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path).map_err(ContentError::Io)?;
        let model = Self::from_json(&json)?;
        info!("Loaded {} nodes from {}", model.len(), path.display());
        Ok(model)
    }

    /// Parse a JSON object of `id → node`. Only a document that is not a JSON
    /// object is an error; nodes with an unusable shape are dropped and
    /// recorded as issues.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: IndexMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(ContentError::Parse)?;

        let mut nodes = IndexMap::with_capacity(raw.len());
        let mut load_issues = Vec::new();

        for (key, value) in raw {
            let raw_node = match serde_json::from_value::<RawNode>(value) {
                Ok(raw_node) => raw_node,
                Err(e) => {
                    warn!("Dropping node '{key}': {e}");
                    load_issues.push(ContentIssue::Malformed {
                        node: key,
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            let id = raw_node.id.unwrap_or_else(|| key.clone());
            // A question wins over a result when both are present.
            let kind = match (raw_node.question, raw_node.result) {
                (Some(question), _) => NodeKind::Question {
                    question,
                    options: raw_node.options,
                },
                (None, Some(advice)) => NodeKind::Result(advice),
                (None, None) => {
                    debug!("Dropping node '{key}': no question or result");
                    load_issues.push(ContentIssue::NoRenderableShape { node: key });
                    continue;
                }
            };
            nodes.insert(key, Node { id, kind });
        }

        Ok(Self { nodes, load_issues })
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check authoring invariants. Returns every issue found, in node order.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = self.load_issues.clone();

        for (key, node) in &self.nodes {
            if node.id != *key {
                issues.push(ContentIssue::IdMismatch {
                    key: key.clone(),
                    id: node.id.clone(),
                });
            }
            let NodeKind::Question { options, .. } = &node.kind else {
                continue;
            };
            if options.is_empty() {
                issues.push(ContentIssue::NoOptions { node: key.clone() });
            }
            for (index, choice) in options.iter().enumerate() {
                if !self.nodes.contains_key(&choice.next) {
                    issues.push(ContentIssue::DanglingTarget {
                        node: key.clone(),
                        option: index,
                        target: choice.next.clone(),
                    });
                }
            }
        }

        issues.extend(
            self.cycle_entries()
                .into_iter()
                .map(|node| ContentIssue::Cycle { node }),
        );
        issues
    }

    /// Nodes that a depth-first walk re-enters while still on the stack.
    fn cycle_entries(&self) -> Vec<NodeId> {
        let mut marks = HashMap::new();
        let mut found = Vec::new();
        for id in self.nodes.keys() {
            self.visit(id, &mut marks, &mut found);
        }
        found
    }

    fn visit<'a>(
        &'a self,
        id: &'a str,
        marks: &mut HashMap<&'a str, Mark>,
        found: &mut Vec<NodeId>,
    ) {
        match marks.get(id) {
            Some(Mark::Done) => return,
            Some(Mark::OnStack) => {
                if !found.iter().any(|f| f == id) {
                    found.push(id.to_string());
                }
                return;
            }
            None => {}
        }
        let Some(node) = self.nodes.get(id) else {
            return;
        };

        marks.insert(id, Mark::OnStack);
        if let NodeKind::Question { options, .. } = &node.kind {
            for choice in options {
                self.visit(&choice.next, marks, found);
            }
        }
        marks.insert(id, Mark::Done);
    }
}

#[derive(Clone, Copy)]
enum Mark {
    OnStack,
    Done,
}
