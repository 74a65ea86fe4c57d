//! Render-ready projections of the current screen. All text is already
//! resolved for the active language; a presentation layer only paints these.

use crate::core::content::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Intro,
    Question(QuestionView),
    Result(ResultView),
}

impl View {
    pub fn is_intro(&self) -> bool {
        matches!(self, View::Intro)
    }

    pub fn back_enabled(&self) -> bool {
        match self {
            View::Intro => false,
            View::Question(q) => q.back_enabled,
            View::Result(r) => r.back_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub next: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub node_id: NodeId,
    pub question: String,
    pub options: Vec<OptionView>,
    pub back_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub node_id: NodeId,
    pub title: String,
    /// Markdown source of the advice.
    pub body: String,
    pub back_enabled: bool,
}
