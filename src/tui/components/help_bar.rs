//! # HelpBar Component
//!
//! Bottom key hints for the current screen. "Back" is dimmed when there is
//! nothing to go back to, and "Copy" only shows on an advice screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Which screen the hints are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContext {
    Intro,
    Question,
    Result,
}

pub struct HelpBar {
    pub context: HelpContext,
    pub back_enabled: bool,
}

impl HelpBar {
    pub fn new(context: HelpContext, back_enabled: bool) -> Self {
        Self {
            context,
            back_enabled,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str, bool)> {
        let mut hints = Vec::new();
        match self.context {
            HelpContext::Intro | HelpContext::Question => {
                hints.push(("↑↓", "Select", true));
                hints.push(("Enter/1-9", "Choose", true));
            }
            HelpContext::Result => {
                hints.push(("PgUp/PgDn", "Scroll", true));
                hints.push(("c", "Copy", true));
            }
        }
        if self.context != HelpContext::Intro {
            hints.push(("⌫", "Back", self.back_enabled));
            hints.push(("r", "Start over", true));
        }
        hints.push(("l", "Language", true));
        hints.push(("q", "Quit", true));
        hints
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, label, enabled) in self.hints() {
            let (key_style, label_style) = if enabled {
                (
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Gray),
                )
            } else {
                let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
                (dim, dim)
            };
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(format!("{label} "), label_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
