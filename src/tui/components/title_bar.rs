//! # TitleBar Component
//!
//! Top status bar: app name, active language and the latest status
//! message ("Copied!", "Copy failed: ...").
//!
//! Purely presentational. All data arrives as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Java".to_string(), tui.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! The text degrades from `"Technical Lifeline [Java] | Copied!"` to
//! `"Technical Lifeline [Java]"` when there is no status.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Technical Lifeline";

pub struct TitleBar {
    /// Display label of the active language (e.g. "C#")
    pub language_label: String,
    /// Transient status (e.g. "Copied!")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(language_label: String, status_message: String) -> Self {
        Self {
            language_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", self.language_label),
                Style::default().fg(Color::Cyan),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Java".to_string(), "Copied!".to_string());
        let text = draw(&mut title_bar);
        assert!(text.contains("Technical Lifeline"));
        assert!(text.contains("[Java]"));
        assert!(text.contains("| Copied!"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("C#".to_string(), String::new());
        let text = draw(&mut title_bar);
        assert!(text.contains("[C#]"));
        assert!(!text.contains('|'));
    }
}
