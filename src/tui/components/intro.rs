//! # Intro Component
//!
//! The start screen: a short welcome and the two walks a user can begin
//! (general coding help, Git & GitHub help).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::StartTarget;
use crate::tui::component::Component;
use crate::tui::components::title_bar::APP_TITLE;

pub struct IntroPage {
    /// Index into `StartTarget::ALL`
    pub selected: usize,
}

impl IntroPage {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }
}

impl Component for IntroPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Stuck? Answer a few questions and get a next step.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        for (i, target) in StartTarget::ALL.iter().enumerate() {
            let label = format!(" {}. {} ", i + 1, target.label());
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_intro_lists_both_walks() {
        let backend = TestBackend::new(70, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut intro = IntroPage::new(1);
        terminal
            .draw(|f| {
                intro.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Technical Lifeline"));
        assert!(text.contains("1. General Coding Help"));
        assert!(text.contains("2. Git & GitHub Help"));
    }

    #[test]
    fn test_intro_renders_in_small_area() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut intro = IntroPage::new(0);
        terminal
            .draw(|f| {
                intro.render(f, f.area());
            })
            .unwrap();
    }
}
