//! # Question Component
//!
//! Shows the question text above a numbered list of its options. The
//! highlighted option lives in a `ListState` owned by `TuiState`, so the
//! wrapper here is rebuilt every frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::view::QuestionView;
use crate::tui::component::Component;

pub struct QuestionPanel<'a> {
    view: &'a QuestionView,
    list_state: &'a mut ListState,
}

impl<'a> QuestionPanel<'a> {
    pub fn new(view: &'a QuestionView, list_state: &'a mut ListState) -> Self {
        Self { view, list_state }
    }
}

impl Component for QuestionPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let question = Paragraph::new(Line::from(Span::styled(
            self.view.question.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true });
        let question_height = question.line_count(inner.width) as u16;

        let [question_area, _, options_area] = Layout::vertical([
            Constraint::Length(question_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(question, question_area);

        if self.view.options.is_empty() {
            let empty = Paragraph::new("No options here. Press Backspace or r.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, options_area);
            return;
        }

        let items: Vec<ListItem> = self
            .view
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(option.text.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("› ");

        frame.render_stateful_widget(list, options_area, self.list_state);
    }
}
