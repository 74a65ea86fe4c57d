//! # Result Component
//!
//! Advice screen: the title in the border and the Markdown body inside a
//! scroll view. Bodies can be longer than the terminal, so the scroll
//! offset is kept in `TuiState` and driven by PgUp/PgDn.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::ResultView;
use crate::tui::component::Component;
use crate::tui::markdown;

pub struct ResultPanel<'a> {
    view: &'a ResultView,
    scroll_state: &'a mut ScrollViewState,
}

impl<'a> ResultPanel<'a> {
    pub fn new(view: &'a ResultView, scroll_state: &'a mut ScrollViewState) -> Self {
        Self { view, scroll_state }
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Line::from(format!(" {} ", self.view.title)))
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let body = Paragraph::new(markdown::render(&self.view.body, Color::Reset))
            .wrap(Wrap { trim: false });
        let body_height = body.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, body_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(body, Rect::new(0, 0, content_width, body_height));

        frame.render_stateful_widget(scroll_view, inner, self.scroll_state);
    }
}
