//! # Language Picker Component
//!
//! Overlay for switching the active programming language. Opened with `l`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LanguagePickerState` lives in `TuiState` while the overlay is open
//! - `LanguagePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::config::LanguageEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the language picker overlay.
pub struct LanguagePickerState {
    pub languages: Vec<LanguageEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl LanguagePickerState {
    /// Opens with the active language highlighted, if it is listed.
    pub fn new(languages: Vec<LanguageEntry>, current: &str) -> Self {
        let selected = languages
            .iter()
            .position(|l| l.key == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !languages.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            languages,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Events emitted by the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguagePickerEvent {
    Select(String),
    Dismiss,
}

impl EventHandler for LanguagePickerState {
    type Event = LanguagePickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LanguagePickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Back | TuiEvent::InputChar('l' | 'q') => {
                Some(LanguagePickerEvent::Dismiss)
            }
            TuiEvent::CursorUp => {
                if !self.languages.is_empty() {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.languages.is_empty() {
                    self.select((self.selected + 1).min(self.languages.len() - 1));
                }
                None
            }
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)?.checked_sub(1)? as usize;
                self.languages
                    .get(index)
                    .map(|l| LanguagePickerEvent::Select(l.key.clone()))
            }
            TuiEvent::Submit => self
                .languages
                .get(self.selected)
                .map(|l| LanguagePickerEvent::Select(l.key.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the language picker overlay.
pub struct LanguagePicker<'a> {
    state: &'a mut LanguagePickerState,
    current_language: &'a str,
}

impl<'a> LanguagePicker<'a> {
    pub fn new(state: &'a mut LanguagePickerState, current_language: &'a str) -> Self {
        Self {
            state,
            current_language,
        }
    }
}

impl Component for LanguagePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 50, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Language ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .state
            .languages
            .iter()
            .enumerate()
            .map(|(i, language)| {
                let is_active = language.key == self.current_language;
                let marker = if is_active { " *" } else { "" };
                let label = truncate_str(
                    &format!("{}. {}", i + 1, language.label),
                    inner_width.saturating_sub(marker.len()),
                );

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{head}...")
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
