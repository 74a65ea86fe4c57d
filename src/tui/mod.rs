//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! view, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (key press or
//! terminal resize) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::widgets::ListState;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::clipboard::Clipboard;
use crate::core::config::LanguageEntry;
use crate::core::content::StartTarget;
use crate::core::engine::Navigator;
use crate::core::state::Screen;
use crate::core::view::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{LanguagePickerEvent, LanguagePickerState};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    /// Highlighted choice on the intro or question screen
    pub selected: usize,
    pub list_state: ListState,
    pub result_scroll: ScrollViewState,
    /// Language overlay (None = hidden)
    pub language_picker: Option<LanguagePickerState>,
    pub status_message: String,
    pub languages: Vec<LanguageEntry>,
    /// Screen the selection and scroll offset belong to
    shown: Option<Screen>,
    choice_count: usize,
}

impl TuiState {
    pub fn new(languages: Vec<LanguageEntry>) -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
            result_scroll: ScrollViewState::default(),
            language_picker: None,
            status_message: String::new(),
            languages,
            shown: None,
            choice_count: 0,
        }
    }

    /// Reset selection and scroll whenever a different screen is shown.
    pub fn sync(&mut self, screen: &Screen, view: &View) {
        if self.shown.as_ref() == Some(screen) {
            return;
        }
        self.shown = Some(screen.clone());
        self.choice_count = choice_count(view);
        self.selected = 0;
        self.list_state
            .select(if self.choice_count > 0 { Some(0) } else { None });
        self.result_scroll = ScrollViewState::default();
    }

    /// Display label for a language key, or the key itself when unlisted.
    pub fn language_label(&self, key: &str) -> String {
        self.languages
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.label.clone())
            .unwrap_or_else(|| key.to_string())
    }

    fn move_selection(&mut self, down: bool) {
        if self.choice_count == 0 {
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(self.choice_count - 1)
        } else {
            self.selected.saturating_sub(1)
        };
        self.list_state.select(Some(self.selected));
    }
}

fn choice_count(view: &View) -> usize {
    match view {
        View::Intro => StartTarget::ALL.len(),
        View::Question(q) => q.options.len(),
        View::Result(_) => 0,
    }
}

/// The action for picking choice `index` on the given view.
fn choice_action(view: &View, index: usize) -> Option<Action> {
    match view {
        View::Intro => StartTarget::ALL.get(index).map(|t| Action::Start(*t)),
        View::Question(q) if index < q.options.len() => Some(Action::Choose(index)),
        _ => None,
    }
}

/// Translate a terminal event into a core action. Selection, scrolling and
/// the language overlay are handled here and never reach the core.
pub fn translate(
    tui: &mut TuiState,
    view: &View,
    language: &str,
    event: &TuiEvent,
) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // When the language picker is open, route all events to it
    if let Some(picker) = tui.language_picker.as_mut() {
        let picked = picker.handle_event(event)?;
        tui.language_picker = None;
        return match picked {
            LanguagePickerEvent::Select(key) => Some(Action::SetLanguage(key)),
            LanguagePickerEvent::Dismiss => None,
        };
    }

    match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::CursorUp => {
            tui.move_selection(false);
            None
        }
        TuiEvent::CursorDown => {
            tui.move_selection(true);
            None
        }
        TuiEvent::Submit => choice_action(view, tui.selected),
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            choice_action(view, index)
        }
        TuiEvent::Back if view.back_enabled() => Some(Action::Back),
        TuiEvent::InputChar('r') if !view.is_intro() => Some(Action::Reset),
        TuiEvent::InputChar('c') if matches!(view, View::Result(_)) => Some(Action::CopyResult),
        TuiEvent::InputChar('l') => {
            tui.language_picker = Some(LanguagePickerState::new(tui.languages.clone(), language));
            None
        }
        TuiEvent::ScrollPageUp => {
            tui.result_scroll.scroll_page_up();
            None
        }
        TuiEvent::ScrollPageDown => {
            tui.result_scroll.scroll_page_down();
            None
        }
        _ => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Lets Esc arrive without waiting for an escape sequence; ignored by
        // terminals without the Kitty protocol
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

pub fn run(
    mut navigator: Navigator,
    mut clipboard: impl Clipboard,
    languages: Vec<LanguageEntry>,
) -> io::Result<()> {
    let mut tui = TuiState::new(languages);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let mut needs_redraw = true;
    let result = loop {
        let view = navigator.view();
        tui.sync(navigator.screen(), &view);

        if needs_redraw {
            let language = navigator.language().to_string();
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &view, &mut tui, &language)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let event = match poll_event_timeout(Duration::from_millis(500)) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => break Err(e),
        };
        needs_redraw = true;

        let Some(action) = translate(&mut tui, &view, navigator.language(), &event) else {
            continue;
        };
        tui.status_message.clear();

        match update(&mut navigator, action) {
            Effect::None => {}
            Effect::CopyText(text) => match clipboard.copy_text(&text) {
                Ok(()) => tui.status_message = "Copied!".to_string(),
                Err(e) => {
                    warn!("Copy failed: {}", e);
                    tui.status_message = format!("Copy failed: {e}");
                }
            },
            Effect::Quit => break Ok(()),
        }
    };

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Terminal restored");
    result
}
