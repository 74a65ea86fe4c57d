use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    HelpBar, HelpContext, IntroPage, LanguagePicker, QuestionPanel, ResultPanel, TitleBar,
};

pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState, language: &str) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(tui.language_label(language), tui.status_message.clone())
        .render(frame, title_area);

    let context = match view {
        View::Intro => {
            IntroPage::new(tui.selected).render(frame, main_area);
            HelpContext::Intro
        }
        View::Question(question) => {
            QuestionPanel::new(question, &mut tui.list_state).render(frame, main_area);
            HelpContext::Question
        }
        View::Result(result) => {
            ResultPanel::new(result, &mut tui.result_scroll).render(frame, main_area);
            HelpContext::Result
        }
    };

    HelpBar::new(context, view.back_enabled()).render(frame, help_area);

    // Overlay renders last so it sits on top
    if let Some(picker) = tui.language_picker.as_mut() {
        LanguagePicker::new(picker, language).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_languages;
    use crate::core::content::StartTarget;
    use crate::core::engine::Navigator;
    use crate::test_support::{buffer_text, test_navigator};
    use crate::tui::components::LanguagePickerState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav: &Navigator, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = nav.view();
        tui.sync(nav.screen(), &view);
        terminal
            .draw(|f| draw_ui(f, &view, tui, nav.language()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_intro() {
        let nav = test_navigator();
        let mut tui = TuiState::new(default_languages());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("[JavaScript]"));
        assert!(text.contains("General Coding Help"));
        assert!(!text.contains("Back"));
    }

    #[test]
    fn test_draw_question() {
        let mut nav = test_navigator();
        nav.start(StartTarget::Git);
        let mut tui = TuiState::new(default_languages());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Which Git problem?"));
        assert!(text.contains("I have a merge conflict"));
    }

    #[test]
    fn test_draw_localized_result() {
        let mut nav = test_navigator();
        nav.start(StartTarget::General);
        nav.choose(2);
        nav.set_language("java");
        let mut tui = TuiState::new(default_languages());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("[Java]"));
        assert!(text.contains("My Java program won't run"));
        assert!(text.contains("Copy"));
    }

    #[test]
    fn test_draw_language_overlay() {
        let nav = test_navigator();
        let mut tui = TuiState::new(default_languages());
        tui.language_picker = Some(LanguagePickerState::new(default_languages(), "javascript"));
        let text = draw(&nav, &mut tui);
        assert!(text.contains("1. JavaScript *"));
    }

    #[test]
    fn test_draw_status_message() {
        let nav = test_navigator();
        let mut tui = TuiState::new(default_languages());
        tui.status_message = "Copied!".to_string();
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Copied!"));
    }
}
