//! # Actions
//!
//! Everything a user can do becomes an `Action`.
//! Picks an option? That's `Action::Choose(index)`.
//! Presses back? That's `Action::Back`.
//!
//! `update()` applies an action to the navigator and returns the `Effect`
//! the adapter has to carry out (copying text, quitting). The navigator
//! changes only through here, so every session can be replayed from its
//! actions.
//!
//! ```text
//! Navigator + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::content::StartTarget;
use crate::core::engine::Navigator;
use crate::core::markup;
use crate::core::view::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start(StartTarget),
    Choose(usize),
    Back,
    Reset,
    SetLanguage(String),
    CopyResult,
    Quit,
}

/// Side effects for the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Copy this plain text (the advice on screen).
    CopyText(String),
    Quit,
}

pub fn update(navigator: &mut Navigator, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Start(target) => {
            navigator.start(target);
            Effect::None
        }
        Action::Choose(index) => {
            navigator.choose(index);
            Effect::None
        }
        Action::Back => {
            navigator.go_back();
            Effect::None
        }
        Action::Reset => {
            navigator.reset();
            Effect::None
        }
        Action::SetLanguage(language) => {
            navigator.set_language(&language);
            Effect::None
        }
        Action::CopyResult => match navigator.view() {
            View::Result(result) => Effect::CopyText(markup::plain_text(&result.body)),
            _ => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Screen;
    use crate::test_support::test_navigator;

    #[test]
    fn test_start_and_choose() {
        let mut nav = test_navigator();
        assert_eq!(update(&mut nav, Action::Start(StartTarget::Git)), Effect::None);
        assert_eq!(nav.screen(), &Screen::Question("git_intro".to_string()));

        update(&mut nav, Action::Choose(2));
        assert_eq!(nav.screen(), &Screen::Result("git_merge_conflict".to_string()));
        assert!(nav.back_enabled());
    }

    #[test]
    fn test_back_and_reset() {
        let mut nav = test_navigator();
        update(&mut nav, Action::Start(StartTarget::General));
        update(&mut nav, Action::Choose(0));
        update(&mut nav, Action::Back);
        assert_eq!(nav.screen(), &Screen::Question("general_intro".to_string()));

        update(&mut nav, Action::Reset);
        assert_eq!(nav.screen(), &Screen::Intro);
    }

    #[test]
    fn test_copy_result_yields_plain_body() {
        let mut nav = test_navigator();
        update(&mut nav, Action::Start(StartTarget::Git));
        update(&mut nav, Action::Choose(1));
        let effect = update(&mut nav, Action::CopyResult);
        assert_eq!(
            effect,
            Effect::CopyText(
                "Make sure you pushed to the correct remote and branch: git push -u origin main.\n\n\
                 Run git remote -v and git branch -av to verify."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_copy_outside_result_does_nothing() {
        let mut nav = test_navigator();
        assert_eq!(update(&mut nav, Action::CopyResult), Effect::None);
        update(&mut nav, Action::Start(StartTarget::Git));
        assert_eq!(update(&mut nav, Action::CopyResult), Effect::None);
    }

    #[test]
    fn test_set_language_and_quit() {
        let mut nav = test_navigator();
        update(&mut nav, Action::SetLanguage("csharp".to_string()));
        assert_eq!(nav.language(), "csharp");
        assert_eq!(update(&mut nav, Action::Quit), Effect::Quit);
    }
}
