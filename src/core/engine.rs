//! # Navigation Engine
//!
//! `Navigator` owns the navigation state and mediates every transition
//! through the decision tree. Each operation returns the [`View`] to paint.
//!
//! ```text
//!            enter(valid question)            choose(i)
//!   Intro ──────────────────────────▶ Question ─────────▶ Question | Result
//!     ▲        enter(valid result)        │                      │
//!     │  ──────────────────────────▶ Result                      │
//!     │                                   │ go_back              │
//!     └── enter(unknown) / reset / ───────┴──────────────────────┘
//!         go_back with empty history
//! ```
//!
//! Unknown ids never surface as errors: they land on `Intro`. Storage is a
//! best-effort mirror and cannot interrupt a transition. Every operation
//! takes `&mut self`, so `current` and `history` are always updated
//! together.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::content::{ContentModel, Node, NodeKind, StartTarget};
use crate::core::state::{NavigationState, Screen};
use crate::core::store::{self, Store};
use crate::core::text::{CANONICAL_LANGUAGE, LocalizedText, resolve_text};
use crate::core::view::{OptionView, QuestionView, ResultView, View};

/// Language settings a navigator starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Active language until a persisted one is restored.
    pub language: String,
    /// Language tried when the active one is missing from a text.
    pub fallback_language: String,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            language: CANONICAL_LANGUAGE.to_string(),
            fallback_language: CANONICAL_LANGUAGE.to_string(),
        }
    }
}

pub struct Navigator {
    content: Arc<ContentModel>,
    store: Box<dyn Store>,
    state: NavigationState,
    screen: Screen,
    fallback_language: String,
}

impl Navigator {
    pub fn new(content: Arc<ContentModel>, store: Box<dyn Store>, options: NavigatorOptions) -> Self {
        Self {
            content,
            store,
            state: NavigationState::new(options.language),
            screen: Screen::Intro,
            fallback_language: options.fallback_language,
        }
    }

    /// Startup: restore the persisted language and begin at `Intro`. The
    /// persisted position is never resumed.
    pub fn open(content: Arc<ContentModel>, store: Box<dyn Store>, options: NavigatorOptions) -> Self {
        let mut navigator = Self::new(content, store, options);
        let persisted = store::load_language(navigator.store.as_ref());
        navigator.restore_language(persisted.as_deref());
        info!("Navigator opened (language: {})", navigator.state.language);
        navigator
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn language(&self) -> &str {
        &self.state.language
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn back_enabled(&self) -> bool {
        self.state.back_enabled()
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Show node `id`. With `push_current`, the node being left is pushed
    /// onto history first. An unknown id shows `Intro` and changes nothing else.
    pub fn enter(&mut self, id: &str, push_current: bool) -> View {
        let Some(node) = self.content.get(id) else {
            warn!("No node '{}', showing intro", id);
            self.screen = Screen::Intro;
            return View::Intro;
        };

        if push_current && let Some(previous) = self.state.current.take() {
            // Re-entering the same node must not put it on top of history.
            if previous != id {
                self.state.history.push(previous);
            }
        }
        self.state.current = Some(id.to_string());
        self.screen = match node.kind {
            NodeKind::Question { .. } => Screen::Question(id.to_string()),
            NodeKind::Result(_) => Screen::Result(id.to_string()),
        };

        info!(
            "Entered '{}' (history depth {})",
            id,
            self.state.history.len()
        );
        self.persist_navigation();
        self.view()
    }

    /// Follow option `index` of the question on screen.
    pub fn choose(&mut self, index: usize) -> View {
        let next = match &self.screen {
            Screen::Question(id) => match self.content.get(id).map(|n| &n.kind) {
                Some(NodeKind::Question { options, .. }) => {
                    options.get(index).map(|choice| choice.next.clone())
                }
                _ => None,
            },
            _ => None,
        };

        match next {
            Some(next) => self.enter(&next, true),
            None => {
                debug!("Ignoring choice {} on {:?}", index, self.screen);
                self.view()
            }
        }
    }

    /// Begin a fresh walk from one of the tree's roots.
    pub fn start(&mut self, target: StartTarget) -> View {
        self.state.history.clear();
        self.enter(target.root_id(), false)
    }

    /// Pop the last ancestor and show it again without pushing anything.
    /// With no history, return to `Intro` with no node active.
    pub fn go_back(&mut self) -> View {
        let Some(previous) = self.state.history.pop() else {
            self.state.current = None;
            self.screen = Screen::Intro;
            self.persist_navigation();
            return View::Intro;
        };

        let view = self.enter(&previous, false);
        if view.is_intro() {
            // The ancestor vanished; the pop still has to reach storage.
            self.persist_navigation();
        }
        view
    }

    /// Clear position and history. The language is kept.
    pub fn reset(&mut self) -> View {
        self.state.history.clear();
        self.state.current = None;
        self.screen = Screen::Intro;
        store::clear_navigation(self.store.as_mut());
        info!("Navigation reset");
        View::Intro
    }

    /// Switch language and redisplay whatever is on screen. History is untouched.
    pub fn set_language(&mut self, language: &str) -> View {
        self.state.language = language.to_string();
        store::save_language(self.store.as_mut(), language);
        info!("Language set to {}", language);
        self.view()
    }

    /// Apply a language read from storage at startup. Missing or empty
    /// values keep the current language.
    pub fn restore_language(&mut self, persisted: Option<&str>) {
        if let Some(language) = persisted.filter(|l| !l.is_empty()) {
            self.state.language = language.to_string();
        }
    }

    // ── Projection ──────────────────────────────────────────────────────

    pub fn resolve_text(&self, item: &LocalizedText) -> String {
        resolve_text(item, &self.state.language, &self.fallback_language)
    }

    /// The current screen, resolved for the active language.
    pub fn view(&self) -> View {
        let Some(id) = self.screen.node_id() else {
            return View::Intro;
        };
        match self.content.get(id) {
            Some(node) => self.project(id, node),
            None => View::Intro,
        }
    }

    fn project(&self, id: &str, node: &Node) -> View {
        let node_id = id.to_string();
        let back_enabled = self.back_enabled();
        match &node.kind {
            NodeKind::Question { question, options } => View::Question(QuestionView {
                node_id,
                question: self.resolve_text(question),
                options: options
                    .iter()
                    .map(|choice| OptionView {
                        text: self.resolve_text(&choice.text),
                        next: choice.next.clone(),
                    })
                    .collect(),
                back_enabled,
            }),
            NodeKind::Result(advice) => View::Result(ResultView {
                node_id,
                title: self.resolve_text(&advice.title),
                body: self.resolve_text(&advice.body),
                back_enabled,
            }),
        }
    }

    fn persist_navigation(&mut self) {
        store::save_navigation(self.store.as_mut(), &self.state.saved());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Choice;
    use crate::core::store::{LANGUAGE_KEY, MemoryStore, NAVIGATION_KEY};
    use crate::test_support::{FailingStore, sample_content, test_navigator};

    fn expect_question(view: View) -> QuestionView {
        match view {
            View::Question(q) => q,
            other => panic!("expected a question view, got {other:?}"),
        }
    }

    fn expect_result(view: View) -> ResultView {
        match view {
            View::Result(r) => r,
            other => panic!("expected a result view, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_at_intro() {
        let nav = test_navigator();
        assert_eq!(nav.screen(), &Screen::Intro);
        assert_eq!(nav.view(), View::Intro);
        assert_eq!(nav.language(), "javascript");
    }

    #[test]
    fn test_enter_question_from_intro() {
        let mut nav = test_navigator();
        let q = expect_question(nav.enter("general_intro", true));
        assert_eq!(q.question, "What's happening?");
        assert_eq!(q.options.len(), 5);
        assert!(!q.back_enabled);
        assert!(nav.state().history.is_empty());
        assert_eq!(nav.state().current.as_deref(), Some("general_intro"));
    }

    #[test]
    fn test_enter_with_push_appends_previous() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_error", true);
        assert_eq!(nav.state().history, vec!["general_intro".to_string()]);
        assert_eq!(nav.state().current.as_deref(), Some("general_error"));
    }

    #[test]
    fn test_enter_without_push_keeps_history() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("git_intro", false);
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_enter_same_node_does_not_stack_itself() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_intro", true);
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_back_after_reentering_same_node_skips_it() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_error", true);
        nav.enter("general_error", true);
        assert_eq!(nav.state().history, vec!["general_intro".to_string()]);

        // The repeated visit left no entry, so one Back leaves the node.
        nav.go_back();
        assert_eq!(nav.screen(), &Screen::Question("general_intro".to_string()));
        assert_eq!(nav.state().current.as_deref(), Some("general_intro"));
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_enter_unknown_shows_intro_without_touching_state() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_error", true);
        let before = nav.state().clone();

        assert_eq!(nav.enter("nonexistent_id", true), View::Intro);
        assert_eq!(nav.screen(), &Screen::Intro);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_back_round_trip() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        let before = nav.state().clone();

        nav.enter("general_warning", true);
        nav.go_back();

        assert_eq!(nav.state(), &before);
        assert_eq!(nav.screen(), &Screen::Question("general_intro".to_string()));
    }

    #[test]
    fn test_back_round_trip_from_fresh_start() {
        let mut nav = test_navigator();
        nav.enter("git_intro", true);
        assert_eq!(nav.go_back(), View::Intro);
        assert_eq!(nav.state().current, None);
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_scenario_general_error_and_back() {
        let mut nav = test_navigator();
        let q = expect_question(nav.enter("general_intro", true));
        assert_eq!(q.options.len(), 5);

        let index = q
            .options
            .iter()
            .position(|o| o.next == "general_error")
            .unwrap();
        let r = expect_result(nav.choose(index));
        assert_eq!(r.title, "JavaScript error message — what it means");
        assert!(r.back_enabled);

        let q = expect_question(nav.go_back());
        assert_eq!(q.node_id, "general_intro");
        assert!(!q.back_enabled);
    }

    #[test]
    fn test_back_with_empty_history_goes_to_intro() {
        let mut nav = test_navigator();
        assert_eq!(nav.go_back(), View::Intro);
        assert!(!nav.back_enabled());
    }

    #[test]
    fn test_back_to_missing_ancestor_pops_and_shows_intro() {
        let content = Arc::new(ContentModel::new([
            Node::question("q", "Q", vec![Choice::new("to r", "r")]),
            Node::result("r", "R", "body"),
        ]));
        let mut nav = Navigator::new(content, Box::new(MemoryStore::new()), NavigatorOptions::default());
        nav.enter("r", true);
        // Fake an ancestor that is not in the tree.
        nav.state.history.push("ghost".to_string());

        assert_eq!(nav.go_back(), View::Intro);
        assert!(nav.state().history.is_empty());
        let saved = nav.store().get(NAVIGATION_KEY).unwrap().unwrap();
        assert_eq!(saved, r#"{"current":"r","history":[]}"#);
    }

    #[test]
    fn test_choose_out_of_range_is_noop() {
        let mut nav = test_navigator();
        nav.enter("git_intro", true);
        let before = nav.state().clone();
        let q = expect_question(nav.choose(42));
        assert_eq!(q.node_id, "git_intro");
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_choose_on_intro_is_noop() {
        let mut nav = test_navigator();
        assert_eq!(nav.choose(0), View::Intro);
        assert_eq!(nav.state().current, None);
    }

    #[test]
    fn test_choose_dangling_target_keeps_history() {
        let mut nav = Navigator::new(
            Arc::new(sample_content()),
            Box::new(MemoryStore::new()),
            NavigatorOptions::default(),
        );
        nav.enter("root", true);
        // Option 2 points at a node that does not exist.
        assert_eq!(nav.choose(2), View::Intro);
        assert!(nav.state().history.is_empty());
        assert_eq!(nav.state().current.as_deref(), Some("root"));
    }

    #[test]
    fn test_start_clears_history() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_output", true);
        let q = expect_question(nav.start(StartTarget::Git));
        assert_eq!(q.node_id, "git_intro");
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_reset_clears_everything_but_language() {
        let mut nav = test_navigator();
        nav.set_language("java");
        nav.enter("general_intro", true);
        nav.enter("general_error", true);

        assert_eq!(nav.reset(), View::Intro);
        assert!(nav.state().history.is_empty());
        assert_eq!(nav.state().current, None);
        assert_eq!(nav.screen(), &Screen::Intro);
        assert_eq!(nav.language(), "java");
        assert_eq!(nav.store().get(NAVIGATION_KEY).unwrap(), None);
        assert_eq!(nav.store().get(LANGUAGE_KEY).unwrap().as_deref(), Some("java"));
    }

    #[test]
    fn test_set_language_redisplays_current_node() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_wontrun", true);
        let history = nav.state().history.clone();

        let r = expect_result(nav.set_language("csharp"));
        assert_eq!(r.title, "My C# program won't run");
        assert_eq!(nav.state().history, history);
    }

    #[test]
    fn test_set_language_twice_is_idempotent() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_error", true);
        let first = nav.set_language("java");
        let second = nav.set_language("java");
        assert_eq!(first, second);
        assert_eq!(nav.state().history, vec!["general_intro".to_string()]);
    }

    #[test]
    fn test_set_language_on_intro_stays_on_intro() {
        let mut nav = test_navigator();
        assert_eq!(nav.set_language("java"), View::Intro);
        assert_eq!(nav.language(), "java");
    }

    #[test]
    fn test_unknown_language_falls_back_to_canonical() {
        let mut nav = test_navigator();
        nav.enter("general_warning", true);
        let r = expect_result(nav.set_language("rust"));
        assert!(r.body.starts_with("Warnings are often non-blocking"));
    }

    #[test]
    fn test_configured_fallback_language() {
        let content = Arc::new(ContentModel::builtin().unwrap());
        let options = NavigatorOptions {
            language: "rust".to_string(),
            fallback_language: "java".to_string(),
        };
        let mut nav = Navigator::new(content, Box::new(MemoryStore::new()), options);
        let r = expect_result(nav.enter("general_error", true));
        assert_eq!(r.title, "Java error message — what it means");
    }

    #[test]
    fn test_open_restores_language_but_not_position() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "java").unwrap();
        store
            .set(NAVIGATION_KEY, r#"{"current":"general_error","history":["general_intro"]}"#)
            .unwrap();

        let nav = Navigator::open(
            Arc::new(ContentModel::builtin().unwrap()),
            Box::new(store),
            NavigatorOptions::default(),
        );
        assert_eq!(nav.language(), "java");
        assert_eq!(nav.view(), View::Intro);
        assert_eq!(nav.state().current, None);
        assert!(nav.state().history.is_empty());
    }

    #[test]
    fn test_restore_language_ignores_empty() {
        let mut nav = test_navigator();
        nav.restore_language(Some(""));
        assert_eq!(nav.language(), "javascript");
        nav.restore_language(None);
        assert_eq!(nav.language(), "javascript");
        nav.restore_language(Some("csharp"));
        assert_eq!(nav.language(), "csharp");
    }

    #[test]
    fn test_navigation_is_persisted_on_enter() {
        let mut nav = test_navigator();
        nav.enter("general_intro", true);
        nav.enter("general_error", true);
        let saved = nav.store().get(NAVIGATION_KEY).unwrap().unwrap();
        assert_eq!(saved, r#"{"current":"general_error","history":["general_intro"]}"#);
    }

    #[test]
    fn test_storage_failure_does_not_interrupt_navigation() {
        let mut nav = Navigator::open(
            Arc::new(ContentModel::builtin().unwrap()),
            Box::new(FailingStore),
            NavigatorOptions::default(),
        );
        nav.set_language("java");
        nav.enter("general_intro", true);
        let r = expect_result(nav.enter("general_output", true));
        assert_eq!(r.title, "Output is wrong — debugging tips (Java)");
        assert!(!nav.go_back().back_enabled());
        assert_eq!(nav.reset(), View::Intro);
    }
}
