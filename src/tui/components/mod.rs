//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: App name, active language, status message
//! - `IntroPage`: Welcome text and the two start choices
//! - `HelpBar`: Key hints for the current screen
//!
//! ### Wrappers Over Borrowed State
//!
//! Rebuilt every frame around state that lives in `TuiState`:
//! - `QuestionPanel`: Question text and its numbered options (`ListState`)
//! - `ResultPanel`: Advice title and scrollable body (`ScrollViewState`)
//! - `LanguagePicker`: Overlay list of languages (`LanguagePickerState`,
//!   which also handles the overlay's key events)
//!
//! Components receive data as props, never by reaching into global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(label, status).render(frame, area);
//!
//! // Bad: hidden dependency on the navigator
//! TitleBar::default().render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status bar)
//! ├── intro.rs            (start screen)
//! ├── question.rs         (question + options)
//! ├── result.rs           (advice body)
//! ├── help_bar.rs         (bottom key hints)
//! └── language_picker.rs  (language overlay)
//! ```

pub mod help_bar;
pub mod intro;
pub mod language_picker;
pub mod question;
pub mod result;
pub mod title_bar;

pub use help_bar::{HelpBar, HelpContext};
pub use intro::IntroPage;
pub use language_picker::{LanguagePicker, LanguagePickerEvent, LanguagePickerState};
pub use question::QuestionPanel;
pub use result::ResultPanel;
pub use title_bar::TitleBar;
