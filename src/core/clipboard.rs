//! # Copy / Export
//!
//! "Copy suggested text" hands the plain advice body to a `Clipboard`.
//! The outcome is only ever reported to the user; it never touches
//! navigation.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::info;

#[derive(Debug)]
pub enum ClipboardError {
    /// Nothing to copy (empty body).
    Empty,
    Io(io::Error),
    /// No destination is configured.
    Unavailable,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Empty => write!(f, "nothing to copy"),
            ClipboardError::Io(e) => write!(f, "copy failed: {e}"),
            ClipboardError::Unavailable => write!(f, "no copy destination configured"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes copied text to a file, replacing the previous copy.
pub struct FileClipboard {
    path: Option<PathBuf>,
}

impl FileClipboard {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl Clipboard for FileClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.trim().is_empty() {
            return Err(ClipboardError::Empty);
        }
        let path = self.path.as_ref().ok_or(ClipboardError::Unavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ClipboardError::Io)?;
        }
        fs::write(path, format!("{text}\n")).map_err(ClipboardError::Io)?;
        info!("Copied {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_clipboard_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("copied.txt");
        let mut clipboard = FileClipboard::new(Some(path.clone()));

        clipboard.copy_text("git status").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "git status\n");

        clipboard.copy_text("git push").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "git push\n");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut clipboard = FileClipboard::new(Some(dir.path().join("copied.txt")));
        assert!(matches!(clipboard.copy_text("  "), Err(ClipboardError::Empty)));
    }

    #[test]
    fn test_missing_destination() {
        let mut clipboard = FileClipboard::new(None);
        assert!(matches!(
            clipboard.copy_text("text"),
            Err(ClipboardError::Unavailable)
        ));
    }
}
