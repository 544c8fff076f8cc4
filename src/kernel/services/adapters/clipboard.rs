//! Clipboard service.
//!
//! Uses the system clipboard when `arboard` can reach one and always mirrors text into an
//! in-process register, so Cut/Copy/Paste keep working over SSH or in a bare console.

use arboard::Clipboard;

const PASTE_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub struct ClipboardService {
    clipboard: Option<Clipboard>,
    register: Option<String>,
}

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    GetFailed(String),
    SetFailed(String),
    TooLarge(usize),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "Clipboard is empty or unavailable"),
            ClipboardError::GetFailed(e) => write!(f, "Failed to read clipboard: {}", e),
            ClipboardError::SetFailed(e) => write!(f, "Failed to write clipboard: {}", e),
            ClipboardError::TooLarge(size) => {
                write!(
                    f,
                    "Clipboard text too large ({} MB, limit is 10 MB)",
                    size / 1024 / 1024
                )
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::info!(error = %e, "system clipboard unavailable, using local register");
                None
            }
        };
        Self {
            clipboard,
            register: None,
        }
    }

    /// A service that never touches the system clipboard.
    pub fn detached() -> Self {
        Self {
            clipboard: None,
            register: None,
        }
    }

    pub fn is_system_available(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        let text = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.get_text() {
                Ok(text) => text,
                Err(e) => match self.register.clone() {
                    Some(text) => {
                        tracing::debug!(error = %e, "system clipboard read failed, using register");
                        text
                    }
                    None => return Err(ClipboardError::GetFailed(e.to_string())),
                },
            },
            None => self.register.clone().ok_or(ClipboardError::NotAvailable)?,
        };

        if text.len() > PASTE_MAX_SIZE {
            return Err(ClipboardError::TooLarge(text.len()));
        }

        Ok(text)
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.register = Some(text.to_string());

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::SetFailed(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}
