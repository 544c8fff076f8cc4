use std::path::PathBuf;

use crate::kernel::document::Document;
use crate::kernel::menu::MenuState;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::status::StatusSnapshot;
use crate::kernel::style::StyleState;

pub const ABOUT_TITLE: &str = "About zpad";
pub const ABOUT_MESSAGE: &str = "zpad: a small menu-driven text editor.\nBuilt with ratatui and crossterm.";
pub const HELP_TITLE: &str = "Help";
pub const HELP_MESSAGE: &str = "Use the File menu to create, open, or save text files.\n\
Use Edit for basic text editing.\n\
Use View, Format, and Theme to customize appearance.\n\
Press F10 or Alt+<first letter> to open a menu.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Save,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Open => "Open File",
            PromptKind::Save => "Save As",
        }
    }
}

/// Stand-in for a native file chooser: a one-line path input.
#[derive(Debug, Clone, Default)]
pub struct PathPromptState {
    pub visible: bool,
    pub kind: Option<PromptKind>,
    pub value: String,
    /// Byte offset into `value`.
    pub cursor: usize,
    pub error: Option<String>,
}

impl PathPromptState {
    pub fn show(&mut self, kind: PromptKind, initial: String) {
        self.visible = true;
        self.kind = Some(kind);
        self.cursor = initial.len();
        self.value = initial;
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub menu: MenuState,
    pub prompt: PathPromptState,
    pub notification: Option<Notification>,
    pub status_message: String,
    pub viewport_height: usize,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            menu: MenuState::default(),
            prompt: PathPromptState::default(),
            notification: None,
            status_message: "Ready".to_string(),
            viewport_height: viewport_height.max(1),
            should_quit: false,
        }
    }

    /// True while a modal surface (prompt or notification) owns the keyboard.
    pub fn is_modal(&self) -> bool {
        self.prompt.visible || self.notification.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub cwd: PathBuf,
    pub config: EditorConfig,
    pub document: Document,
    pub style: StyleState,
    pub status: StatusSnapshot,
    pub ui: UiState,
}

impl AppState {
    pub fn new(cwd: PathBuf, config: EditorConfig) -> Self {
        let style = StyleState::new(config.font_size, config.word_wrap, config.theme);
        let ui = UiState::new(config.default_viewport_height);
        Self {
            cwd,
            config,
            document: Document::new(),
            style,
            status: StatusSnapshot::default(),
            ui,
        }
    }

    /// Recomputes the derived word/char counts; call after every content change.
    pub fn refresh_status(&mut self) {
        self.status = StatusSnapshot::from_rope(self.document.rope());
    }
}
