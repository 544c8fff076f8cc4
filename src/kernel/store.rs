use std::path::{Path, PathBuf};

use crate::core::Command;
use crate::kernel::document::{normalize_line_endings, Motion};
use crate::kernel::state::{
    Notification, PromptKind, ABOUT_MESSAGE, ABOUT_TITLE, HELP_MESSAGE, HELP_TITLE,
};
use crate::kernel::style::ZOOM_STEP;

use super::{Action, AppState, Effect, IoOp};

mod menu;
mod prompt;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn with_effects(state_changed: bool, effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::InsertText(text) => {
                let text = normalize_line_endings(&text);
                let changed = self.state.document.insert_text(&text);
                self.after_content_change(changed)
            }
            Action::PlaceCursor { line, col, extend } => {
                let changed = self.state.document.set_cursor_line_col(line, col, extend);
                DispatchResult::changed(changed)
            }
            Action::SetViewportHeight(height) => {
                let height = height.max(1);
                let prev = std::mem::replace(&mut self.state.ui.viewport_height, height);
                DispatchResult::changed(prev != height)
            }
            Action::ShowStatus(message) => {
                let prev = std::mem::replace(&mut self.state.ui.status_message, message);
                DispatchResult::changed(prev != self.state.ui.status_message)
            }
            Action::FileLoaded { path, content } => {
                tracing::info!(path = %path.display(), bytes = content.len(), "file opened");
                self.state.document.load(path, &content);
                self.state.refresh_status();
                self.state.ui.status_message =
                    format!("Opened: {}", self.state.document.title());
                DispatchResult::changed(true)
            }
            Action::FileSaved { path, version } => {
                tracing::info!(path = %path.display(), version, "file saved");
                if version == self.state.document.version() {
                    self.state.document.mark_saved(path);
                } else {
                    self.state.document.set_source_path(path);
                }
                self.state.ui.status_message = format!("Saved: {}", self.state.document.title());
                DispatchResult::changed(true)
            }
            Action::AdoptPath(path) => {
                self.state.document.set_source_path(path);
                self.state.ui.status_message =
                    format!("New file: {}", self.state.document.title());
                DispatchResult::changed(true)
            }
            Action::IoFailed { op, path, message } => {
                tracing::warn!(?op, path = %path.display(), error = %message, "file operation failed");
                let summary = match op {
                    IoOp::Open => "Could not open file.",
                    IoOp::Save => "Could not save file.",
                };
                self.state.ui.notification = Some(Notification::error(format!(
                    "{summary}\n{}: {message}",
                    path.display()
                )));
                DispatchResult::changed(true)
            }
            Action::PromptAppend(_)
            | Action::PromptInsertText(_)
            | Action::PromptBackspace
            | Action::PromptCursorLeft
            | Action::PromptCursorRight
            | Action::PromptAccept
            | Action::PromptCancel => self.reduce_prompt_action(action),
            Action::MenuOpen(_)
            | Action::MenuClose
            | Action::MenuMove(_)
            | Action::MenuMoveSelection(_)
            | Action::MenuActivate
            | Action::MenuClickItem(_) => self.reduce_menu_action(action),
            Action::DismissNotification => {
                DispatchResult::changed(self.state.ui.notification.take().is_some())
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        tracing::debug!(command = %cmd.name(), "dispatch command");

        match cmd {
            Command::New => {
                self.state.document.new_document();
                self.state.refresh_status();
                self.state.ui.status_message = "New File Created".to_string();
                DispatchResult::changed(true)
            }
            Command::Open => self.show_prompt(PromptKind::Open, String::new()),
            Command::Save => match self.state.document.source_path().map(Path::to_path_buf) {
                Some(path) => DispatchResult::with_effects(false, vec![self.write_effect(path)]),
                None => self.show_prompt(PromptKind::Save, String::new()),
            },
            Command::SaveAs => {
                let initial = self
                    .state
                    .document
                    .source_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.show_prompt(PromptKind::Save, initial)
            }
            Command::Exit => {
                tracing::info!("exit requested");
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
            Command::Cut => match self.state.document.cut_selection() {
                Some(text) => {
                    self.state.refresh_status();
                    DispatchResult::with_effects(true, vec![Effect::SetClipboardText(text)])
                }
                None => DispatchResult::changed(false),
            },
            Command::Copy => match self.state.document.selected_text() {
                Some(text) => {
                    DispatchResult::with_effects(false, vec![Effect::SetClipboardText(text)])
                }
                None => DispatchResult::changed(false),
            },
            Command::Paste => {
                DispatchResult::with_effects(false, vec![Effect::RequestClipboardText])
            }
            Command::SelectAll => DispatchResult::changed(self.state.document.select_all()),
            Command::ClearAll => {
                let changed = self.state.document.clear_all();
                self.after_content_change(changed)
            }
            Command::ZoomIn | Command::IncreaseFont => {
                DispatchResult::changed(self.state.style.set_zoom(ZOOM_STEP))
            }
            Command::ZoomOut | Command::DecreaseFont => {
                DispatchResult::changed(self.state.style.set_zoom(-ZOOM_STEP))
            }
            Command::ToggleWrap => {
                let wrap = !self.state.style.wrap;
                DispatchResult::changed(self.state.style.set_wrap(wrap))
            }
            Command::ToggleBold => {
                let bold = !self.state.style.bold;
                DispatchResult::changed(self.state.style.set_bold(bold))
            }
            Command::ToggleItalic => {
                let italic = !self.state.style.italic;
                DispatchResult::changed(self.state.style.set_italic(italic))
            }
            Command::SetBackground(color) => {
                DispatchResult::changed(self.state.style.set_background(color))
            }
            Command::SetTheme(theme) => {
                DispatchResult::changed(self.state.style.set_theme(theme))
            }
            Command::About => {
                self.state.ui.notification = Some(Notification::info(ABOUT_TITLE, ABOUT_MESSAGE));
                DispatchResult::changed(true)
            }
            Command::Help => {
                self.state.ui.notification = Some(Notification::info(HELP_TITLE, HELP_MESSAGE));
                DispatchResult::changed(true)
            }
            Command::InsertChar(ch) => {
                let mut buf = [0u8; 4];
                let changed = self.state.document.insert_text(ch.encode_utf8(&mut buf));
                self.after_content_change(changed)
            }
            Command::InsertNewline => {
                let changed = self.state.document.insert_text("\n");
                self.after_content_change(changed)
            }
            Command::InsertTab => {
                let spaces = " ".repeat(self.state.config.tab_size.max(1) as usize);
                let changed = self.state.document.insert_text(&spaces);
                self.after_content_change(changed)
            }
            Command::DeleteBackward => {
                let changed = self.state.document.delete_backward();
                self.after_content_change(changed)
            }
            Command::DeleteForward => {
                let changed = self.state.document.delete_forward();
                self.after_content_change(changed)
            }
            Command::CursorLeft => self.move_cursor(Motion::Left, false),
            Command::CursorRight => self.move_cursor(Motion::Right, false),
            Command::CursorUp => self.move_cursor(Motion::Up, false),
            Command::CursorDown => self.move_cursor(Motion::Down, false),
            Command::CursorLineStart => self.move_cursor(Motion::LineStart, false),
            Command::CursorLineEnd => self.move_cursor(Motion::LineEnd, false),
            Command::CursorFileStart => self.move_cursor(Motion::DocumentStart, false),
            Command::CursorFileEnd => self.move_cursor(Motion::DocumentEnd, false),
            Command::PageUp => {
                let page = self.state.ui.viewport_height;
                self.move_cursor(Motion::PageUp(page), false)
            }
            Command::PageDown => {
                let page = self.state.ui.viewport_height;
                self.move_cursor(Motion::PageDown(page), false)
            }
            Command::SelectLeft => self.move_cursor(Motion::Left, true),
            Command::SelectRight => self.move_cursor(Motion::Right, true),
            Command::SelectUp => self.move_cursor(Motion::Up, true),
            Command::SelectDown => self.move_cursor(Motion::Down, true),
            Command::SelectLineStart => self.move_cursor(Motion::LineStart, true),
            Command::SelectLineEnd => self.move_cursor(Motion::LineEnd, true),
            Command::OpenMenu(menu) => DispatchResult::changed(self.state.ui.menu.open(menu)),
            Command::Escape => {
                if self.state.ui.menu.close() {
                    return DispatchResult::changed(true);
                }
                DispatchResult::changed(self.state.document.clear_selection())
            }
        }
    }

    fn move_cursor(&mut self, motion: Motion, extend: bool) -> DispatchResult {
        DispatchResult::changed(self.state.document.move_cursor(motion, extend))
    }

    fn after_content_change(&mut self, changed: bool) -> DispatchResult {
        if changed {
            self.state.refresh_status();
        }
        DispatchResult::changed(changed)
    }

    fn show_prompt(&mut self, kind: PromptKind, initial: String) -> DispatchResult {
        self.state.ui.menu.close();
        self.state.ui.prompt.show(kind, initial);
        DispatchResult::changed(true)
    }

    fn write_effect(&self, path: PathBuf) -> Effect {
        Effect::WriteFile {
            path,
            rope: self.state.document.rope().clone(),
            version: self.state.document.version(),
        }
    }
}

/// Resolves user input from the path prompt: `~/` expands to `$HOME`, relative paths
/// are taken from `cwd`.
pub fn resolve_path(cwd: &Path, value: &str) -> PathBuf {
    if let Some(rest) = value.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
