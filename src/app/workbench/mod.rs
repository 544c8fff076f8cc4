//! Workbench: owns the store and the services, routes input, runs effects and draws.

use super::theme::{detect_terminal_color_support, TerminalColorSupport, UiTheme};
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{ClipboardService, FileService, KeybindingService};
use crate::kernel::services::ports::{EditorConfig, Settings, ThemeSettings};
use crate::kernel::{AppState, MenuId, Store, ThemeKind};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;

mod bridge;
mod input;
mod render;
mod viewport;

pub use viewport::{ScrollState, ViewportGeometry};

const MENU_BAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Screen areas from the last frame, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
struct LayoutCache {
    menu_bar: Rect,
    text: Rect,
    status: Rect,
    menu_titles: Vec<(MenuId, Rect)>,
    dropdown: Option<Rect>,
    /// Item index per dropdown row; `None` for separators.
    dropdown_rows: Vec<Option<usize>>,
}

pub struct Workbench {
    store: Store,
    files: FileService,
    clipboard: ClipboardService,
    keybindings: KeybindingService,
    theme_settings: ThemeSettings,
    theme: UiTheme,
    theme_kind: ThemeKind,
    scroll: ScrollState,
    follow_cursor: bool,
    selecting: bool,
    layout: LayoutCache,
    cursor: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new(cwd: PathBuf, settings: Settings, clipboard: ClipboardService) -> Self {
        let mut keybindings = KeybindingService::new();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "user keybindings applied");
        }

        let config = EditorConfig::from_settings(&settings.editor);
        let theme_kind = config.theme;
        let theme = UiTheme::resolve(theme_kind, &settings.theme, TerminalColorSupport::TrueColor);

        Self {
            store: Store::new(AppState::new(cwd, config)),
            files: FileService::new(),
            clipboard,
            keybindings,
            theme_settings: settings.theme,
            theme,
            theme_kind,
            scroll: ScrollState::default(),
            follow_cursor: true,
            selecting: false,
            layout: LayoutCache::default(),
            cursor: None,
        }
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        let support = detect_terminal_color_support();
        tracing::debug!(?support, "terminal color support");
        self.set_color_support(support);
    }

    pub fn set_color_support(&mut self, support: TerminalColorSupport) {
        self.theme = UiTheme::resolve(self.theme_kind, &self.theme_settings, support);
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Window title: `zpad - <name>`, with `*` while there are unsaved changes.
    pub fn title(&self) -> String {
        let doc = &self.store.state().document;
        let dirty = if doc.is_dirty() { "*" } else { "" };
        format!("zpad - {}{}", doc.title(), dirty)
    }

    fn geometry(&self) -> ViewportGeometry {
        let state = self.store.state();
        ViewportGeometry::new(
            self.layout.text.width,
            self.layout.text.height,
            state.style.wrap,
            state.config.tab_size,
        )
    }

    fn sync_theme(&mut self) {
        let kind = self.store.state().style.theme;
        if kind != self.theme_kind {
            self.theme_kind = kind;
            self.theme = UiTheme::resolve(kind, &self.theme_settings, self.theme.color_support());
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_frame(frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
