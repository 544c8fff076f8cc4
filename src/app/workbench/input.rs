use super::Workbench;
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action, MenuId};
use crate::tui::view::EventResult;
use ratatui::layout::Rect;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let changed = match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse(mouse_event),
        InputEvent::Resize(..) => true,
        InputEvent::FocusGained | InputEvent::FocusLost => false,
    };

    if workbench.should_quit() {
        return EventResult::Quit;
    }
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

fn is_plain_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch)
            if !event.modifiers.contains(KeyModifiers::CONTROL)
                && !event.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

impl Workbench {
    fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }

        let ui = &self.store.state().ui;
        if ui.notification.is_some() {
            return self.handle_notification_key(event);
        }
        if ui.prompt.visible {
            return self.handle_prompt_key(event);
        }
        if ui.menu.is_open() {
            return self.handle_menu_key(event);
        }

        self.follow_cursor = true;
        let key = Key::from(*event);
        if let Some(cmd) = self
            .keybindings
            .resolve(KeybindingContext::Editor, &key)
            .copied()
        {
            return self.dispatch_kernel(Action::RunCommand(cmd));
        }

        match is_plain_char(event) {
            Some(ch) => self.dispatch_kernel(Action::RunCommand(Command::InsertChar(ch))),
            None => false,
        }
    }

    fn handle_notification_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.dispatch_kernel(Action::DismissNotification)
            }
            _ => false,
        }
    }

    fn handle_prompt_key(&mut self, event: &KeyEvent) -> bool {
        let action = match event.code {
            KeyCode::Enter => Action::PromptAccept,
            KeyCode::Esc => Action::PromptCancel,
            KeyCode::Backspace => Action::PromptBackspace,
            KeyCode::Left => Action::PromptCursorLeft,
            KeyCode::Right => Action::PromptCursorRight,
            _ => {
                let key = Key::from(*event);
                if self.keybindings.resolve(KeybindingContext::Global, &key) == Some(&Command::Paste)
                {
                    return self.paste_into_prompt();
                }
                match is_plain_char(event) {
                    Some(ch) => Action::PromptAppend(ch),
                    None => return false,
                }
            }
        };
        self.dispatch_kernel(action)
    }

    fn paste_into_prompt(&mut self) -> bool {
        match self.clipboard.get_text() {
            Ok(text) => self.dispatch_kernel(Action::PromptInsertText(text)),
            Err(e) => self.dispatch_kernel(Action::ShowStatus(e.to_string())),
        }
    }

    /// Menu navigation keys; any other bound key closes the menu and runs its command.
    fn handle_menu_key(&mut self, event: &KeyEvent) -> bool {
        let action = match event.code {
            KeyCode::Left => Action::MenuMove(-1),
            KeyCode::Right => Action::MenuMove(1),
            KeyCode::Up => Action::MenuMoveSelection(-1),
            KeyCode::Down => Action::MenuMoveSelection(1),
            KeyCode::Enter | KeyCode::Char(' ') if event.modifiers.is_empty() => {
                Action::MenuActivate
            }
            KeyCode::Esc | KeyCode::F(10) => Action::MenuClose,
            _ => {
                let key = Key::from(*event);
                let Some(cmd) = self
                    .keybindings
                    .resolve(KeybindingContext::Global, &key)
                    .copied()
                else {
                    return false;
                };
                if !matches!(cmd, Command::OpenMenu(_)) {
                    self.dispatch_kernel(Action::MenuClose);
                }
                self.dispatch_kernel(Action::RunCommand(cmd));
                return true;
            }
        };
        self.dispatch_kernel(action)
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        let ui = &self.store.state().ui;
        if ui.notification.is_some() {
            return false;
        }
        if ui.prompt.visible {
            return self.dispatch_kernel(Action::PromptInsertText(text.to_string()));
        }
        if ui.menu.is_open() {
            self.dispatch_kernel(Action::MenuClose);
        }
        self.follow_cursor = true;
        self.dispatch_kernel(Action::InsertText(text.to_string()))
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        if self.store.state().ui.is_modal() {
            return false;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(event),
            MouseEventKind::Drag(MouseButton::Left) if self.selecting => self.handle_drag(event),
            MouseEventKind::Up(MouseButton::Left) => {
                self.selecting = false;
                false
            }
            MouseEventKind::Moved => self.handle_menu_hover(event),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let step = self.store.state().config.scroll_step() as isize;
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -step
                } else {
                    step
                };
                let geom = self.geometry();
                let doc = &self.store.state().document;
                let changed = if event.modifiers.contains(KeyModifiers::SHIFT) {
                    self.scroll.scroll_columns(&geom, delta)
                } else {
                    self.scroll.scroll_rows(doc, &geom, delta)
                };
                if changed {
                    self.follow_cursor = false;
                }
                changed
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                let step = self.store.state().config.scroll_step() as isize;
                let delta = if event.kind == MouseEventKind::ScrollLeft {
                    -step
                } else {
                    step
                };
                let geom = self.geometry();
                let changed = self.scroll.scroll_columns(&geom, delta);
                if changed {
                    self.follow_cursor = false;
                }
                changed
            }
            _ => false,
        }
    }

    fn menu_title_at(&self, x: u16, y: u16) -> Option<MenuId> {
        self.layout
            .menu_titles
            .iter()
            .find(|(_, rect)| rect_contains(*rect, x, y))
            .map(|(menu, _)| *menu)
    }

    fn handle_left_click(&mut self, event: &MouseEvent) -> bool {
        let (x, y) = (event.column, event.row);
        let open = self.store.state().ui.menu.open;

        if rect_contains(self.layout.menu_bar, x, y) {
            return match (self.menu_title_at(x, y), open) {
                (Some(menu), Some(current)) if menu == current => {
                    self.dispatch_kernel(Action::MenuClose)
                }
                (Some(menu), _) => self.dispatch_kernel(Action::MenuOpen(menu)),
                (None, Some(_)) => self.dispatch_kernel(Action::MenuClose),
                (None, None) => false,
            };
        }

        if open.is_some() {
            if let Some(dropdown) = self.layout.dropdown {
                if rect_contains(dropdown, x, y) {
                    let row = usize::from(y - dropdown.y);
                    return match self.layout.dropdown_rows.get(row).copied().flatten() {
                        Some(index) => self.dispatch_kernel(Action::MenuClickItem(index)),
                        None => false,
                    };
                }
            }
            return self.dispatch_kernel(Action::MenuClose);
        }

        let text = self.layout.text;
        if !rect_contains(text, x, y) {
            return false;
        }
        let geom = self.geometry();
        let (line, col) =
            self.scroll
                .hit_test(&self.store.state().document, &geom, x - text.x, y - text.y);
        self.selecting = true;
        self.follow_cursor = true;
        let extend = event.modifiers.contains(KeyModifiers::SHIFT);
        self.dispatch_kernel(Action::PlaceCursor { line, col, extend })
    }

    /// Extends the selection; dragging past the top or bottom edge scrolls one row.
    fn handle_drag(&mut self, event: &MouseEvent) -> bool {
        let text = self.layout.text;
        if text.width == 0 || text.height == 0 {
            return false;
        }
        let geom = self.geometry();
        let bottom = text.y + text.height - 1;
        let right = text.x + text.width - 1;
        let doc = &self.store.state().document;
        if event.row < text.y {
            self.scroll.scroll_rows(doc, &geom, -1);
        } else if event.row > bottom {
            self.scroll.scroll_rows(doc, &geom, 1);
        }

        let x = event.column.clamp(text.x, right) - text.x;
        let y = event.row.clamp(text.y, bottom) - text.y;
        let (line, col) = self.scroll.hit_test(doc, &geom, x, y);
        self.follow_cursor = true;
        self.dispatch_kernel(Action::PlaceCursor {
            line,
            col,
            extend: true,
        })
    }

    /// With a menu open, hovering another title switches to it.
    fn handle_menu_hover(&mut self, event: &MouseEvent) -> bool {
        let Some(current) = self.store.state().ui.menu.open else {
            return false;
        };
        match self.menu_title_at(event.column, event.row) {
            Some(menu) if menu != current => self.dispatch_kernel(Action::MenuOpen(menu)),
            _ => false,
        }
    }
}
