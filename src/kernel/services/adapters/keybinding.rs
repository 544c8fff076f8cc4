//! Keybindings: key → command, per context.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::menu::MenuId;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" | "text" => Some(Self::Editor),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules on top of the defaults. Returns how many were applied.
    ///
    /// An empty command (`""`, `"-"`, `"none"`) removes the binding.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparseable key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(ctx) => match KeybindingContext::parse(ctx) {
                    Some(ctx) => ctx,
                    None => {
                        tracing::warn!(context = %ctx, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };

            let command = rule.command.trim();
            if command.is_empty() || command == "-" || command.eq_ignore_ascii_case("none") {
                self.unbind(context, &key);
                applied += 1;
                continue;
            }

            match Command::from_name(command) {
                Some(cmd) => {
                    self.bind(context, key, cmd);
                    applied += 1;
                }
                None => {
                    tracing::warn!(command = %command, "ignoring keybinding with unknown command")
                }
            }
        }
        applied
    }

    /// Preferred key for `command`, used for menu shortcut hints.
    ///
    /// Global bindings win over editor ones; among several keys the shortest label wins so the
    /// hint is stable regardless of map order.
    pub fn key_for(&self, command: &Command) -> Option<Key> {
        [&self.global, &self.editor]
            .into_iter()
            .find_map(|map| {
                map.iter()
                    .filter(|(_, c)| *c == command)
                    .map(|(k, _)| *k)
                    .min_by_key(|k| (format_key(k).len(), format_key(k)))
            })
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Human readable label, e.g. `Ctrl+Shift+S`.
pub fn format_key(key: &Key) -> String {
    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        out.push_str("Super+");
    }

    match key.code {
        KeyCode::Char(' ') => out.push_str("Space"),
        KeyCode::Char(ch) => out.extend(ch.to_uppercase()),
        KeyCode::Enter => out.push_str("Enter"),
        KeyCode::Tab => out.push_str("Tab"),
        KeyCode::BackTab => out.push_str("BackTab"),
        KeyCode::Esc => out.push_str("Esc"),
        KeyCode::Backspace => out.push_str("Backspace"),
        KeyCode::Delete => out.push_str("Del"),
        KeyCode::Up => out.push_str("Up"),
        KeyCode::Down => out.push_str("Down"),
        KeyCode::Left => out.push_str("Left"),
        KeyCode::Right => out.push_str("Right"),
        KeyCode::Home => out.push_str("Home"),
        KeyCode::End => out.push_str("End"),
        KeyCode::PageUp => out.push_str("PgUp"),
        KeyCode::PageDown => out.push_str("PgDn"),
        KeyCode::F(n) => {
            out.push('F');
            out.push_str(&n.to_string());
        }
        KeyCode::Unknown => out.push('?'),
    }
    out
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(40);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::New);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::Open);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Exit);

    bindings.insert(Key::ctrl(KeyCode::Char('x')), Command::Cut);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Copy);
    bindings.insert(Key::ctrl(KeyCode::Char('v')), Command::Paste);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);
    bindings.insert(Key::ctrl(KeyCode::Char('l')), Command::ClearAll);

    bindings.insert(Key::ctrl(KeyCode::Char('=')), Command::ZoomIn);
    bindings.insert(Key::ctrl(KeyCode::Char('+')), Command::ZoomIn);
    bindings.insert(Key::ctrl(KeyCode::Char('-')), Command::ZoomOut);
    bindings.insert(Key::alt(KeyCode::Char('=')), Command::IncreaseFont);
    bindings.insert(Key::alt(KeyCode::Char('-')), Command::DecreaseFont);
    bindings.insert(Key::alt(KeyCode::Char('z')), Command::ToggleWrap);
    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::ToggleBold);
    bindings.insert(Key::alt(KeyCode::Char('i')), Command::ToggleItalic);

    bindings.insert(Key::simple(KeyCode::F(1)), Command::Help);
    bindings.insert(Key::simple(KeyCode::F(10)), Command::OpenMenu(MenuId::File));

    for menu in MenuId::ALL {
        bindings.insert(
            Key::alt(KeyCode::Char(menu.mnemonic())),
            Command::OpenMenu(menu),
        );
    }

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(32);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::shift(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings.insert(Key::shift(KeyCode::Left), Command::SelectLeft);
    bindings.insert(Key::shift(KeyCode::Right), Command::SelectRight);
    bindings.insert(Key::shift(KeyCode::Up), Command::SelectUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::SelectDown);
    bindings.insert(Key::shift(KeyCode::Home), Command::SelectLineStart);
    bindings.insert(Key::shift(KeyCode::End), Command::SelectLineEnd);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
