//! Semantic commands. Menus, keybindings and the settings file all speak in these.

use crate::kernel::menu::MenuId;
use crate::kernel::style::{BackgroundColor, ThemeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== File ====================
    New,
    Open,
    Save,
    SaveAs,
    Exit,

    // ==================== Edit ====================
    Cut,
    Copy,
    Paste,
    SelectAll,
    ClearAll,

    // ==================== View / Format / Theme ====================
    ZoomIn,
    ZoomOut,
    ToggleWrap,
    SetBackground(BackgroundColor),
    IncreaseFont,
    DecreaseFont,
    ToggleBold,
    ToggleItalic,
    SetTheme(ThemeKind),

    // ==================== Help ====================
    About,
    Help,

    // ==================== Text surface ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectLineStart,
    SelectLineEnd,

    // ==================== UI ====================
    OpenMenu(MenuId),
    Escape,
}

const BACKGROUND_PREFIX: &str = "setBackground:";
const THEME_PREFIX: &str = "setTheme:";
const MENU_PREFIX: &str = "openMenu:";

impl Command {
    pub fn name(&self) -> String {
        let name = match self {
            Command::New => "new",
            Command::Open => "open",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Exit => "exit",
            Command::Cut => "cut",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::SelectAll => "selectAll",
            Command::ClearAll => "clearAll",
            Command::ZoomIn => "zoomIn",
            Command::ZoomOut => "zoomOut",
            Command::ToggleWrap => "toggleWrap",
            Command::SetBackground(color) => return format!("{BACKGROUND_PREFIX}{}", color.id()),
            Command::IncreaseFont => "increaseFont",
            Command::DecreaseFont => "decreaseFont",
            Command::ToggleBold => "toggleBold",
            Command::ToggleItalic => "toggleItalic",
            Command::SetTheme(theme) => return format!("{THEME_PREFIX}{}", theme.id()),
            Command::About => "about",
            Command::Help => "help",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::SelectLeft => "selectLeft",
            Command::SelectRight => "selectRight",
            Command::SelectUp => "selectUp",
            Command::SelectDown => "selectDown",
            Command::SelectLineStart => "selectLineStart",
            Command::SelectLineEnd => "selectLineEnd",
            Command::OpenMenu(menu) => return format!("{MENU_PREFIX}{}", menu.id()),
            Command::Escape => "escape",
        };
        name.to_string()
    }

    /// Inverse of [`Command::name`]. `insertChar` has no payload and is not nameable.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(color) = name.strip_prefix(BACKGROUND_PREFIX) {
            return BackgroundColor::parse(color).map(Command::SetBackground);
        }
        if let Some(theme) = name.strip_prefix(THEME_PREFIX) {
            return ThemeKind::parse(theme).map(Command::SetTheme);
        }
        if let Some(menu) = name.strip_prefix(MENU_PREFIX) {
            return MenuId::parse(menu).map(Command::OpenMenu);
        }

        let cmd = match name {
            "new" => Command::New,
            "open" => Command::Open,
            "save" => Command::Save,
            "saveAs" => Command::SaveAs,
            "exit" | "quit" => Command::Exit,
            "cut" => Command::Cut,
            "copy" => Command::Copy,
            "paste" => Command::Paste,
            "selectAll" => Command::SelectAll,
            "clearAll" => Command::ClearAll,
            "zoomIn" => Command::ZoomIn,
            "zoomOut" => Command::ZoomOut,
            "toggleWrap" => Command::ToggleWrap,
            "increaseFont" => Command::IncreaseFont,
            "decreaseFont" => Command::DecreaseFont,
            "toggleBold" => Command::ToggleBold,
            "toggleItalic" => Command::ToggleItalic,
            "about" => Command::About,
            "help" => Command::Help,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "selectLeft" => Command::SelectLeft,
            "selectRight" => Command::SelectRight,
            "selectUp" => Command::SelectUp,
            "selectDown" => Command::SelectDown,
            "selectLineStart" => Command::SelectLineStart,
            "selectLineEnd" => Command::SelectLineEnd,
            "escape" => Command::Escape,
            _ => return None,
        };
        Some(cmd)
    }
}
