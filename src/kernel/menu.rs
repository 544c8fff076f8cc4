//! Menu bar model: which menus exist, what each item runs, and which menu is open.

use crate::core::Command;
use crate::kernel::style::{BackgroundColor, StyleState, ThemeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    Edit,
    View,
    Format,
    Theme,
    Help,
}

impl MenuId {
    pub const ALL: [MenuId; 6] = [
        MenuId::File,
        MenuId::Edit,
        MenuId::View,
        MenuId::Format,
        MenuId::Theme,
        MenuId::Help,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MenuId::File => "File",
            MenuId::Edit => "Edit",
            MenuId::View => "View",
            MenuId::Format => "Format",
            MenuId::Theme => "Theme",
            MenuId::Help => "Help",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            MenuId::File => "file",
            MenuId::Edit => "edit",
            MenuId::View => "view",
            MenuId::Format => "format",
            MenuId::Theme => "theme",
            MenuId::Help => "help",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|m| m.id() == v)
    }

    /// Letter that opens the menu with Alt; lowercase, always present in the title.
    pub fn mnemonic(self) -> char {
        match self {
            MenuId::Format => 'o',
            other => other.id().chars().next().unwrap_or(' '),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuId::File => &FILE_ITEMS,
            MenuId::Edit => &EDIT_ITEMS,
            MenuId::View => &VIEW_ITEMS,
            MenuId::Format => &FORMAT_ITEMS,
            MenuId::Theme => &THEME_ITEMS,
            MenuId::Help => &HELP_ITEMS,
        }
    }
}

/// Style flag mirrored by a check-mark item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCheck {
    None,
    Wrap,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub label: &'static str,
    pub command: Command,
    pub check: ItemCheck,
    pub separator_before: bool,
}

impl MenuItem {
    const fn plain(label: &'static str, command: Command) -> Self {
        Self {
            label,
            command,
            check: ItemCheck::None,
            separator_before: false,
        }
    }

    const fn after_separator(mut self) -> Self {
        self.separator_before = true;
        self
    }

    const fn checked_by(mut self, check: ItemCheck) -> Self {
        self.check = check;
        self
    }

    /// `Some(state)` for check-mark items.
    pub fn checked(&self, style: &StyleState) -> Option<bool> {
        match self.check {
            ItemCheck::None => None,
            ItemCheck::Wrap => Some(style.wrap),
            ItemCheck::Bold => Some(style.bold),
            ItemCheck::Italic => Some(style.italic),
        }
    }
}

static FILE_ITEMS: [MenuItem; 5] = [
    MenuItem::plain("New", Command::New),
    MenuItem::plain("Open...", Command::Open),
    MenuItem::plain("Save", Command::Save),
    MenuItem::plain("Save As...", Command::SaveAs),
    MenuItem::plain("Exit", Command::Exit).after_separator(),
];

static EDIT_ITEMS: [MenuItem; 5] = [
    MenuItem::plain("Cut", Command::Cut),
    MenuItem::plain("Copy", Command::Copy),
    MenuItem::plain("Paste", Command::Paste),
    MenuItem::plain("Select All", Command::SelectAll).after_separator(),
    MenuItem::plain("Clear All", Command::ClearAll),
];

static VIEW_ITEMS: [MenuItem; 11] = [
    MenuItem::plain("Word Wrap", Command::ToggleWrap).checked_by(ItemCheck::Wrap),
    MenuItem::plain("Zoom In", Command::ZoomIn),
    MenuItem::plain("Zoom Out", Command::ZoomOut),
    MenuItem::plain(
        "Background: White",
        Command::SetBackground(BackgroundColor::White),
    )
    .after_separator(),
    MenuItem::plain(
        "Background: Light Yellow",
        Command::SetBackground(BackgroundColor::LightYellow),
    ),
    MenuItem::plain(
        "Background: Light Blue",
        Command::SetBackground(BackgroundColor::LightBlue),
    ),
    MenuItem::plain(
        "Background: Light Green",
        Command::SetBackground(BackgroundColor::LightGreen),
    ),
    MenuItem::plain(
        "Background: Light Gray",
        Command::SetBackground(BackgroundColor::LightGray),
    ),
    MenuItem::plain("Background: Pink", Command::SetBackground(BackgroundColor::Pink)),
    MenuItem::plain("Background: Cyan", Command::SetBackground(BackgroundColor::Cyan)),
    MenuItem::plain(
        "Background: Orange",
        Command::SetBackground(BackgroundColor::Orange),
    ),
];

static FORMAT_ITEMS: [MenuItem; 4] = [
    MenuItem::plain("Increase Font Size", Command::IncreaseFont),
    MenuItem::plain("Decrease Font Size", Command::DecreaseFont),
    MenuItem::plain("Bold", Command::ToggleBold).checked_by(ItemCheck::Bold),
    MenuItem::plain("Italic", Command::ToggleItalic).checked_by(ItemCheck::Italic),
];

static THEME_ITEMS: [MenuItem; 2] = [
    MenuItem::plain("Light Theme", Command::SetTheme(ThemeKind::Light)),
    MenuItem::plain("Dark Theme", Command::SetTheme(ThemeKind::Dark)),
];

static HELP_ITEMS: [MenuItem; 2] = [
    MenuItem::plain("About", Command::About),
    MenuItem::plain("How to Use", Command::Help),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: Option<MenuId>,
    pub selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&mut self, menu: MenuId) -> bool {
        let changed = self.open != Some(menu) || self.selected != 0;
        self.open = Some(menu);
        self.selected = 0;
        changed
    }

    pub fn close(&mut self) -> bool {
        self.selected = 0;
        self.open.take().is_some()
    }

    /// Switches to the neighbouring menu, wrapping around the bar.
    pub fn move_menu(&mut self, delta: isize) -> bool {
        let Some(current) = self.open else {
            return false;
        };
        let len = MenuId::ALL.len() as isize;
        let next = (current.index() as isize + delta).rem_euclid(len) as usize;
        self.open(MenuId::ALL[next])
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        let Some(menu) = self.open else {
            return false;
        };
        let len = menu.items().len() as isize;
        if len == 0 {
            return false;
        }
        let next = (self.selected as isize + delta).rem_euclid(len) as usize;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn selected_item(&self) -> Option<&'static MenuItem> {
        self.open.and_then(|menu| menu.items().get(self.selected))
    }
}
