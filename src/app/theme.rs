//! Chrome colors: menu bar, dropdowns, status bar and dialogs.
//!
//! Text-area colors live in `kernel::StyleState`; this module only maps them onto what the
//! terminal can display.

use crate::kernel::services::ports::ThemeSettings;
use crate::kernel::{Rgb, StyleState, ThemeKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub menu_bar_fg: Color,
    pub menu_bar_bg: Color,
    pub menu_selected_fg: Color,
    pub menu_selected_bg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
    pub dialog_border: Color,
    pub dialog_fg: Color,
    pub dialog_bg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub selection_bg: Color,
    support: TerminalColorSupport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("ZPAD_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::for_kind(ThemeKind::Light)
    }
}

impl UiTheme {
    /// Built-in chrome palette for `kind`, true-color.
    pub fn for_kind(kind: ThemeKind) -> Self {
        let chrome = rgb_color(kind.chrome_background());
        match kind {
            ThemeKind::Light => Self {
                menu_bar_fg: Color::Rgb(0x00, 0x00, 0x00),
                menu_bar_bg: chrome,
                menu_selected_fg: Color::Rgb(0xff, 0xff, 0xff),
                menu_selected_bg: Color::Rgb(0x00, 0x78, 0xd7),
                status_fg: Color::Rgb(0x33, 0x33, 0x33),
                status_bg: chrome,
                dialog_border: Color::Rgb(0x00, 0x78, 0xd7),
                dialog_fg: Color::Rgb(0x00, 0x00, 0x00),
                dialog_bg: chrome,
                accent_fg: Color::Rgb(0x00, 0x78, 0xd7),
                error_fg: Color::Rgb(0xc4, 0x2b, 0x1c),
                selection_bg: Color::Rgb(0xad, 0xd6, 0xff),
                support: TerminalColorSupport::TrueColor,
            },
            ThemeKind::Dark => Self {
                menu_bar_fg: Color::Rgb(0xff, 0xff, 0xff),
                menu_bar_bg: chrome,
                menu_selected_fg: Color::Rgb(0xff, 0xff, 0xff),
                menu_selected_bg: Color::Rgb(0x4b, 0x6e, 0xaf),
                status_fg: Color::Rgb(0xbb, 0xbb, 0xbb),
                status_bg: chrome,
                dialog_border: Color::Rgb(0x4b, 0x6e, 0xaf),
                dialog_fg: Color::Rgb(0xff, 0xff, 0xff),
                dialog_bg: chrome,
                accent_fg: Color::Rgb(0x6a, 0x9f, 0xe0),
                error_fg: Color::Rgb(0xff, 0x6b, 0x68),
                selection_bg: Color::Rgb(0x21, 0x42, 0x83),
                support: TerminalColorSupport::TrueColor,
            },
        }
    }

    /// Palette for `kind` with user overrides applied, then downsampled to `support`.
    pub fn resolve(
        kind: ThemeKind,
        settings: &ThemeSettings,
        support: TerminalColorSupport,
    ) -> Self {
        let mut theme = Self::for_kind(kind);
        theme.apply_settings(settings);
        theme.apply_color_support(support);
        theme
    }

    pub fn color_support(&self) -> TerminalColorSupport {
        self.support
    }

    pub(crate) fn apply_color_support(&mut self, support: TerminalColorSupport) {
        self.support = support;
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&mut self.menu_bar_fg, &settings.menu_bar_fg),
            (&mut self.menu_bar_bg, &settings.menu_bar_bg),
            (&mut self.menu_selected_fg, &settings.menu_selected_fg),
            (&mut self.menu_selected_bg, &settings.menu_selected_bg),
            (&mut self.status_fg, &settings.status_fg),
            (&mut self.status_bg, &settings.status_bg),
            (&mut self.dialog_border, &settings.dialog_border),
            (&mut self.dialog_fg, &settings.dialog_fg),
            (&mut self.dialog_bg, &settings.dialog_bg),
            (&mut self.accent_fg, &settings.accent_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.selection_bg, &settings.selection_bg),
        ];
        for (slot, value) in overrides {
            match value.as_deref().map(|v| (v, parse_color(v))) {
                Some((_, Some(color))) => *slot = color,
                Some((raw, None)) => tracing::warn!(value = %raw, "ignoring unknown theme color"),
                None => {}
            }
        }
    }

    /// `rgb` as the terminal will show it.
    pub fn color(&self, rgb: Rgb) -> Color {
        map_color_for_support(rgb_color(rgb), self.support)
    }

    /// Base style of the text surface: document colors plus bold/italic.
    pub fn text_style(&self, style: &StyleState) -> Style {
        let mut out = Style::default()
            .fg(self.color(style.foreground))
            .bg(self.color(style.background));
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        if style.italic {
            out = out.add_modifier(Modifier::ITALIC);
        }
        out
    }

    fn colors_mut(&mut self) -> [&mut Color; 12] {
        [
            &mut self.menu_bar_fg,
            &mut self.menu_bar_bg,
            &mut self.menu_selected_fg,
            &mut self.menu_selected_bg,
            &mut self.status_fg,
            &mut self.status_bg,
            &mut self.dialog_border,
            &mut self.dialog_fg,
            &mut self.dialog_bg,
            &mut self.accent_fg,
            &mut self.error_fg,
            &mut self.selection_bg,
        ]
    }
}

pub fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Rgb(r, g, b)) if support == TerminalColorSupport::Ansi256 => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (_, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_ansi16_index(r, g, b)),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u16..=255)
        .map(|i| i as u8)
        .min_by_key(|&i| {
            let (pr, pg, pb) = ansi256_index_to_rgb(i);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|(_, &p)| color_distance_sq((r, g, b), p))
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if v.starts_with('#') {
        return Rgb::parse_hex(v).map(rgb_color);
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
