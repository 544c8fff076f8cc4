//! Presentation preferences for the text surface: zoom, font flags, wrap, colors.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.5;
pub const ZOOM_STEP: f32 = 0.1;
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundColor {
    White,
    LightYellow,
    LightBlue,
    LightGreen,
    LightGray,
    Pink,
    Cyan,
    Orange,
    Rgb(Rgb),
}

impl BackgroundColor {
    pub const PALETTE: [BackgroundColor; 8] = [
        BackgroundColor::White,
        BackgroundColor::LightYellow,
        BackgroundColor::LightBlue,
        BackgroundColor::LightGreen,
        BackgroundColor::LightGray,
        BackgroundColor::Pink,
        BackgroundColor::Cyan,
        BackgroundColor::Orange,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            BackgroundColor::White => Rgb::new(0xff, 0xff, 0xff),
            BackgroundColor::LightYellow => Rgb::new(0xff, 0xff, 0xe0),
            BackgroundColor::LightBlue => Rgb::new(0xad, 0xd8, 0xe6),
            BackgroundColor::LightGreen => Rgb::new(0x90, 0xee, 0x90),
            BackgroundColor::LightGray => Rgb::new(0xd3, 0xd3, 0xd3),
            BackgroundColor::Pink => Rgb::new(0xff, 0xc0, 0xcb),
            BackgroundColor::Cyan => Rgb::new(0x00, 0xff, 0xff),
            BackgroundColor::Orange => Rgb::new(0xff, 0xa5, 0x00),
            BackgroundColor::Rgb(rgb) => rgb,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundColor::White => "White",
            BackgroundColor::LightYellow => "Light Yellow",
            BackgroundColor::LightBlue => "Light Blue",
            BackgroundColor::LightGreen => "Light Green",
            BackgroundColor::LightGray => "Light Gray",
            BackgroundColor::Pink => "Pink",
            BackgroundColor::Cyan => "Cyan",
            BackgroundColor::Orange => "Orange",
            BackgroundColor::Rgb(_) => "Custom",
        }
    }

    /// Stable identifier used in command names (`setBackground:lightYellow`).
    pub fn id(self) -> String {
        match self {
            BackgroundColor::White => "white".to_string(),
            BackgroundColor::LightYellow => "lightYellow".to_string(),
            BackgroundColor::LightBlue => "lightBlue".to_string(),
            BackgroundColor::LightGreen => "lightGreen".to_string(),
            BackgroundColor::LightGray => "lightGray".to_string(),
            BackgroundColor::Pink => "pink".to_string(),
            BackgroundColor::Cyan => "cyan".to_string(),
            BackgroundColor::Orange => "orange".to_string(),
            BackgroundColor::Rgb(rgb) => rgb.to_hex(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim();
        if v.starts_with('#') {
            return Rgb::parse_hex(v).map(BackgroundColor::Rgb);
        }
        let normalized: String = v
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|color| color.id().to_ascii_lowercase() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Text area (background, foreground).
    pub fn text_colors(self) -> (Rgb, Rgb) {
        match self {
            ThemeKind::Light => (Rgb::new(0xff, 0xff, 0xff), Rgb::new(0x00, 0x00, 0x00)),
            ThemeKind::Dark => (Rgb::new(0x3c, 0x3f, 0x41), Rgb::new(0xff, 0xff, 0xff)),
        }
    }

    /// Window chrome background (menu bar, status bar).
    pub fn chrome_background(self) -> Rgb {
        match self {
            ThemeKind::Light => Rgb::new(0xff, 0xff, 0xff),
            ThemeKind::Dark => Rgb::new(0x2b, 0x2b, 0x2b),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "Light Theme",
            ThemeKind::Dark => "Dark Theme",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeKind::Light),
            "dark" => Some(ThemeKind::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    zoom: f32,
    pub bold: bool,
    pub italic: bool,
    pub wrap: bool,
    pub background: Rgb,
    pub foreground: Rgb,
    pub theme: ThemeKind,
    base_font_size: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, true, ThemeKind::Light)
    }
}

impl StyleState {
    pub fn new(base_font_size: f32, wrap: bool, theme: ThemeKind) -> Self {
        let (background, foreground) = theme.text_colors();
        let base_font_size = if base_font_size.is_finite() && base_font_size > 0.0 {
            base_font_size
        } else {
            DEFAULT_FONT_SIZE
        };
        Self {
            zoom: 1.0,
            bold: false,
            italic: false,
            wrap,
            background,
            foreground,
            theme,
            base_font_size,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Adds `delta` to the zoom factor; never goes below [`MIN_ZOOM`].
    pub fn set_zoom(&mut self, delta: f32) -> bool {
        let next = ((self.zoom + delta) * 100.0).round() / 100.0;
        let next = if next.is_finite() {
            next.max(MIN_ZOOM)
        } else {
            self.zoom
        };
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn font_size(&self) -> f32 {
        self.base_font_size * self.zoom
    }

    pub fn set_bold(&mut self, bold: bool) -> bool {
        std::mem::replace(&mut self.bold, bold) != bold
    }

    pub fn set_italic(&mut self, italic: bool) -> bool {
        std::mem::replace(&mut self.italic, italic) != italic
    }

    pub fn set_wrap(&mut self, wrap: bool) -> bool {
        std::mem::replace(&mut self.wrap, wrap) != wrap
    }

    pub fn set_background(&mut self, color: BackgroundColor) -> bool {
        let rgb = color.rgb();
        std::mem::replace(&mut self.background, rgb) != rgb
    }

    /// Applies the theme's background/foreground pair in one step.
    pub fn set_theme(&mut self, theme: ThemeKind) -> bool {
        let (background, foreground) = theme.text_colors();
        let changed =
            self.theme != theme || self.background != background || self.foreground != foreground;
        self.theme = theme;
        self.background = background;
        self.foreground = foreground;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/style.rs"]
mod tests;
