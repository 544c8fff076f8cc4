use crate::kernel::style::{ThemeKind, DEFAULT_FONT_SIZE};

use super::settings::EditorSettings;

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub word_wrap: bool,
    pub font_size: f32,
    pub theme: ThemeKind,
    pub scroll_lines: usize,
    pub default_viewport_height: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            word_wrap: true,
            font_size: DEFAULT_FONT_SIZE,
            theme: ThemeKind::Light,
            scroll_lines: 3,
            default_viewport_height: 20,
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        let defaults = Self::default();
        Self {
            tab_size: settings.tab_size.unwrap_or(defaults.tab_size).clamp(1, 16),
            word_wrap: settings.word_wrap.unwrap_or(defaults.word_wrap),
            font_size: settings
                .font_size
                .filter(|size| size.is_finite() && *size > 0.0)
                .unwrap_or(defaults.font_size),
            theme: settings.theme.unwrap_or(defaults.theme),
            scroll_lines: settings
                .scroll_lines
                .unwrap_or(defaults.scroll_lines)
                .max(1),
            default_viewport_height: defaults.default_viewport_height,
        }
    }

    pub fn scroll_step(&self) -> usize {
        self.scroll_lines
    }
}
