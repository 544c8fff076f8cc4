use serde::{Deserialize, Serialize};

use crate::kernel::style::ThemeKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_lines: Option<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: Some(4),
            word_wrap: Some(true),
            font_size: Some(14.0),
            theme: Some(ThemeKind::Light),
            scroll_lines: Some(3),
        }
    }
}

/// Chrome colors: names (`"cyan"`, `"dark_gray"`) or `#rrggbb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_bar_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_bar_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_selected_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_selected_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
}
