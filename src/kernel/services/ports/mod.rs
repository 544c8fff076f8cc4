//! Service ports: traits + data contracts.

pub mod config;
pub mod file;
pub mod settings;

pub use config::EditorConfig;
pub use file::{FileError, FileProvider, Result as FileResult};
pub use settings::{EditorSettings, KeybindingRule, Settings, ThemeSettings};
