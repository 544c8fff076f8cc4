//! Service adapters: OS specific implementations of the ports.

pub mod clipboard;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use clipboard::{ClipboardError, ClipboardService};
pub use file::{FileService, LocalFileProvider};
pub use keybinding::{format_key, KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from, parse_keybinding,
};
