//! Per-user data directory, used for logs.
//!
//! - macOS: ~/Library/Application Support/zpad/logs
//! - Linux: $XDG_DATA_HOME/zpad/logs or ~/.local/share/zpad/logs
//! - Windows: %APPDATA%\zpad\logs

use std::path::PathBuf;

const APP_NAME: &str = "zpad";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// Creates the log directory, falling back to the system temp dir.
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    if let Some(dir) = get_log_dir() {
        if std::fs::create_dir_all(&dir).is_ok() {
            return Ok(dir);
        }
    }

    let fallback = std::env::temp_dir().join(APP_NAME).join(LOG_DIR);
    std::fs::create_dir_all(&fallback)?;
    Ok(fallback)
}
