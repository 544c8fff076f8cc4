use ropey::Rope;
use std::path::PathBuf;

/// Side effects requested by the store; the frontend runs them and reports back
/// with an `Action`.
#[derive(Debug, Clone)]
pub enum Effect {
    LoadFile(PathBuf),
    WriteFile {
        path: PathBuf,
        rope: Rope,
        version: u64,
    },
    SetClipboardText(String),
    RequestClipboardText,
}
