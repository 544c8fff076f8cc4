use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::menu::MenuId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Open,
    Save,
}

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// Text from the clipboard or a bracketed paste.
    InsertText(String),
    PlaceCursor {
        line: usize,
        col: usize,
        extend: bool,
    },
    SetViewportHeight(usize),
    ShowStatus(String),
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileSaved {
        path: PathBuf,
        version: u64,
    },
    /// A path given on the command line that does not exist yet: becomes the save target
    /// of the empty document.
    AdoptPath(PathBuf),
    IoFailed {
        op: IoOp,
        path: PathBuf,
        message: String,
    },
    PromptAppend(char),
    PromptInsertText(String),
    PromptBackspace,
    PromptCursorLeft,
    PromptCursorRight,
    PromptAccept,
    PromptCancel,
    MenuOpen(MenuId),
    MenuClose,
    MenuMove(isize),
    MenuMoveSelection(isize),
    MenuActivate,
    MenuClickItem(usize),
    DismissNotification,
}
