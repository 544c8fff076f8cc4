//! Frontend-neutral building blocks:
//! - Command: semantic commands (menus and keybindings resolve to these)
//! - Event: input events independent of the terminal library

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
