//! zpad - a small menu-driven terminal text editor.
//!
//! Modules:
//! - core: commands and frontend-neutral input events
//! - kernel: headless state, actions, effects and the store; services (file, clipboard,
//!   keybindings, settings)
//! - app: the workbench (input routing, effect execution, rendering)
//! - tui: crossterm glue and terminal lifecycle

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
