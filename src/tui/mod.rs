//! Terminal frontend glue (crossterm).
//!
//! Kept apart from `kernel` so the editor core never depends on terminal crates.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
