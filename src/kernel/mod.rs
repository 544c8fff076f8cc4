//! Headless application core (state/action/effect).

pub mod action;
pub mod document;
pub mod effect;
pub mod menu;
pub mod services;
pub mod state;
pub mod status;
pub mod store;
pub mod style;

pub use action::{Action, IoOp};
pub use document::{Document, Motion};
pub use effect::Effect;
pub use menu::{MenuId, MenuItem, MenuState};
pub use state::{AppState, Notification, NotificationLevel, PathPromptState, PromptKind, UiState};
pub use status::StatusSnapshot;
pub use store::{DispatchResult, Store};
pub use style::{BackgroundColor, Rgb, StyleState, ThemeKind};
