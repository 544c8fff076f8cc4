//! File access: the local provider behind a logging service.

pub mod local;
pub mod service;

pub use local::LocalFileProvider;
pub use service::FileService;
