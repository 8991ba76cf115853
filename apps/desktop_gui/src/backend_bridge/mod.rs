//! Bridge between the UI thread and the backend worker that owns the HTTP
//! client and its tokio runtime.

pub mod commands;
pub mod runtime;
