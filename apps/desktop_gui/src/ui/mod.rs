//! UI layer for the desktop GUI: app shell, trip form, and summary panel.

pub mod app;

pub use app::PlannerApp;
