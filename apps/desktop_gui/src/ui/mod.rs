//! UI layer for the dashboard: app shell, toolbar, summary cards, roster table and dialogs.

pub mod app;

pub use app::{DashboardApp, StartupConfig};
