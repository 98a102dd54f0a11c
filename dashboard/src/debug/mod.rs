//! # Logging Infrastructure
//!
//! File-based structured logging for the FX dashboard.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/fx-dashboard.log` (daily rotation)
//! - **Non-blocking writes**: the egui thread never waits on disk I/O
//! - **Panic hook**: panics are recorded in the log before the default handler runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup and keep the guard alive until exit
//! let _guard = dashboard::debug::init_logger();
//!
//! tracing::info!(base = "USD", rate_count = 31, "Rates refreshed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `fx_dashboard=info,dashboard=info,warn`)
//! - `FX_DASHBOARD_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
