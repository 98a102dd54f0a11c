//! # FX Dashboard - Library Root
//!
//! A **native desktop GUI** for currency conversion and exchange-rate monitoring.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Converter**: Debounced amount entry with searchable from/to selectors
//! - **Rates Grid**: Twelve rates quoted against a selectable base currency
//! - **Quick Convert**: Popular pairs with independently editable amounts
//! - **Market Overview**: 7-day and 30-day change for tracked pairs
//! - **Auto-Refresh**: Periodic silent rate refresh
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              fx-dashboard (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────────────┐
//! │  Exchange-rate provider │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, commands, events, selectors, debounce)
//!   │   └── core::service::RateService
//!   │         └── services::api::RateClient (HTTP + retry)
//!   │
//!   └── ui (rendering)
//!       ├── screens::dashboard
//!       ├── widgets::* (selector, cards, toasts)
//!       └── theme
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p fx-dashboard
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Command};
pub use config::DashboardConfig;
pub use core::{AppError, Result};
