//! # Reusable Widgets
//!
//! - **[`currency_selector`]**: searchable currency picker popup
//! - **[`notifications`]**: toast notifications (egui-notify)
//! - **[`rate_card`]**: rates-grid, quick-convert and historical cards

pub mod currency_selector;
pub mod notifications;
pub mod rate_card;
