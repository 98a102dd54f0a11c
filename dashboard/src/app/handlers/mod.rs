//! # User Action Handlers
//!
//! State mutations behind each [`crate::app::Command`]. Handlers only touch
//! [`crate::app::AppState`]; the dispatcher decides which tasks run afterwards.

pub mod amount;
pub mod currency;
