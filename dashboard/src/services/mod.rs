//! # Services Module
//!
//! External service integrations for the currency dashboard.
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   FX Dashboard (egui)                   │
//! │                                                         │
//! │  ┌──────────────────────────────┐                       │
//! │  │  RateClient (api/)           │  retry: 3 attempts,   │
//! │  │  impl core::RateService      │  linear 1s backoff    │
//! │  └──────────────┬───────────────┘                       │
//! └─────────────────┼───────────────────────────────────────┘
//!                   │ HTTPS/JSON
//!                   ▼
//! ┌─────────────────────────────┐
//! │  Exchange-rate provider     │
//! │  /currencies /latest /date  │
//! └─────────────────────────────┘
//! ```
//!
//! The client has no UI knowledge: it produces plain data or an
//! [`crate::core::AppError`], and the orchestrator decides what the user sees.

pub mod api;
