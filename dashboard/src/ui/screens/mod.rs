//! # Screen Modules
//!
//! The dashboard has a single screen, [`dashboard`], laid out top to bottom:
//!
//! - header: title, base selector, refresh button, last-updated time
//! - converter: amount, from / swap / to, result line
//! - rates grid: twelve rates quoted against the snapshot base
//! - quick convert: popular pairs with their own amounts
//! - market overview: 7-day and 30-day change cards
//!
//! ## Rendering Pattern
//!
//! Screens take a cloned state snapshot, draw it, and collect user gestures as
//! commands. Commands are dispatched once the frame is laid out, so the state
//! never changes mid-render.

pub mod dashboard;
