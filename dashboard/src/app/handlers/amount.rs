//! # Amount Handlers
//!
//! Handlers for the main amount field and the quick-convert card fields.

use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Store the main amount text as typed.
pub(crate) fn edit_amount(state: &Arc<RwLock<AppState>>, text: String) {
    state.write().amount = text;
}

/// Store a quick-convert card's amount text. Returns `false` for an unknown card.
pub(crate) fn edit_quick_amount(state: &Arc<RwLock<AppState>>, index: usize, text: String) -> bool {
    let mut state = state.write();
    match state.quick_cards.get_mut(index) {
        Some(card) => {
            card.amount = text;
            true
        }
        None => false,
    }
}
