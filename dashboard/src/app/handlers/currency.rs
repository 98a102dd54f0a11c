//! # Currency Handlers
//!
//! Handlers for currency selection, swapping and pair shortcuts.

use crate::app::command::SelectorId;
use crate::app::state::AppState;
use parking_lot::RwLock;
use shared::CurrencyCode;
use std::sync::Arc;

/// Store a confirmed selection. Returns `false` when the value did not change.
pub(crate) fn select_currency(state: &Arc<RwLock<AppState>>, id: SelectorId, code: CurrencyCode) -> bool {
    let mut state = state.write();
    let slot = match id {
        SelectorId::From => &mut state.from_currency,
        SelectorId::To => &mut state.to_currency,
        SelectorId::Base => &mut state.base_currency,
    };
    if *slot == code {
        return false;
    }

    tracing::info!(selector = ?id, from = %slot, to = %code, "Currency selected");
    *slot = code;
    true
}

/// Exchange the converter's currencies.
pub(crate) fn swap_pair(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let state = &mut *state;
    std::mem::swap(&mut state.from_currency, &mut state.to_currency);
    tracing::debug!(from = %state.from_currency, to = %state.to_currency, "Pair swapped");
}

/// Set both converter currencies (rate-card shortcut).
pub(crate) fn set_pair(state: &Arc<RwLock<AppState>>, from: CurrencyCode, to: CurrencyCode) {
    let mut state = state.write();
    tracing::debug!(from = %from, to = %to, "Pair set");
    state.from_currency = from;
    state.to_currency = to;
}

/// Current value of the state field a selector mirrors.
pub(crate) fn selected_for(state: &AppState, id: SelectorId) -> CurrencyCode {
    match id {
        SelectorId::From => state.from_currency.clone(),
        SelectorId::To => state.to_currency.clone(),
        SelectorId::Base => state.base_currency.clone(),
    }
}
