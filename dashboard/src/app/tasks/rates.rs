//! # Rates Tasks
//!
//! Async tasks for the currency list and the latest rates snapshot.

use super::guarded;
use crate::app::events::{AppEvent, RefreshOrigin};
use crate::app::state::AppState;
use crate::core::service::RateService;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::currency::sort_universe;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the provider's currency list.
///
/// Raises the loading flag for the duration of the startup chain; it is released
/// by the failure handler or by the refresh that follows a successful load.
pub(crate) fn fetch_currencies(state: Arc<RwLock<AppState>>, service: Arc<dyn RateService>, event_tx: Sender<AppEvent>) {
    state.write().is_loading = true;

    spawn(async move {
        let result = guarded(async move {
            service
                .list_currencies()
                .await
                .map(|list| sort_universe(list.into_keys().collect()))
                .map_err(|e| e.to_string())
        })
        .await;

        match &result {
            Ok(codes) => tracing::info!(count = codes.len(), "Currency list loaded"),
            Err(e) => tracing::error!(error = %e, "Failed to load currency list"),
        }
        let _ = event_tx.send(AppEvent::CurrenciesLoaded(result)).await;
    });
}

/// Refresh the rates snapshot for the current base.
///
/// Issues a new refresh sequence number; only the result carrying the newest
/// number is applied and clears the loading flag. A result event is sent even
/// when the service panics.
pub(crate) fn refresh_rates(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    origin: RefreshOrigin,
) {
    let (base, seq) = {
        let mut state = state.write();
        state.is_loading = true;
        state.refresh_seq += 1;
        (state.base_currency.clone(), state.refresh_seq)
    };

    tracing::debug!(base = %base, seq, ?origin, "Refreshing rates");

    spawn(async move {
        let result = guarded(async move { service.latest_rates(&base).await.map_err(|e| e.to_string()) }).await;
        let _ = event_tx.send(AppEvent::RatesLoaded { seq, origin, result }).await;
    });
}
