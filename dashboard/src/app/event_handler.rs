//! # Event Handler
//!
//! Applies async task results to the application state.
//!
//! Each handler takes the write lock for the duration of its own update only and
//! releases it before spawning follow-up tasks.

use crate::app::debounce::{DebounceKey, DebounceTicket};
use crate::app::events::{AppEvent, RefreshOrigin};
use crate::app::state::{ConversionRequest, ConversionView, HistoricalRates, Notification, QuickResult};
use crate::app::App;
use crate::services::api::{ConversionResult, RateSnapshot};
use chrono::Local;
use shared::CurrencyCode;

impl App {
    /// Handle one async event result.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CurrenciesLoaded(result) => self.handle_currencies_loaded(result),
            AppEvent::RatesLoaded { seq, origin, result } => self.handle_rates_loaded(seq, origin, result),
            AppEvent::ConversionDone { seq, request, result } => self.handle_conversion_done(seq, request, result),
            AppEvent::QuickConversionDone { index, seq, result } => self.handle_quick_conversion_done(index, seq, result),
            AppEvent::HistoricalCardLoaded { index, rates } => self.handle_historical_card_loaded(index, rates),
            AppEvent::DebounceElapsed(ticket) => self.handle_debounce_elapsed(ticket),
        }
    }

    fn handle_currencies_loaded(&mut self, result: Result<Vec<CurrencyCode>, String>) {
        match result {
            Ok(codes) => {
                tracing::info!(event = "CurrenciesLoaded", count = codes.len(), "Populating selectors");
                self.state.write().currency_universe = codes;
                self.sync_all_selectors();
                self.refresh_rates(RefreshOrigin::Startup);
            }
            Err(e) => {
                tracing::error!(event = "CurrenciesLoaded", error = %e, "Startup aborted");
                let mut state = self.state.write();
                state.is_loading = false;
                state.notify(Notification::error("Failed to load currencies"));
            }
        }
    }

    fn handle_rates_loaded(&mut self, seq: u64, origin: RefreshOrigin, result: Result<RateSnapshot, String>) {
        // A superseded result never replaces the snapshot or releases the loading
        // flag, but its origin's follow-ups still run.
        {
            let mut state = self.state.write();
            let superseded = seq != state.refresh_seq;
            if !superseded {
                state.is_loading = false;
            }

            match result {
                Ok(snapshot) => {
                    if superseded {
                        tracing::debug!(seq, newest = state.refresh_seq, ?origin, "Dropping superseded rates snapshot");
                    } else {
                        tracing::info!(base = %snapshot.base(), rate_count = snapshot.len(), ?origin, "Rates refreshed");
                        state.latest_snapshot = Some(snapshot);
                    }
                    if origin == RefreshOrigin::Manual {
                        state.notify(Notification::success("Rates updated successfully!"));
                    }
                }
                Err(e) => {
                    if origin.surfaces_errors() {
                        tracing::error!(error = %e, ?origin, "Rates refresh failed, keeping previous snapshot");
                        state.notify(Notification::error("Failed to fetch exchange rates"));
                    } else {
                        tracing::warn!(error = %e, ?origin, "Rates refresh failed, keeping previous snapshot");
                    }
                    return;
                }
            }
        }

        match origin {
            RefreshOrigin::Startup | RefreshOrigin::Manual => self.refresh_all_views(),
            RefreshOrigin::Auto => self.perform_conversion(),
            RefreshOrigin::BaseChange => {}
        }
    }

    fn handle_conversion_done(&mut self, seq: u64, request: ConversionRequest, result: Result<ConversionResult, String>) {
        let mut state = self.state.write();
        if seq != state.conversion_seq {
            tracing::debug!(seq, newest = state.conversion_seq, "Discarding superseded conversion");
            return;
        }

        match result {
            Ok(result) => {
                state.conversion = ConversionView::Ready { request, result };
                state.last_updated = Some(Local::now());
            }
            Err(e) => {
                tracing::warn!(from = %request.from, to = %request.to, error = %e, "Conversion failed");
                state.conversion = ConversionView::Failed(e);
            }
        }
    }

    fn handle_quick_conversion_done(&mut self, index: usize, seq: u64, result: Result<ConversionResult, String>) {
        let mut state = self.state.write();
        let Some(card) = state.quick_cards.get_mut(index) else {
            return;
        };
        if seq != card.seq {
            tracing::debug!(index, seq, newest = card.seq, "Discarding superseded quick conversion");
            return;
        }

        card.result = match result {
            Ok(result) => QuickResult::Value(result.converted_amount),
            Err(e) => {
                tracing::warn!(pair = %format!("{}/{}", card.pair.from, card.pair.to), error = %e, "Quick conversion failed");
                QuickResult::Failed
            }
        };
    }

    fn handle_historical_card_loaded(&mut self, index: usize, rates: HistoricalRates) {
        if let Some(card) = self.state.write().historical_cards.get_mut(index) {
            card.rates = Some(rates);
        }
    }

    fn handle_debounce_elapsed(&mut self, ticket: DebounceTicket) {
        if !self.debouncer.fire(ticket) {
            return;
        }

        match ticket.key {
            DebounceKey::Amount => self.perform_conversion(),
            DebounceKey::QuickAmount(index) => self.refresh_quick_card(index),
        }
    }
}
