//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, async tasks and application
//! state for the currency dashboard.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - dispatch(Command) - applies user gestures         │   │
//! │  │  - on_tick() - drains events, fires auto-refresh     │   │
//! │  │  - selectors: from / to / base                       │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Lock held briefly for minimal duration            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - rates: currency list, latest snapshot                    │
//! │  - conversion: main result, quick-convert cards             │
//! │  - historical: 7D / 30D comparison cards                    │
//! │  - debounce timers                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//!
//! - Debounced edits only act after their quiet window, on the value current at
//!   that moment.
//! - Conversion, quick-card and refresh results carry the sequence number issued
//!   when their request started. Results older than the newest request for the
//!   same target are dropped, so a slow response never overwrites a newer one.
//!   An overtaken refresh still runs its follow-ups (view reloads, toast); only
//!   its snapshot is discarded.
//! - `is_loading` is advisory: only the auto-refresh timer checks it.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state and view models
//! - [`command`]: User commands
//! - [`events`]: Async task results
//! - [`selector`]: Currency selector state machine
//! - [`debounce`]: Quiet-window timers

pub mod command;
pub mod debounce;
mod event_handler;
pub mod events;
mod handlers;
pub mod selector;
pub mod state;
mod tasks;


pub use command::{Command, SelectorId};
pub use debounce::{DebounceKey, DebounceTicket, Debouncer};
pub use events::{AppEvent, RefreshOrigin};
pub use selector::{CurrencySelector, OptionGroup, SelectorInput};
pub use state::*;

use crate::config::DashboardConfig;
use crate::core::service::RateService;
use crate::services::api::RateClient;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::CurrencyCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Main application orchestrator.
///
/// Owns the shared state, the three currency selectors, the debouncer and the
/// event channel. All mutation happens on the thread calling [`App::dispatch`]
/// and [`App::on_tick`]; background tasks only report through events.
///
/// # Example
///
/// ```rust,no_run
/// use dashboard::app::{App, Command};
/// use dashboard::config::DashboardConfig;
///
/// let _rt = dashboard::utils::runtime::TOKIO_RT.enter();
/// let mut app = App::new(DashboardConfig::default());
/// app.load_initial_data();
///
/// // In the egui update loop:
/// app.on_tick();
/// app.dispatch(Command::EditAmount("250".to_string()));
/// let state = app.state.read();
/// println!("{:?}", state.conversion);
/// ```
pub struct App {
    /// Shared application state; hold locks for minimal duration.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    service: Arc<dyn RateService>,

    from_selector: CurrencySelector,
    to_selector: CurrencySelector,
    base_selector: CurrencySelector,

    debouncer: Debouncer,

    /// `None` disables auto-refresh
    auto_refresh_interval: Option<Duration>,
    next_auto_refresh: Instant,
}

impl App {
    /// Create the application with the HTTP rate client.
    pub fn new(config: DashboardConfig) -> Self {
        let service: Arc<dyn RateService> = Arc::new(RateClient::new(&config));
        Self::with_service(config, service)
    }

    /// Create the application with an injected rate service.
    pub fn with_service(config: DashboardConfig, service: Arc<dyn RateService>) -> Self {
        let state = AppState::new(&config);
        let (event_tx, event_rx) = unbounded();

        let from_selector = CurrencySelector::new(Vec::new(), state.from_currency.clone(), |code| {
            Command::SelectCurrency(SelectorId::From, code)
        });
        let to_selector = CurrencySelector::new(Vec::new(), state.to_currency.clone(), |code| {
            Command::SelectCurrency(SelectorId::To, code)
        });
        let base_selector = CurrencySelector::new(Vec::new(), state.base_currency.clone(), |code| {
            Command::SelectCurrency(SelectorId::Base, code)
        });

        let auto_refresh_interval = config.auto_refresh_interval();
        let next_auto_refresh = Instant::now() + auto_refresh_interval.unwrap_or_default();

        tracing::info!(
            api = %config.api_base_url,
            debounce_ms = config.debounce_ms,
            auto_refresh_secs = config.auto_refresh_secs,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            service,
            from_selector,
            to_selector,
            base_selector,
            debouncer: Debouncer::new(config.debounce()),
            auto_refresh_interval,
            next_auto_refresh,
        }
    }

    /// Start the startup chain: currency list, then rates, then every view.
    ///
    /// Must be called within a tokio runtime.
    pub fn load_initial_data(&mut self) {
        tasks::rates::fetch_currencies(self.state.clone(), self.service.clone(), self.event_tx.clone());
    }

    /// Called every frame: process async results, then fire auto-refresh if due.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.check_auto_refresh();
    }

    /// Apply one user command.
    pub fn dispatch(&mut self, command: Command) {
        tracing::trace!(?command, "Dispatching command");

        match command {
            Command::Selector(id, input) => {
                if let Some(follow_up) = self.selector_mut(id).handle(input) {
                    self.dispatch(follow_up);
                }
            }
            Command::SelectCurrency(id, code) => self.select_currency(id, code),
            Command::SwapPair => {
                handlers::currency::swap_pair(&self.state);
                self.sync_selector(SelectorId::From);
                self.sync_selector(SelectorId::To);
                self.perform_conversion();
            }
            Command::SetPair { from, to } => {
                handlers::currency::set_pair(&self.state, from, to);
                self.sync_selector(SelectorId::From);
                self.sync_selector(SelectorId::To);
                self.perform_conversion();
            }
            Command::EditAmount(text) => {
                handlers::amount::edit_amount(&self.state, text);
                self.debouncer.schedule(DebounceKey::Amount, self.event_tx.clone());
            }
            Command::EditQuickAmount { index, amount } => {
                if handlers::amount::edit_quick_amount(&self.state, index, amount) {
                    self.debouncer.schedule(DebounceKey::QuickAmount(index), self.event_tx.clone());
                }
            }
            Command::RequestRefresh => self.request_refresh(),
        }
    }

    pub fn selector(&self, id: SelectorId) -> &CurrencySelector {
        match id {
            SelectorId::From => &self.from_selector,
            SelectorId::To => &self.to_selector,
            SelectorId::Base => &self.base_selector,
        }
    }

    pub fn selector_mut(&mut self, id: SelectorId) -> &mut CurrencySelector {
        match id {
            SelectorId::From => &mut self.from_selector,
            SelectorId::To => &mut self.to_selector,
            SelectorId::Base => &mut self.base_selector,
        }
    }

    /// Take the toasts queued since the last call.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// Run the auto-refresh cycle now, unless a load is already in progress.
    pub fn auto_refresh(&mut self) {
        if self.state.read().is_loading {
            tracing::debug!("Auto-refresh skipped: load in progress");
            return;
        }
        tracing::debug!("Auto-refresh");
        self.refresh_rates(RefreshOrigin::Auto);
    }

    fn check_auto_refresh(&mut self) {
        let Some(interval) = self.auto_refresh_interval else {
            return;
        };
        let now = Instant::now();
        if now < self.next_auto_refresh {
            return;
        }
        self.next_auto_refresh = now + interval;
        self.auto_refresh();
    }

    fn select_currency(&mut self, id: SelectorId, code: CurrencyCode) {
        let changed = handlers::currency::select_currency(&self.state, id, code);
        self.sync_selector(id);
        if !changed {
            return;
        }

        match id {
            SelectorId::From | SelectorId::To => self.perform_conversion(),
            SelectorId::Base => self.refresh_rates(RefreshOrigin::BaseChange),
        }
    }

    fn request_refresh(&mut self) {
        if self.state.read().currency_universe.is_empty() {
            tracing::info!("Manual refresh without currency list, restarting startup");
            self.load_initial_data();
        } else {
            self.refresh_rates(RefreshOrigin::Manual);
        }
    }

    /// Mirror the state's currency universe and selection into one selector.
    fn sync_selector(&mut self, id: SelectorId) {
        let (universe, selected) = {
            let state = self.state.read();
            (state.currency_universe.clone(), handlers::currency::selected_for(&state, id))
        };
        self.selector_mut(id).set_options(universe, selected);
    }

    fn sync_all_selectors(&mut self) {
        for id in SelectorId::ALL {
            self.sync_selector(id);
        }
    }

    fn refresh_rates(&self, origin: RefreshOrigin) {
        tasks::rates::refresh_rates(self.state.clone(), self.service.clone(), self.event_tx.clone(), origin);
    }

    fn perform_conversion(&self) {
        tasks::conversion::perform_conversion(self.state.clone(), self.service.clone(), self.event_tx.clone());
    }

    fn refresh_quick_card(&self, index: usize) {
        tasks::conversion::refresh_quick_card(self.state.clone(), self.service.clone(), self.event_tx.clone(), index);
    }

    fn refresh_all_views(&self) {
        self.perform_conversion();
        tasks::conversion::refresh_all_quick_cards(self.state.clone(), self.service.clone(), self.event_tx.clone());
        tasks::historical::load_historical_cards(self.state.clone(), self.service.clone(), self.event_tx.clone());
    }
}
