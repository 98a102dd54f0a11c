//! # User Commands
//!
//! Typed user gestures applied by [`crate::app::App::dispatch`].
//!
//! Every interaction the UI can produce is one of these values, so ordering,
//! debouncing and loading rules are testable without a window.

use crate::app::selector::SelectorInput;
use shared::CurrencyCode;

/// Which currency picker a selector-level command is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorId {
    /// Converter "from" currency
    From,
    /// Converter "to" currency
    To,
    /// Base currency of the rates grid
    Base,
}

impl SelectorId {
    pub const ALL: [SelectorId; 3] = [SelectorId::From, SelectorId::To, SelectorId::Base];

    /// Stable id salt for UI widgets.
    pub fn key(self) -> &'static str {
        match self {
            SelectorId::From => "selector-from",
            SelectorId::To => "selector-to",
            SelectorId::Base => "selector-base",
        }
    }
}

/// User gesture, produced by the UI and applied by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Raw interaction with one selector (open, type, arrows, click...)
    Selector(SelectorId, SelectorInput),
    /// A selector confirmed a new value
    SelectCurrency(SelectorId, CurrencyCode),
    /// Exchange the converter's from/to currencies
    SwapPair,
    /// Set both converter currencies at once (rate-card click)
    SetPair { from: CurrencyCode, to: CurrencyCode },
    /// Main amount field edited
    EditAmount(String),
    /// Quick-convert card amount edited
    EditQuickAmount { index: usize, amount: String },
    /// Manual refresh (button or Ctrl+R)
    RequestRefresh,
}
