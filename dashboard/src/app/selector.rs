//! # Currency Selector
//!
//! Searchable, grouped, keyboard-navigable currency picker, modelled as a state
//! machine with two states:
//!
//! ```text
//!            open() / Toggle
//!   Closed ───────────────────▶ Open ──┐ TypeChar / SetSearch / Backspace
//!     ▲                          │  ▲   │ ArrowUp / ArrowDown / Hover
//!     │  close() / Escape /      │  └───┘
//!     │  ClickOutside / Toggle   │
//!     └──────────────────────────┤
//!     │                          │ Enter (with highlight) / Click
//!     └──── select_option ◀──────┘   → on_change(code) fires once
//! ```
//!
//! The selector owns only its interaction state and a *copy* of the selected
//! value. It reports confirmed selections by returning the [`Command`] built by
//! its change handler; the three dashboard instances differ only in that handler.
//!
//! ## Invariants
//!
//! - `highlighted_index` is `None` or a valid index into [`CurrencySelector::filtered`]
//! - every change of the filter clears the highlight
//! - nothing but a user confirmation (Enter with highlight, Click) calls the handler

use crate::app::command::Command;
use shared::currency::{lookup, CurrencyCode, CurrencyMeta, Priority};
use std::fmt;

/// Maps a confirmed selection to the command the dispatcher should apply.
pub type ChangeHandler = Box<dyn Fn(CurrencyCode) -> Command + Send + Sync>;

/// Interaction applied to a selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorInput {
    Toggle,
    Open,
    Close,
    /// One character typed into the search box
    TypeChar(char),
    /// Backspace in the search box
    Backspace,
    /// Search box content replaced wholesale
    SetSearch(String),
    ArrowDown,
    ArrowUp,
    /// Confirm the highlighted option
    Enter,
    Escape,
    /// Pointer interaction outside the selector's region
    ClickOutside,
    /// Pointer over an option
    Hover(CurrencyCode),
    /// Option clicked
    Click(CurrencyCode),
}

/// One non-empty priority bucket of the filtered option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub priority: Priority,
    pub options: Vec<CurrencyCode>,
}

impl OptionGroup {
    pub fn label(&self) -> &'static str {
        self.priority.label()
    }
}

/// Filter `universe` by `term` and partition the matches into priority buckets.
///
/// Matching is a case-insensitive substring test against `"<code> <name>"`.
/// Buckets come out in tier order (1, 2, 3, 9), empty buckets are omitted, and
/// the universe's relative order is preserved inside each bucket.
pub fn filter_and_group(universe: &[CurrencyCode], term: &str) -> Vec<OptionGroup> {
    let needle = term.to_lowercase();
    let mut buckets: [Vec<CurrencyCode>; 4] = Default::default();

    for code in universe {
        let meta = lookup(code);
        if !meta.search_text().contains(&needle) {
            continue;
        }
        let slot = Priority::ALL
            .iter()
            .position(|p| *p == meta.priority)
            .unwrap_or(Priority::ALL.len() - 1);
        buckets[slot].push(code.clone());
    }

    Priority::ALL
        .iter()
        .zip(buckets)
        .filter(|(_, options)| !options.is_empty())
        .map(|(priority, options)| OptionGroup {
            priority: *priority,
            options,
        })
        .collect()
}

/// Searchable currency picker.
pub struct CurrencySelector {
    options: Vec<CurrencyCode>,
    selected: CurrencyCode,
    is_open: bool,
    search_term: String,
    highlighted: Option<usize>,
    groups: Vec<OptionGroup>,
    /// Flattened `groups`, in rendering order; the index space of `highlighted`
    filtered: Vec<CurrencyCode>,
    focus_requested: bool,
    on_change: ChangeHandler,
}

impl fmt::Debug for CurrencySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencySelector")
            .field("selected", &self.selected)
            .field("is_open", &self.is_open)
            .field("search_term", &self.search_term)
            .field("highlighted", &self.highlighted)
            .field("options", &self.options.len())
            .finish()
    }
}

impl CurrencySelector {
    /// Create a closed selector.
    ///
    /// An empty `options` list is valid: the selector then renders its
    /// "no currencies found" state instead of a list.
    pub fn new(
        options: Vec<CurrencyCode>,
        selected: CurrencyCode,
        on_change: impl Fn(CurrencyCode) -> Command + Send + Sync + 'static,
    ) -> Self {
        let mut selector = Self {
            options,
            selected,
            is_open: false,
            search_term: String::new(),
            highlighted: None,
            groups: Vec::new(),
            filtered: Vec::new(),
            focus_requested: false,
            on_change: Box::new(on_change),
        };
        selector.refilter();
        selector
    }

    /// Replace the option universe and the current selection.
    ///
    /// `selected` need not be in `options`. Never invokes the change handler.
    pub fn set_options(&mut self, options: Vec<CurrencyCode>, selected: CurrencyCode) {
        self.options = options;
        self.selected = selected;
        self.refilter();
    }

    /// Open the popup with a cleared search over the full universe.
    pub fn open(&mut self) {
        self.is_open = true;
        self.search_term.clear();
        self.refilter();
        self.focus_requested = true;
    }

    /// Close the popup. The selection is left untouched.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Apply one interaction. Returns the change handler's command when the
    /// interaction confirmed a selection.
    pub fn handle(&mut self, input: SelectorInput) -> Option<Command> {
        match input {
            SelectorInput::Toggle => self.toggle(),
            SelectorInput::Open => self.open(),
            SelectorInput::Close | SelectorInput::Escape | SelectorInput::ClickOutside => self.close(),
            _ if !self.is_open => {}
            SelectorInput::TypeChar(c) => {
                self.search_term.push(c);
                self.refilter();
            }
            SelectorInput::Backspace => {
                if self.search_term.pop().is_some() {
                    self.refilter();
                }
            }
            SelectorInput::SetSearch(term) => {
                if term != self.search_term {
                    self.search_term = term;
                    self.refilter();
                }
            }
            SelectorInput::ArrowDown => self.navigate(Direction::Down),
            SelectorInput::ArrowUp => self.navigate(Direction::Up),
            SelectorInput::Enter => {
                if let Some(code) = self.highlighted_code().cloned() {
                    return Some(self.select_option(code));
                }
            }
            SelectorInput::Hover(code) => {
                if let Some(idx) = self.filtered.iter().position(|c| *c == code) {
                    self.highlighted = Some(idx);
                }
            }
            SelectorInput::Click(code) => return Some(self.select_option(code)),
        }
        None
    }

    fn select_option(&mut self, code: CurrencyCode) -> Command {
        self.selected = code.clone();
        self.close();
        (self.on_change)(code)
    }

    fn navigate(&mut self, direction: Direction) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match (self.highlighted, direction) {
            (None, Direction::Down) => 0,
            (None, Direction::Up) => len - 1,
            (Some(i), Direction::Down) => (i + 1) % len,
            (Some(i), Direction::Up) => (i + len - 1) % len,
        });
    }

    fn refilter(&mut self) {
        self.groups = filter_and_group(&self.options, &self.search_term);
        self.filtered = self.groups.iter().flat_map(|g| g.options.iter().cloned()).collect();
        self.highlighted = None;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_code(&self) -> Option<&CurrencyCode> {
        self.highlighted.and_then(|i| self.filtered.get(i))
    }

    pub fn selected(&self) -> &CurrencyCode {
        &self.selected
    }

    pub fn options(&self) -> &[CurrencyCode] {
        &self.options
    }

    /// Filtered options grouped by priority, in rendering order.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Filtered options flattened in rendering order.
    pub fn filtered(&self) -> &[CurrencyCode] {
        &self.filtered
    }

    /// Metadata for the closed-state display (fallback for unknown codes).
    pub fn display_meta(&self) -> CurrencyMeta {
        lookup(&self.selected)
    }

    /// True when the current filter matches nothing ("No currencies found").
    pub fn is_empty_result(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Consume a pending request to focus the search box.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::SelectorId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn codes(list: &[&str]) -> Vec<CurrencyCode> {
        list.iter().map(|c| CurrencyCode::from(*c)).collect()
    }

    fn counting_selector(options: &[&str], selected: &str) -> (CurrencySelector, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let selector = CurrencySelector::new(codes(options), CurrencyCode::from(selected), move |code| {
            counter.fetch_add(1, Ordering::SeqCst);
            Command::SelectCurrency(SelectorId::To, code)
        });
        (selector, calls)
    }

    #[test]
    fn test_open_shows_full_universe_unhighlighted() {
        let (mut selector, _) = counting_selector(&["USD", "EUR", "TRY"], "USD");
        selector.open();

        assert!(selector.is_open());
        assert_eq!(selector.highlighted_index(), None);
        assert_eq!(selector.filtered(), codes(&["USD", "EUR", "TRY"]).as_slice());
        assert_eq!(selector.groups().len(), 1);
        assert_eq!(selector.groups()[0].label(), "Major Currencies");
        assert!(selector.take_focus_request());
        assert!(!selector.take_focus_request());
    }

    #[test]
    fn test_type_navigate_and_enter_selects_once() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR", "TRY"], "USD");
        selector.open();
        selector.handle(SelectorInput::TypeChar('t'));
        selector.handle(SelectorInput::TypeChar('r'));
        assert_eq!(selector.filtered(), codes(&["TRY"]).as_slice());
        assert_eq!(selector.highlighted_index(), None);

        assert!(selector.handle(SelectorInput::ArrowDown).is_none());
        assert_eq!(selector.highlighted_index(), Some(0));

        let command = selector.handle(SelectorInput::Enter);
        assert_eq!(command, Some(Command::SelectCurrency(SelectorId::To, CurrencyCode::from("TRY"))));
        assert!(!selector.is_open());
        assert_eq!(selector.selected(), &CurrencyCode::from("TRY"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR"], "USD");
        selector.open();

        assert!(selector.handle(SelectorInput::Enter).is_none());
        assert!(selector.is_open());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let (mut selector, _) = counting_selector(&["USD", "EUR", "TRY"], "USD");
        selector.open();

        selector.handle(SelectorInput::ArrowUp);
        assert_eq!(selector.highlighted_index(), Some(2));
        selector.handle(SelectorInput::ArrowDown);
        assert_eq!(selector.highlighted_index(), Some(0));
        selector.handle(SelectorInput::ArrowUp);
        assert_eq!(selector.highlighted_index(), Some(2));
        assert_eq!(selector.highlighted_code(), Some(&CurrencyCode::from("TRY")));
    }

    #[test]
    fn test_filter_change_clears_highlight() {
        let (mut selector, _) = counting_selector(&["USD", "EUR", "TRY", "AUD"], "USD");
        selector.open();
        selector.handle(SelectorInput::ArrowUp);
        assert_eq!(selector.highlighted_index(), Some(3));

        selector.handle(SelectorInput::SetSearch("dollar".to_string()));
        assert_eq!(selector.highlighted_index(), None);
        assert_eq!(selector.filtered(), codes(&["USD", "AUD"]).as_slice());

        selector.handle(SelectorInput::ArrowDown);
        selector.handle(SelectorInput::Backspace);
        assert_eq!(selector.highlighted_index(), None);
    }

    #[test]
    fn test_no_results_has_no_highlight() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR"], "USD");
        selector.open();
        selector.handle(SelectorInput::SetSearch("zzz".to_string()));

        assert!(selector.is_empty_result());
        assert!(selector.groups().is_empty());
        selector.handle(SelectorInput::ArrowDown);
        assert_eq!(selector.highlighted_index(), None);
        assert!(selector.handle(SelectorInput::Enter).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_escape_and_click_outside_close_without_selecting() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR"], "USD");
        selector.open();
        selector.handle(SelectorInput::ArrowDown);
        selector.handle(SelectorInput::Escape);
        assert!(!selector.is_open());

        selector.open();
        selector.handle(SelectorInput::ArrowDown);
        selector.handle(SelectorInput::ClickOutside);
        assert!(!selector.is_open());

        assert_eq!(selector.selected(), &CurrencyCode::from("USD"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_hover_highlights_and_click_ignores_highlight() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR", "TRY"], "USD");
        selector.open();
        selector.handle(SelectorInput::Hover(CurrencyCode::from("EUR")));
        assert_eq!(selector.highlighted_index(), Some(1));

        let command = selector.handle(SelectorInput::Click(CurrencyCode::from("TRY")));
        assert_eq!(command, Some(Command::SelectCurrency(SelectorId::To, CurrencyCode::from("TRY"))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reopen_resets_search_and_highlight() {
        let (mut selector, _) = counting_selector(&["USD", "EUR", "TRY"], "USD");
        selector.open();
        selector.handle(SelectorInput::TypeChar('e'));
        selector.handle(SelectorInput::ArrowDown);
        selector.close();

        selector.handle(SelectorInput::Toggle);
        assert!(selector.is_open());
        assert_eq!(selector.search_term(), "");
        assert_eq!(selector.highlighted_index(), None);
        assert_eq!(selector.filtered().len(), 3);
    }

    #[test]
    fn test_keyboard_ignored_while_closed() {
        let (mut selector, calls) = counting_selector(&["USD", "EUR"], "USD");
        selector.handle(SelectorInput::TypeChar('e'));
        selector.handle(SelectorInput::ArrowDown);
        assert!(selector.handle(SelectorInput::Enter).is_none());
        assert!(selector.handle(SelectorInput::Click(CurrencyCode::from("EUR"))).is_none());

        assert_eq!(selector.search_term(), "");
        assert_eq!(selector.highlighted_index(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_options_never_fires_handler() {
        let (mut selector, calls) = counting_selector(&[], "USD");
        assert!(selector.is_empty_result());

        selector.set_options(codes(&["USD", "EUR"]), CurrencyCode::from("EUR"));
        assert_eq!(selector.selected(), &CurrencyCode::from("EUR"));
        assert_eq!(selector.filtered().len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_selection_outside_universe_uses_fallback_meta() {
        let (selector, _) = counting_selector(&["USD", "EUR"], "XAU");
        let meta = selector.display_meta();
        assert_eq!(meta.name, "XAU");
        assert_eq!(meta.priority, Priority::Other);
    }

    #[test]
    fn test_grouping_orders_buckets_and_keeps_relative_order() {
        let universe = codes(&["MXN", "XAU", "USD", "AUD", "EUR", "BRL"]);
        let groups = filter_and_group(&universe, "");
        let shape: Vec<(Priority, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.priority, g.options.iter().map(|c| c.as_str()).collect()))
            .collect();

        assert_eq!(
            shape,
            vec![
                (Priority::Major, vec!["USD", "EUR"]),
                (Priority::Secondary, vec!["AUD"]),
                (Priority::Emerging, vec!["MXN", "BRL"]),
                (Priority::Other, vec!["XAU"]),
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_on_code_and_name() {
        let universe = codes(&["USD", "EUR", "GBP"]);
        let by_name = filter_and_group(&universe, "POUND");
        assert_eq!(by_name[0].options, codes(&["GBP"]));

        let by_code = filter_and_group(&universe, "eU");
        assert_eq!(by_code[0].options, codes(&["EUR"]));
    }
}
