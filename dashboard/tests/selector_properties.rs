//! Property-based tests for currency selector filtering and navigation.

use dashboard::app::selector::{filter_and_group, CurrencySelector, SelectorInput};
use dashboard::app::{Command, SelectorId};
use proptest::prelude::*;
use shared::currency::{known_codes, priority_of, CurrencyCode};

/// Directory codes plus a few the directory does not know.
fn universe_pool() -> Vec<CurrencyCode> {
    let mut codes = known_codes();
    codes.extend(["XAU", "QQQ", "ABC"].into_iter().map(CurrencyCode::from));
    codes
}

fn universe() -> impl Strategy<Value = Vec<CurrencyCode>> {
    let pool = universe_pool();
    let len = pool.len();
    prop::sample::subsequence(pool, 0..=len).prop_shuffle()
}

fn input() -> impl Strategy<Value = SelectorInput> {
    prop_oneof![
        Just(SelectorInput::Toggle),
        Just(SelectorInput::Open),
        Just(SelectorInput::Escape),
        Just(SelectorInput::ArrowDown),
        Just(SelectorInput::ArrowUp),
        Just(SelectorInput::Backspace),
        "[a-zA-Z ]".prop_map(|s| SelectorInput::TypeChar(s.chars().next().unwrap_or('a'))),
        "[a-z]{0,3}".prop_map(SelectorInput::SetSearch),
        prop::sample::select(universe_pool()).prop_map(SelectorInput::Hover),
    ]
}

fn flatten(universe: &[CurrencyCode], term: &str) -> Vec<CurrencyCode> {
    filter_and_group(universe, term)
        .into_iter()
        .flat_map(|g| g.options)
        .collect()
}

fn selector_over(options: Vec<CurrencyCode>) -> CurrencySelector {
    CurrencySelector::new(options, CurrencyCode::from("USD"), |code| {
        Command::SelectCurrency(SelectorId::To, code)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Extending the search term never adds matches.
    #[test]
    fn longer_term_narrows_results(
        universe in universe(),
        term in "[a-zA-Z ]{0,3}",
        extra in "[a-zA-Z ]{1,2}",
    ) {
        let wide = flatten(&universe, &term);
        let narrow = flatten(&universe, &format!("{term}{extra}"));
        for code in &narrow {
            prop_assert!(wide.contains(code), "{} matched longer term only", code);
        }
    }

    /// Groups are non-empty, in tier order, and keep the universe's relative order.
    #[test]
    fn groups_follow_tier_and_input_order(universe in universe(), term in "[a-z]{0,2}") {
        let groups = filter_and_group(&universe, &term);

        for pair in groups.windows(2) {
            prop_assert!(pair[0].priority.rank() < pair[1].priority.rank());
        }

        for group in &groups {
            prop_assert!(!group.options.is_empty());

            let positions: Vec<usize> = group
                .options
                .iter()
                .map(|code| universe.iter().position(|c| c == code).unwrap_or(usize::MAX))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            for code in &group.options {
                prop_assert_eq!(priority_of(code), group.priority);
            }
        }
    }

    /// An empty term matches the whole universe.
    #[test]
    fn empty_term_keeps_everything(universe in universe()) {
        let mut all = flatten(&universe, "");
        let mut expected = universe.clone();
        all.sort();
        expected.sort();
        prop_assert_eq!(all, expected);
    }

    /// The highlight always points into the filtered list, whatever the input sequence.
    #[test]
    fn highlight_stays_in_bounds(
        universe in universe(),
        inputs in prop::collection::vec(input(), 0..40),
    ) {
        let mut selector = selector_over(universe);

        for input in inputs {
            let command = selector.handle(input);
            prop_assert!(command.is_none(), "only Enter or Click may select");

            if let Some(index) = selector.highlighted_index() {
                prop_assert!(index < selector.filtered().len());
            }
        }
    }

    /// Enter confirms exactly the highlighted option.
    #[test]
    fn enter_selects_highlighted_option(universe in universe(), downs in 1usize..20) {
        prop_assume!(!universe.is_empty());
        let mut selector = selector_over(universe);
        selector.open();

        for _ in 0..downs {
            selector.handle(SelectorInput::ArrowDown);
        }
        let expected = selector.highlighted_code().cloned();
        prop_assert!(expected.is_some());

        let command = selector.handle(SelectorInput::Enter);
        prop_assert_eq!(
            command,
            expected.clone().map(|code| Command::SelectCurrency(SelectorId::To, code))
        );
        prop_assert!(!selector.is_open());
        prop_assert_eq!(Some(selector.selected().clone()), expected);
    }
}
