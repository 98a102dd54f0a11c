//! # Currency Directory
//!
//! Static lookup table from currency code to display metadata and grouping tier.
//!
//! The directory is read-only reference data: every code resolves to exactly one
//! [`CurrencyMeta`], and codes the table does not know resolve to a synthetic
//! fallback in the [`Priority::Other`] tier. It never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short uppercase currency identifier such as `USD`.
///
/// Treated as an opaque key; no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Grouping tier used to order and group currencies in selection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Major currencies (tier 1)
    Major,
    /// Secondary currencies (tier 2)
    Secondary,
    /// Emerging markets (tier 3)
    Emerging,
    /// Unclassified or unknown (tier 9)
    Other,
}

impl Priority {
    /// All buckets in rendering order.
    pub const ALL: [Priority; 4] = [
        Priority::Major,
        Priority::Secondary,
        Priority::Emerging,
        Priority::Other,
    ];

    /// Numeric tier (1, 2, 3 or 9).
    pub fn rank(self) -> u8 {
        match self {
            Priority::Major => 1,
            Priority::Secondary => 2,
            Priority::Emerging => 3,
            Priority::Other => 9,
        }
    }

    /// Map a numeric tier back to a bucket. Anything unmapped lands in `Other`.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            1 => Priority::Major,
            2 => Priority::Secondary,
            3 => Priority::Emerging,
            _ => Priority::Other,
        }
    }

    /// Group heading shown above the bucket in selection lists.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Major => "Major Currencies",
            Priority::Secondary => "Secondary Currencies",
            Priority::Emerging => "Emerging Markets",
            Priority::Other => "Other Currencies",
        }
    }
}

/// Display metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMeta {
    pub code: CurrencyCode,
    pub name: String,
    pub symbol: String,
    pub flag: String,
    pub priority: Priority,
}

impl CurrencyMeta {
    /// Text the selector search matches against: `"<code> <name>"`, lowercased.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.code, self.name).to_lowercase()
    }
}

const FALLBACK_FLAG: &str = "💰";

/// code, name, symbol, flag, tier
const DIRECTORY: &[(&str, &str, &str, &str, u8)] = &[
    ("USD", "US Dollar", "$", "🇺🇸", 1),
    ("EUR", "Euro", "€", "🇪🇺", 1),
    ("GBP", "British Pound", "£", "🇬🇧", 1),
    ("TRY", "Turkish Lira", "₺", "🇹🇷", 1),
    ("JPY", "Japanese Yen", "¥", "🇯🇵", 1),
    ("CHF", "Swiss Franc", "Fr", "🇨🇭", 1),
    ("CNY", "Chinese Yuan", "¥", "🇨🇳", 1),
    ("AUD", "Australian Dollar", "A$", "🇦🇺", 2),
    ("CAD", "Canadian Dollar", "C$", "🇨🇦", 2),
    ("INR", "Indian Rupee", "₹", "🇮🇳", 2),
    ("KRW", "South Korean Won", "₩", "🇰🇷", 2),
    ("SGD", "Singapore Dollar", "S$", "🇸🇬", 2),
    ("HKD", "Hong Kong Dollar", "HK$", "🇭🇰", 2),
    ("NZD", "New Zealand Dollar", "NZ$", "🇳🇿", 2),
    ("SEK", "Swedish Krona", "kr", "🇸🇪", 2),
    ("NOK", "Norwegian Krone", "kr", "🇳🇴", 2),
    ("DKK", "Danish Krone", "kr", "🇩🇰", 2),
    ("MXN", "Mexican Peso", "$", "🇲🇽", 3),
    ("ZAR", "South African Rand", "R", "🇿🇦", 3),
    ("BRL", "Brazilian Real", "R$", "🇧🇷", 3),
    ("RUB", "Russian Ruble", "₽", "🇷🇺", 3),
    ("PLN", "Polish Zloty", "zł", "🇵🇱", 3),
    ("THB", "Thai Baht", "฿", "🇹🇭", 3),
    ("IDR", "Indonesian Rupiah", "Rp", "🇮🇩", 3),
    ("MYR", "Malaysian Ringgit", "RM", "🇲🇾", 3),
    ("PHP", "Philippine Peso", "₱", "🇵🇭", 3),
    ("CZK", "Czech Koruna", "Kč", "🇨🇿", 3),
    ("HUF", "Hungarian Forint", "Ft", "🇭🇺", 3),
    ("ILS", "Israeli Shekel", "₪", "🇮🇱", 3),
    ("RON", "Romanian Leu", "lei", "🇷🇴", 3),
    ("BGN", "Bulgarian Lev", "лв", "🇧🇬", 3),
    ("ISK", "Icelandic Krona", "kr", "🇮🇸", 3),
    ("HRK", "Croatian Kuna", "kn", "🇭🇷", 3),
];

/// Resolve a code to its metadata, falling back to a synthetic `Other` entry.
pub fn lookup(code: &CurrencyCode) -> CurrencyMeta {
    match DIRECTORY.iter().find(|(c, ..)| *c == code.as_str()) {
        Some(&(_, name, symbol, flag, rank)) => CurrencyMeta {
            code: code.clone(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            flag: flag.to_string(),
            priority: Priority::from_rank(rank),
        },
        None => CurrencyMeta {
            code: code.clone(),
            name: code.to_string(),
            symbol: String::new(),
            flag: FALLBACK_FLAG.to_string(),
            priority: Priority::Other,
        },
    }
}

/// Priority tier of a code (fallback `Other`).
pub fn priority_of(code: &CurrencyCode) -> Priority {
    DIRECTORY
        .iter()
        .find(|(c, ..)| *c == code.as_str())
        .map(|&(.., rank)| Priority::from_rank(rank))
        .unwrap_or(Priority::Other)
}

/// Every code the directory knows, in table order.
pub fn known_codes() -> Vec<CurrencyCode> {
    DIRECTORY.iter().map(|(c, ..)| CurrencyCode::from(*c)).collect()
}

/// Order a currency list by priority tier, then alphabetically by code.
pub fn sort_universe(mut codes: Vec<CurrencyCode>) -> Vec<CurrencyCode> {
    codes.sort_by(|a, b| priority_of(a).cmp(&priority_of(b)).then_with(|| a.cmp(b)));
    codes
}

/// An ordered conversion pair shown on the dashboard's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingPair {
    pub from: &'static str,
    pub to: &'static str,
    pub popular: bool,
}

impl TradingPair {
    pub fn from_code(&self) -> CurrencyCode {
        CurrencyCode::from(self.from)
    }

    pub fn to_code(&self) -> CurrencyCode {
        CurrencyCode::from(self.to)
    }
}

pub const TRADING_PAIRS: &[TradingPair] = &[
    TradingPair { from: "USD", to: "TRY", popular: true },
    TradingPair { from: "EUR", to: "TRY", popular: true },
    TradingPair { from: "GBP", to: "TRY", popular: true },
    TradingPair { from: "USD", to: "EUR", popular: true },
    TradingPair { from: "EUR", to: "GBP", popular: true },
    TradingPair { from: "USD", to: "JPY", popular: true },
    TradingPair { from: "EUR", to: "JPY", popular: false },
    TradingPair { from: "GBP", to: "USD", popular: false },
    TradingPair { from: "USD", to: "CHF", popular: false },
    TradingPair { from: "AUD", to: "USD", popular: false },
];

/// Pairs shown as quick-convert cards.
pub fn popular_pairs() -> Vec<TradingPair> {
    TRADING_PAIRS.iter().copied().filter(|p| p.popular).collect()
}

/// Pairs shown as historical comparison cards.
pub fn historical_pairs() -> Vec<TradingPair> {
    TRADING_PAIRS.iter().copied().take(4).collect()
}
