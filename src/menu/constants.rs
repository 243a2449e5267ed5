//! Menu prices, held in cents so chained surcharges add up exactly.

/// House Blend base price.
pub const HOUSE_BLEND_CENTS: u32 = 89;

/// Dark Roast base price.
pub const DARK_ROAST_CENTS: u32 = 99;

/// Expresso base price.
pub const EXPRESSO_CENTS: u32 = 199;

/// Decaf base price.
pub const DECAF_CENTS: u32 = 105;

// ─────────────────────────────────────────────────────────────────────────────
// Condiment surcharges
// ─────────────────────────────────────────────────────────────────────────────

pub const SOY_MILK_CENTS: u32 = 15;
pub const WHOLE_MILK_CENTS: u32 = 10;
pub const CHOCOLATE_CENTS: u32 = 20;
pub const WHIPPED_CREAM_CENTS: u32 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Lookup and ordering
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler score for a fuzzy menu match to be accepted.
pub const FUZZY_ACCEPT_THRESHOLD: f64 = 0.85;

/// Minimum score for a candidate to be offered as a suggestion.
pub const FUZZY_SUGGEST_THRESHOLD: f64 = 0.7;

/// Largest normalized length gap between input and alias for a fuzzy match.
pub const FUZZY_MAX_LENGTH_GAP: usize = 2;

/// Default cap on condiments for a surprise order.
pub const DEFAULT_MAX_CONDIMENTS: usize = 3;

/// Upper bound accepted for `surprise --max-condiments`.
pub const SURPRISE_CONDIMENT_LIMIT: u64 = 100;

/// Convert a cent amount to dollars.
#[inline]
pub fn cents_to_dollars(cents: u32) -> f64 {
    f64::from(cents) / 100.0
}
