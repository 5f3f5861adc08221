//! Price formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a price the way the storefront shows it: `"$ 10.99"`.
///
/// Always two decimal places, rounded half away from zero.
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("$ {:.2}", rounded)
}
