//! Text rendering of pipeline results and timings.

use crate::pipeline::{PricePair, Strategy};
use std::fmt::Write;

/// Renders a price with at least one fractional digit (`10.0`, `1000000.0`).
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

/// Renders pairs as `[(Product 1, 10.0), (Product 3, 30.0)]`.
#[must_use]
pub fn format_pairs(pairs: &[PricePair]) -> String {
    // ~24 bytes per pair at the default size
    let mut s = String::with_capacity(2 + pairs.len() * 24);
    s.push('[');
    for (i, (name, price)) in pairs.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "({name}, {})", format_price(*price));
    }
    s.push(']');
    s
}

#[must_use]
pub fn result_line(strategy: Strategy, pairs: &[PricePair]) -> String {
    format!("Prices with {}: {}", strategy.label(), format_pairs(pairs))
}

#[must_use]
pub fn timing_line(strategy: Strategy, duration_ms: u64) -> String {
    format!("Processing time with {}: {duration_ms} ms", strategy.label())
}
