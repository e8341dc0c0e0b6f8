//! Fixed-point number formatting for display strings.
//!
//! `{:.N}` in Rust rounds exact ties to even; display values here round
//! exact ties away from zero instead, so `0.125` shows as `0.13`.

use crate::columns;

/// Placeholder for a statistic that could not be computed.
pub const MISSING: &str = "—";

/// Format `value` with exactly `places` decimals.
pub fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let value = if is_exact_tie(value, places) {
        // one ulp further from zero, past the tie
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    let text = format!("{value:.places$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Round `value` to `places` decimals, with the same tie rule as [`to_fixed`].
pub fn round_to(value: f64, places: usize) -> f64 {
    to_fixed(value, places).parse().unwrap_or(value)
}

/// Ratio rendered as a percentage with one decimal, e.g. `0.1234` → `12.3%`.
pub fn percent_label(ratio: f64) -> String {
    format!("{}%", to_fixed(ratio * 100.0, 1))
}

/// Display form of a summary statistic for `column`.
///
/// The year column is rounded to a whole number; every other column gets
/// two decimals.
pub fn format_stat(column: &str, value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if columns::is_year(column) => round_half_up(v).to_string(),
        Some(v) => to_fixed(v, 2),
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// True when the exact binary value sits precisely halfway between two
/// `places`-decimal neighbours.
fn is_exact_tie(value: f64, places: usize) -> bool {
    let wide = format!("{:.*}", places + 40, value.abs());
    let Some((_, frac)) = wide.split_once('.') else {
        return false;
    };
    let tail = &frac.as_bytes()[places..];
    tail[0] == b'5' && tail[1..].iter().all(|&b| b == b'0')
}
