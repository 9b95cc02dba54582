use super::*;
use crate::Money;

/// Format to two decimal places. Never yields `-0.00`, `NaN` or `inf`.
pub fn fmt(n: Money) -> String {
    let n = if n.is_finite() { round_cents(n) } else { 0. };
    match format!("{:.2}", n) {
        s if s == "-0.00" => String::from("0.00"),
        s => s,
    }
}

/// Format to the nearest integer. Never yields `-0`, `NaN` or `inf`.
pub fn fmt_int(n: Money) -> String {
    let n = if n.is_finite() { round_half_up(n) } else { 0. };
    match format!("{:.0}", n) {
        s if s == "-0" => String::from("0"),
        s => s,
    }
}
