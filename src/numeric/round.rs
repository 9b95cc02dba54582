use crate::Money;

/// Round to the nearest integer, breaking ties toward positive infinity.
///
/// Matches the rounding that shared links and stored sessions were produced
/// with, so -2.5 rounds to -2 and 2.5 rounds to 3.
pub fn round_half_up(x: Money) -> Money {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1. } else { floor }
}

/// Round to whole cents.
pub fn round_cents(x: Money) -> Money {
    round_half_up(x * 100.) / 100.
}

/// Integer number of cents, as payment links and balance checks use it.
pub fn cents(x: Money) -> i64 {
    if x.is_finite() {
        round_half_up(x * 100.) as i64
    } else {
        0
    }
}

/// True when the amount rounds to zero cents.
pub fn is_zero_cents(x: Money) -> bool {
    cents(x) == 0
}
