use crate::Money;

/// Parse a user-entered amount, accepting both `1,234.56` and `1.234,56`.
///
/// When both separators occur, the later one is the decimal point and the
/// other is a thousands separator. A lone comma is a decimal point. A lone
/// dot is kept as-is, so `"1.234"` is 1.234, never 1234. Anything that does
/// not yield a finite number parses to zero.
pub fn parse(input: &str) -> Money {
    let input = input.trim();
    if input.is_empty() {
        return 0.;
    }
    let normalized = match (input.rfind(','), input.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => input.replace('.', "").replacen(',', ".", 1),
        (Some(_), Some(_)) => input.replace(',', ""),
        (Some(_), None) => input.replacen(',', ".", 1),
        _ => input.to_string(),
    };
    let stripped = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        .collect::<String>();
    let n = leading(&stripped);
    if n.is_finite() { n } else { 0. }
}

/// Longest numeric prefix: `[+-]? digits* (. digits*)?` with at least one
/// digit. Trailing garbage such as a second dot or sign is ignored.
fn leading(s: &str) -> Money {
    let mut chars = s.chars().peekable();
    let mut literal = String::with_capacity(s.len());
    if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
        literal.push(sign);
    }
    let mut int = 0;
    while let Some(d) = chars.next_if(char::is_ascii_digit) {
        literal.push(d);
        int += 1;
    }
    let mut frac = 0;
    if chars.next_if_eq(&'.').is_some() {
        let mut tail = String::new();
        while let Some(d) = chars.next_if(char::is_ascii_digit) {
            tail.push(d);
            frac += 1;
        }
        if frac > 0 {
            if int == 0 {
                literal.push('0');
            }
            literal.push('.');
            literal.push_str(&tail);
        }
    }
    if int + frac == 0 {
        return Money::NAN;
    }
    literal.parse::<Money>().unwrap_or(Money::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert!(parse("") == 0.);
        assert!(parse("   ") == 0.);
    }
    #[test]
    fn continental_thousands() {
        assert!(parse("1.234,56") == 1234.56);
        assert!(parse("1.234.567,8") == 1234567.8);
    }
    #[test]
    fn anglo_thousands() {
        assert!(parse("1,234.56") == 1234.56);
        assert!(parse("1,234,567.8") == 1234567.8);
    }
    #[test]
    fn lone_comma_is_decimal() {
        assert!(parse("12,5") == 12.5);
        assert!(parse("1,234,567") == 1.234567);
    }
    #[test]
    fn lone_dot_is_decimal() {
        assert!(parse("1.234") == 1.234);
        assert!(parse("1.2.3") == 1.2);
    }
    #[test]
    fn garbage_degrades_to_zero() {
        assert!(parse("abc") == 0.);
        assert!(parse("--5") == 0.);
        assert!(parse(".") == 0.);
        assert!(parse("NaN") == 0.);
        assert!(parse("Infinity") == 0.);
    }
    #[test]
    fn currency_symbols_and_signs() {
        assert!(parse("€ 30") == 30.);
        assert!(parse("-12.50 EUR") == -12.5);
        assert!(parse("+7") == 7.);
        assert!(parse(".5") == 0.5);
        assert!(parse("5.") == 5.);
        assert!(parse("5-3") == 5.);
    }
    #[test]
    fn negative_zero() {
        assert!(parse("-0") == 0.);
        assert!(parse("-0").is_sign_negative());
    }
}
