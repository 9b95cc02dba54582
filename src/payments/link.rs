use super::*;
use crate::numeric::cents;
use crate::Money;

/// Payment-request link for `amount` in `currency`, or an empty string when
/// the revtag has no username.
pub fn build_revolut_link(revtag: &str, amount: Money, currency: &str) -> String {
    let slug = revtag_slug(revtag);
    if slug.is_empty() {
        return String::new();
    }
    format!(
        "{}/{}?currency={}&amount={}",
        crate::REVOLUT_BASE_URL,
        encode_component(&slug),
        currency,
        cents(amount)
    )
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// byte by byte over UTF-8.
pub(crate) fn encode_component(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => (b as char).to_string(),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => (b as char).to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}
