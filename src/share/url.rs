use crate::payments::link::encode_component;

/// Share link for a code: the page address without its query, plus `?s=`.
pub fn share_url(base: &str, code: &str) -> String {
    let page = base.split('?').next().unwrap_or_default();
    format!("{}?s={}", page, code)
}

/// Share code carried by a link, under `s` or the older `share` key.
pub fn share_param(url: &str) -> Option<&str> {
    query_param(url, "s").or_else(|| query_param(url, "share"))
}

/// Link that seats the given players at a fresh side pot table.
pub fn names_url(base: &str, names: &[&str]) -> String {
    let page = base.split('?').next().unwrap_or_default();
    let names = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(encode_component)
        .collect::<Vec<String>>()
        .join(",");
    format!("{}?names={}", page, names)
}

/// Comma-separated player names handed over from another table.
pub fn names_param(url: &str) -> Vec<String> {
    query_param(url, "names")
        .map(|names| {
            decode_component(names)
                .split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Form-style percent decoding: `+` is a space, `%XX` is a byte, and a
/// malformed escape stays literal. Invalid UTF-8 becomes U+FFFD.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match s
                .get(i + 1..i + 3)
                .filter(|h| h.bytes().all(|c| c.is_ascii_hexdigit()))
                .and_then(|h| u8::from_str_radix(h, 16).ok())
            {
                Some(b) => {
                    out.push(b);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    url.split_once('?')
        .map(|(_, query)| query.split('#').next().unwrap_or_default())?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}
