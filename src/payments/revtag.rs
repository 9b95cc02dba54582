/// Trimmed revtag text.
pub fn normalize_revtag(revtag: &str) -> String {
    revtag.trim().to_string()
}

/// The username part of a revtag, without its leading `@`.
pub fn revtag_slug(revtag: &str) -> String {
    let revtag = normalize_revtag(revtag);
    revtag.strip_prefix('@').unwrap_or(&revtag).to_string()
}
