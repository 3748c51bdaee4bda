/// Punctuation stripped from the ends of a token before counting.
const STRIP_CHARS: &[char] = &['.', ',', '!', '?', '(', ')', ':', ';', '"'];

/// Normalize a raw token: strip leading/trailing punctuation, then lowercase.
///
/// Returns `None` when nothing survives, e.g. for a token that was pure
/// punctuation. Interior punctuation is preserved (`don't` stays `don't`).
pub fn normalize_token(raw: &str) -> Option<String> {
    let stripped = raw.trim_matches(STRIP_CHARS);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_lowercase())
    }
}
