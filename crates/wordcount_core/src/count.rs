use crate::map::WordFrequencyMap;
use crate::token::normalize_token;

/// Count word occurrences in `text`: one pass over its lines.
///
/// Each line is split on whitespace and every token is normalized; tokens
/// that normalize to nothing are dropped, never an error. Pure function of
/// its input, owned map returned to the caller.
pub fn count_text(text: &str) -> WordFrequencyMap {
    let mut map = WordFrequencyMap::new();
    for line in text.lines() {
        for token in line.split_whitespace() {
            if let Some(word) = normalize_token(token) {
                map.increment(word);
            }
        }
    }
    map
}
