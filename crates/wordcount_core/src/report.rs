use crate::map::WordFrequencyMap;

/// One entry of the ordered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Produce the display report: entries sorted by word in ascending
/// lexicographic order, deterministic for a given map. An empty map yields
/// an empty report; rendering that case is the caller's concern.
pub fn report(map: &WordFrequencyMap) -> Vec<WordCount> {
    map.iter()
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect()
}
