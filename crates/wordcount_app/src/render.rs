use serde::Serialize;
use wordcount_core::WordCount;

/// Print one `word: count` line per entry, or the placeholder message when
/// there is nothing to show.
pub fn print_text(entries: &[WordCount]) {
    if entries.is_empty() {
        println!("No word counts to display.");
        return;
    }
    for entry in entries {
        println!("{}: {}", entry.word, entry.count);
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    word: &'a str,
    count: u64,
}

/// Render the report as a JSON array of `{"word", "count"}` objects,
/// preserving the report's alphabetical order.
pub fn to_json(entries: &[WordCount]) -> serde_json::Result<String> {
    let rows: Vec<JsonEntry<'_>> = entries
        .iter()
        .map(|entry| JsonEntry {
            word: &entry.word,
            count: entry.count,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
