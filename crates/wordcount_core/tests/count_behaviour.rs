use std::sync::Once;

use wordcount_core::{count_text, normalize_token};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(counter_logging::initialize_for_tests);
}

#[test]
fn counts_case_folded_words_across_lines() {
    init_logging();
    let map = count_text("The cat sat. The CAT ran!");

    assert_eq!(map.len(), 4);
    assert_eq!(map.get("the"), 2);
    assert_eq!(map.get("cat"), 2);
    assert_eq!(map.get("sat"), 1);
    assert_eq!(map.get("ran"), 1);
    // Unnormalized forms are not keys.
    assert_eq!(map.get("CAT"), 0);
    assert_eq!(map.get("sat."), 0);
}

#[test]
fn counting_is_idempotent() {
    init_logging();
    let text = "one fish two fish\nred fish blue fish\n";

    assert_eq!(count_text(text), count_text(text));
}

#[test]
fn total_count_matches_surviving_tokens() {
    init_logging();
    // Eight whitespace tokens, two of which are pure punctuation.
    let map = count_text("a b ... c d !! e f");

    assert_eq!(map.total_count(), 6);
}

#[test]
fn empty_source_yields_empty_map() {
    init_logging();
    let map = count_text("");

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.total_count(), 0);
}

#[test]
fn whitespace_only_source_yields_empty_map() {
    init_logging();
    assert!(count_text("  ").is_empty());
    assert!(count_text(" \t \n   \n").is_empty());
}

#[test]
fn punctuation_is_stripped_from_ends_only() {
    init_logging();
    assert_eq!(normalize_token("\"Cat,\"").as_deref(), Some("cat"));
    assert_eq!(normalize_token("(hello):").as_deref(), Some("hello"));
    // Interior punctuation survives.
    assert_eq!(normalize_token("don't").as_deref(), Some("don't"));
    assert_eq!(normalize_token("o'clock!").as_deref(), Some("o'clock"));
    // Characters outside the fixed set are not stripped.
    assert_eq!(normalize_token("[bracketed]").as_deref(), Some("[bracketed]"));
}

#[test]
fn pure_punctuation_tokens_are_dropped() {
    init_logging();
    assert_eq!(normalize_token("..."), None);
    assert_eq!(normalize_token("?!"), None);
    assert_eq!(normalize_token("\"\""), None);

    let map = count_text("wait ... what ?!");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("wait"), 1);
    assert_eq!(map.get("what"), 1);
}

#[test]
fn repeated_line_accumulates() {
    init_logging();
    let map = count_text("tick tock\ntick tock\ntick tock\n");

    assert_eq!(map.get("tick"), 3);
    assert_eq!(map.get("tock"), 3);
    assert_eq!(map.total_count(), 6);
}
