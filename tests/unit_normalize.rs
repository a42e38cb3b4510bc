// tests/unit_normalize.rs
use dupehound_core::normalize::{normalize, Normalizer, Vocabulary};
use proptest::prelude::*;

#[test]
fn test_lowercases_and_splits_on_punctuation() {
    assert_eq!(normalize("Can't LOG-IN!!"), "can t log in");
}

#[test]
fn test_punctuation_does_not_glue_words() {
    assert_eq!(normalize("Navigator-error"), "navigation");
    assert_eq!(normalize("config_manager.error"), "config manage");
}

#[test]
fn test_drops_stopwords() {
    assert_eq!(normalize("Bug: export issue in reports"), "export in reports");
    assert_eq!(normalize("error bug issue problem fix resolve"), "");
}

#[test]
fn test_maps_synonyms() {
    assert_eq!(normalize("Navigator error"), "navigation");
    assert_eq!(normalize("Navigation error"), "navigation");
    assert_eq!(normalize("Configuration manager error"), "config manage");
    assert_eq!(normalize("Page designer error"), "page design");
}

#[test]
fn test_collapses_whitespace() {
    assert_eq!(normalize("  login \t\n  crash  "), "login crash");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("?!."), "");
}

#[test]
fn test_substituted_vocabulary() {
    let vocabulary = Vocabulary::new(vec!["please"], vec![("crashes", "crash")]).unwrap();
    let normalizer = Normalizer::new(vocabulary);
    assert_eq!(normalizer.normalize("Please fix: app crashes"), "fix app crash");
}

#[test]
fn test_empty_vocabulary_keeps_every_word() {
    let normalizer = Normalizer::new(Vocabulary::empty());
    assert_eq!(normalizer.normalize("Navigator error"), "navigator error");
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(raw in "[a-zA-Z0-9 ,.!?'-]{0,60}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_idempotent_over_vocabulary_words(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "Navigator", "navigate", "DESIGNER", "manager", "configure",
                "error", "Bug", "login", "crash", "page",
            ]),
            0..8,
        )
    ) {
        let raw = words.join(" ");
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_output_is_single_spaced_words(raw in "\\PC{0,40}") {
        let out = normalize(&raw);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c == ' ' || c.is_alphanumeric()));
    }
}
