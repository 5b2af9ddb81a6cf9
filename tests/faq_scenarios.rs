//! End-to-end answer selection over small FAQ corpora.

use convbi::{FaqMatcher, MatchConfig, MatchResult, StopWordsConfig};

const FAQ: [&str; 3] = [
    "Refunds take 5 days",
    "Track your order online",
    "Cash on delivery is supported",
];

fn faq() -> FaqMatcher {
    FaqMatcher::build(FAQ)
}

#[test]
fn refund_question_matches_refund_entry() {
    let result = faq().answer("how many days for refund");
    let hit = result.hit().expect("refund question should match");
    assert_eq!(hit.index, 0);
    assert_eq!(hit.answer, "Refunds take 5 days");
    assert!(hit.score > 0.25, "score {} not above threshold", hit.score);
    // Only "days" is shared; the entry carries three equally weighted terms.
    assert!((hit.score - 1.0 / 3f32.sqrt()).abs() < 1e-4);
}

#[test]
fn unrelated_question_falls_back() {
    assert_eq!(faq().answer("what is the weather today"), MatchResult::Fallback);
}

#[test]
fn each_entry_reachable_by_its_own_wording() {
    let matcher = faq();
    for (index, entry) in FAQ.iter().enumerate() {
        let result = matcher.answer(entry);
        assert_eq!(result.index(), Some(index), "entry {entry:?}");
        let score = result.score().unwrap_or_default();
        assert!(score > 0.999 && score <= 1.0, "self score {score}");
    }
}

#[test]
fn question_wording_is_case_and_punctuation_insensitive() {
    let matcher = faq();
    let plain = matcher.answer("track order");
    let noisy = matcher.answer("TRACK... my ORDER?!");
    assert_eq!(plain, noisy);
    assert_eq!(plain.index(), Some(1));
}

#[test]
fn single_character_corpus_is_deterministic() {
    let matcher = FaqMatcher::build(["a", "b"]);
    let first = matcher.answer("a");
    for _ in 0..10 {
        assert_eq!(matcher.answer("a"), first);
    }
    // Single characters carry no terms, so nothing can be confidently relevant.
    assert!(first.is_fallback());
    assert!(matcher.vocabulary().is_empty());
}

#[test]
fn single_character_tokens_kept_when_configured() {
    let mut config = MatchConfig::default();
    config.canonical.min_token_chars = 1;
    config.stop_words = StopWordsConfig::None;
    let matcher = FaqMatcher::build_with_config(["a", "b"], config).expect("valid config");
    assert_eq!(matcher.answer("a").index(), Some(0));
    assert_eq!(matcher.answer("b").index(), Some(1));
}

#[test]
fn empty_corpus_always_falls_back() {
    let matcher = FaqMatcher::build(Vec::<String>::new());
    assert!(matcher.is_empty());
    assert!(matcher.answer("how many days for refund").is_fallback());
    assert!(matcher.top_matches("refund", 5).is_empty());
}

#[test]
fn empty_and_stop_word_questions_fall_back() {
    let matcher = faq();
    assert!(matcher.answer("").is_fallback());
    assert!(matcher.answer("   \t ").is_fallback());
    assert!(matcher.answer("what is the").is_fallback());
}

#[test]
fn raising_threshold_never_creates_a_match() {
    let matcher = faq();
    let question = "how many days for refund";
    let mut matched_before = true;
    for step in 0..=20 {
        let threshold = step as f32 / 20.0;
        let matched = matcher.answer_with_threshold(question, threshold).is_match();
        assert!(matched_before || !matched, "match reappeared at {threshold}");
        matched_before = matched;
    }
    assert!(matcher.answer_with_threshold(question, 0.5).is_match());
    assert!(matcher.answer_with_threshold(question, 0.6).is_fallback());
}

#[test]
fn corpus_order_does_not_change_the_answer() {
    let forward = faq();
    let reversed: Vec<&str> = FAQ.iter().rev().copied().collect();
    let backward = FaqMatcher::build(reversed);

    for question in ["how many days for refund", "track order", "cash delivery"] {
        let a = forward.answer(question);
        let b = backward.answer(question);
        assert_eq!(a.hit().map(|h| &h.answer), b.hit().map(|h| &h.answer));
        let (sa, sb) = (a.score().unwrap_or(0.0), b.score().unwrap_or(0.0));
        assert!((sa - sb).abs() < 1e-6, "{question}: {sa} vs {sb}");
    }
}

#[test]
fn duplicate_entries_resolve_to_first_index() {
    let matcher = FaqMatcher::build(["Track your order online", "Track your order online"]);
    assert_eq!(matcher.answer("track order online").index(), Some(0));
}

#[test]
fn top_matches_ranks_and_truncates() {
    let matcher = FaqMatcher::build([
        "Track your order online",
        "Order cancellation is free",
        "Refunds take 5 days",
        "Track refunds from your order page",
    ]);
    let hits = matcher.top_matches("track my order", 2);
    assert_eq!(hits.len(), 2);
    assert!(hits[0].score >= hits[1].score);
    assert!(hits.iter().all(|h| h.score > 0.0));
    assert_eq!(hits[0].index, 0);
}
