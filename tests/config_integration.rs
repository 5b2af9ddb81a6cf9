use std::fs;

use convbi::{
    ChatSession, ConvBiConfig, LogicalField, Record, SchemaMap, StopWordsConfig, load_config,
    load_matcher, summarize, text_column,
};
use tempfile::tempdir;

const CONFIG_YAML: &str = r#"
version: "1.0"
name: "support-faq"
stop_words:
  type: english_plus
  terms: ["please"]
matcher:
  threshold: 0.4
  max_results: 2
chat:
  fallback_message: "An agent will follow up."
  max_history: 4
logging:
  level: "debug"
"#;

#[test]
fn config_file_drives_matcher_and_session() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("convbi.yaml");
    let corpus_path = dir.path().join("faq.txt");
    fs::write(&config_path, CONFIG_YAML).expect("write config");
    fs::write(
        &corpus_path,
        "Refunds take 5 days\n\nTrack your order online\nCash on delivery is supported\n",
    )
    .expect("write corpus");

    let config = load_config(Some(&config_path)).expect("load config");
    assert_eq!(config.name.as_deref(), Some("support-faq"));
    assert_eq!(config.logging.level, "debug");
    assert!(matches!(config.stop_words, StopWordsConfig::EnglishPlus(_)));

    let matcher = load_matcher(&corpus_path, &config).expect("load matcher");
    assert_eq!(matcher.len(), 3);
    assert_eq!(matcher.config().threshold, 0.4);
    assert_eq!(matcher.config().max_results, 2);

    let session = ChatSession::new(matcher.into(), config.chat_config());
    let mut history = session.new_history();

    let reply = session.ask(&mut history, "please how many days for refund");
    assert_eq!(reply.message, "Refunds take 5 days");

    let reply = session.ask(&mut history, "what is the weather today");
    assert_eq!(reply.message, "An agent will follow up.");

    session.ask(&mut history, "track order");
    assert_eq!(history.len(), 4);
    assert_eq!(
        history.turns().next().map(|t| t.message.as_str()),
        Some("what is the weather today")
    );
}

#[test]
fn saved_config_reloads_identically() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("saved.yaml");
    let config = ConvBiConfig::from_yaml(CONFIG_YAML).expect("parse");
    fs::write(&path, config.to_yaml().expect("serialize")).expect("write");
    let reloaded = ConvBiConfig::from_file(&path).expect("reload");
    assert_eq!(
        reloaded.to_yaml().expect("serialize"),
        config.to_yaml().expect("serialize")
    );
    assert_eq!(reloaded.chat_config(), config.chat_config());
}

#[test]
fn conversation_table_feeds_corpus_and_summary() {
    let row = |text: &str, sentiment: &str, category: &str| -> Record {
        [
            ("Conversation Text".to_string(), text.to_string()),
            ("Sentiment".to_string(), sentiment.to_string()),
            ("Category".to_string(), category.to_string()),
        ]
        .into_iter()
        .collect()
    };
    let rows = vec![
        row("Refunds take 5 days", "NEGATIVE", "billing"),
        row("Track your order online", "POSITIVE", "shipping"),
        row("", "NEGATIVE", ""),
    ];

    let schema =
        SchemaMap::infer(["Conversation Text", "Sentiment", "Category"]).expect("headers");
    assert_eq!(schema.column(LogicalField::Text), Some("Conversation Text"));
    assert!(!schema.has(LogicalField::Source));

    let summary = summarize(&rows, &schema);
    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.top(LogicalField::Sentiment), Some("NEGATIVE"));
    assert!(summary.source_counts.is_none());

    let corpus = text_column(&rows, &schema);
    assert_eq!(corpus.len(), 2);
    let matcher = convbi::build_matcher(corpus, &ConvBiConfig::default()).expect("build");
    assert_eq!(
        matcher.answer("where do I track my order").index(),
        Some(1)
    );
}
