use canonical::{canonical_tokens, corpus_digest, terms, CanonicalizeConfig, StopWords};

fn main() {
    let cfg = CanonicalizeConfig::default();
    let stop = StopWords::english();
    let question = "How many days until my REFUND arrives?";

    println!("tokens: {:?}", canonical_tokens(question, &cfg));
    println!();
    println!("terms: {:?}", terms(question, &cfg, &stop));
    println!();
    println!(
        "digest: {}",
        corpus_digest(cfg.version, ["Refunds take 5 days", "Track your order online"])
    );
}
