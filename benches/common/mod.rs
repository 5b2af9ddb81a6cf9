//! Shared corpus generators for the matcher benchmarks.

#![allow(dead_code)]

pub const SAMPLE_QUESTION: &str = "how many days does a refund take for my order";

const WORDS: &[&str] = &[
    "refund", "order", "delivery", "payment", "account", "password", "invoice", "shipping",
    "tracking", "return", "exchange", "warranty", "discount", "coupon", "subscription",
    "cancel", "address", "courier", "support", "billing", "card", "wallet", "parcel",
    "damaged", "missing", "late", "days", "hours", "online", "store",
];

/// Deterministic corpus of `size` short answer sentences.
pub fn generate_corpus(size: usize) -> Vec<String> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..size)
        .map(|i| {
            let len = 5 + i % 7;
            let mut words = Vec::with_capacity(len);
            for _ in 0..len {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                words.push(WORDS[(state % WORDS.len() as u64) as usize]);
            }
            format!("Answer {i}: {}", words.join(" "))
        })
        .collect()
}
