//! A built matcher is shared across threads without locks.

use std::sync::Arc;
use std::thread;

use convbi::{ChatConfig, ChatSession, FaqMatcher, MatchResult};

fn shared_matcher() -> Arc<FaqMatcher> {
    Arc::new(FaqMatcher::build([
        "Refunds take 5 days",
        "Track your order online",
        "Cash on delivery is supported",
    ]))
}

#[test]
fn concurrent_queries_match_sequential_results() {
    let matcher = shared_matcher();
    let questions = [
        "how many days for refund",
        "track order",
        "cash delivery",
        "what is the weather today",
    ];
    let expected: Vec<MatchResult> = questions.iter().map(|q| matcher.answer(q)).collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                (0..50)
                    .map(|round| {
                        let q = questions[(i + round) % questions.len()];
                        (q, matcher.answer(q))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (question, result) in handle.join().expect("query thread panicked") {
            let idx = questions.iter().position(|q| *q == question).unwrap();
            assert_eq!(result, expected[idx], "{question}");
        }
    }
}

#[test]
fn sessions_share_matcher_with_separate_histories() {
    let session = ChatSession::new(shared_matcher(), ChatConfig::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = session.clone();
            thread::spawn(move || {
                let mut history = session.new_history();
                for _ in 0..=i {
                    session.ask(&mut history, "track order");
                }
                history.len()
            })
        })
        .collect();

    let lengths: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("session thread panicked"))
        .collect();
    assert_eq!(lengths, vec![2, 4, 6, 8]);
}

#[test]
fn matcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FaqMatcher>();
    assert_send_sync::<ChatSession>();
}
