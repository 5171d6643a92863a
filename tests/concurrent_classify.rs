//! Shared-engine classification across concurrent tasks.

use std::sync::Arc;

use bedside_triage::triage::{TriageEngine, TriageResult};

const MESSAGES: &[&str] = &[
    "I need ice water",
    "My chest feels tight",
    "My blood pressure was 165/100 today",
    "I can't breathe",
    "I have some cramping",
    "My baby looks blue",
    "asdkjasdlkj",
    "",
];

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_results_match_serial() {
    let engine = Arc::new(TriageEngine::new());
    let expected: Vec<TriageResult> = MESSAGES.iter().map(|m| engine.classify(m)).collect();

    let mut handles = Vec::new();
    for round in 0..32 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let index = round % MESSAGES.len();
            (index, engine.classify(MESSAGES[index]))
        }));
    }

    for handle in handles {
        let (index, result) = handle.await.unwrap();
        assert_eq!(result, expected[index], "{:?}", MESSAGES[index]);
    }
}

#[test]
fn engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TriageEngine>();
}
