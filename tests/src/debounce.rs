#![cfg(test)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

use asvscope_common::config::DEFAULT_DEBOUNCE;
use asvscope_common::debounce::Debouncer;
use asvscope_common::summarize;

/// Typing an address one keystroke at a time yields a single summary.
#[tokio::test(start_paused = true)]
async fn search_field_settles_on_final_text() {
    let detected: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = detected.clone();

    let debouncer = Debouncer::spawn(DEFAULT_DEBOUNCE, move |value: String| {
        sink.lock().unwrap().push(summarize(&value).detected_message());
    });

    let typed = "10.0.0.1";
    for end in 1..=typed.len() {
        debouncer.push(typed[..end].to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(DEFAULT_DEBOUNCE + Duration::from_millis(10)).await;

    assert_eq!(*detected.lock().unwrap(), vec!["Detected: 1 IPv4"]);
    debouncer.close().await.unwrap();
}
