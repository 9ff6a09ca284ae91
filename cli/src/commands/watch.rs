use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use asvscope_common::{Classifier, ValidationSummary, config::Config, debounce::Debouncer};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::terminal::print;

/// Each stdin line is the full content of a search field after a keystroke.
pub async fn watch(cfg: &Config) -> anyhow::Result<()> {
    let settled: usize = watch_lines(BufReader::new(tokio::io::stdin()), cfg).await?;
    debug!(settled, "input closed");
    Ok(())
}

/// Returns how many settled values were reported.
async fn watch_lines<R>(input: R, cfg: &Config) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let classifier: Classifier = Classifier::new(cfg);
    let json: bool = cfg.json;
    let settled: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let counter = settled.clone();

    let debouncer: Debouncer<String> = Debouncer::spawn(cfg.debounce, move |value: String| {
        counter.fetch_add(1, Ordering::Relaxed);
        report(&value, &classifier.summarize(&value), json);
    });

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if !debouncer.push(line) {
            anyhow::bail!("stopped watching: the search filter failed");
        }
    }

    debouncer.close().await?;
    Ok(settled.load(Ordering::Relaxed))
}

fn report(value: &str, summary: &ValidationSummary, json: bool) {
    if json {
        match serde_json::to_string(summary) {
            Ok(line) => print::print(&line),
            Err(e) => warn!("failed to serialize summary: {e}"),
        }
        return;
    }

    print::status(format!("{value:?} → {}", summary.detected_message()));
    if summary.has_invalid {
        warn!("Found {} invalid entry(ies)", summary.invalid_count);
    }
}
