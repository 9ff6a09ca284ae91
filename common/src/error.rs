use thiserror::Error;

/// Why a target list cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("no IP addresses or domains were entered")]
    NoEntries,

    #[error("found {count} invalid {}: {}", entry_noun(.count), .entries.join(", "))]
    InvalidEntries { count: usize, entries: Vec<String> },
}

fn entry_noun(count: &usize) -> &'static str {
    if *count == 1 { "entry" } else { "entries" }
}
