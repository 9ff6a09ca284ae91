use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::Classifier;
use super::kind::{ClassificationResult, EndpointKind};
use super::token::EndpointToken;
use crate::error::SubmissionError;

/// Aggregate over one target list.
///
/// `ips + domains + invalid_count` always equals the number of tokens, and
/// `entries[i]` is the result for `raw_entries[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub ips: usize,
    pub domains: usize,
    pub total: usize,
    pub invalid_count: usize,
    pub has_invalid: bool,
    pub entries: Vec<ClassificationResult>,
    pub raw_entries: Vec<EndpointToken>,
}

impl ValidationSummary {
    pub(crate) fn from_entries(
        raw_entries: Vec<EndpointToken>,
        entries: Vec<ClassificationResult>,
    ) -> Self {
        debug_assert_eq!(raw_entries.len(), entries.len());

        let ips = entries.iter().filter(|e| e.kind.is_ip()).count();
        let domains = entries.iter().filter(|e| e.kind.is_name()).count();
        let invalid_count = entries.len() - ips - domains;

        debug!(ips, domains, invalid_count, "summarized target list");

        Self {
            ips,
            domains,
            total: ips + domains,
            invalid_count,
            has_invalid: invalid_count > 0,
            entries,
            raw_entries,
        }
    }

    /// Number of entries tagged `kind`.
    pub fn count(&self, kind: EndpointKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Token and result pairs, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&EndpointToken, &ClassificationResult)> {
        self.raw_entries.iter().zip(self.entries.iter())
    }

    pub fn invalid_entries(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, result)| !result.is_valid)
            .map(|(token, _)| token.as_str())
            .collect()
    }

    /// Renders e.g. "Detected: 2 IPv4, 1 Domain".
    pub fn detected_message(&self) -> String {
        let parts: Vec<String> = EndpointKind::VALID
            .into_iter()
            .filter_map(|kind| match self.count(kind) {
                0 => None,
                n => Some(format!("{n} {kind}")),
            })
            .collect();

        if parts.is_empty() {
            "Detected: nothing".to_string()
        } else {
            format!("Detected: {}", parts.join(", "))
        }
    }

    /// The whole list is accepted or rejected, there is no partial success.
    pub fn check_submittable(&self) -> Result<(), SubmissionError> {
        if self.has_invalid {
            return Err(SubmissionError::InvalidEntries {
                count: self.invalid_count,
                entries: self.invalid_entries().into_iter().map(String::from).collect(),
            });
        }
        if self.total == 0 {
            return Err(SubmissionError::NoEntries);
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.check_submittable().is_ok()
    }
}

/// [`Classifier::summarize`] with the default, strict classifier.
pub fn summarize(raw: &str) -> ValidationSummary {
    Classifier::default().summarize(raw)
}
