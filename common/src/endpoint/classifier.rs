use tracing::trace;

use super::kind::{ClassificationResult, EndpointKind};
use super::rules::Rule;
use super::summary::ValidationSummary;
use super::token::{self, EndpointToken};
use crate::config::Config;

/// Runs tokens through the rule cascade.
///
/// The default classifier is strict: the legacy `:`-prefix branch of the
/// bracketed IPv6 rule is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    legacy_bare_port: bool,
}

impl Classifier {
    pub fn new(config: &Config) -> Self {
        Self {
            legacy_bare_port: config.legacy_bare_port,
        }
    }

    pub fn with_legacy_bare_port(mut self, enabled: bool) -> Self {
        self.legacy_bare_port = enabled;
        self
    }

    /// Returns the first rule that accepts `token`, or `None` if it is invalid.
    pub fn matching_rule(&self, token: &str) -> Option<Rule> {
        Rule::CASCADE
            .into_iter()
            .find(|rule| rule.matches(token, self.legacy_bare_port))
    }

    /// Classifies one already trimmed token. Never fails.
    pub fn classify(&self, token: &str) -> ClassificationResult {
        let rule = self.matching_rule(token);
        let kind = rule.map_or(EndpointKind::Invalid, Rule::kind);

        trace!(token, ?rule, %kind, "classified endpoint");
        ClassificationResult::from(kind)
    }

    /// Tokenizes `raw`, classifies every token and aggregates the results.
    pub fn summarize(&self, raw: &str) -> ValidationSummary {
        let tokens: Vec<EndpointToken> = token::tokenize(raw);
        let entries: Vec<ClassificationResult> = tokens
            .iter()
            .map(|token| self.classify(token.as_str()))
            .collect();

        ValidationSummary::from_entries(tokens, entries)
    }
}

/// [`Classifier::classify`] with the default, strict classifier.
pub fn classify(token: &str) -> ClassificationResult {
    Classifier::default().classify(token)
}
