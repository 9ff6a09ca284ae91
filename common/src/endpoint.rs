//! # Endpoint Classification
//!
//! Turns user-entered scan targets into typed results.
//!
//! Raw text flows through three stages:
//! * [`tokenize`] splits on runs of commas, semicolons and whitespace.
//! * [`classify`] runs each token through an ordered rule cascade.
//! * [`summarize`] counts the results and keeps them for display.
//!
//! The cascade order matters. Several grammars overlap (`db1.internal` is
//! both a simple domain and a dotted hostname) and the first matching rule
//! decides the tag.

mod classifier;
mod kind;
mod rules;
mod summary;
mod token;

pub use classifier::{Classifier, classify};
pub use kind::{ClassificationResult, EndpointKind};
pub use rules::Rule;
pub use summary::{ValidationSummary, summarize};
pub use token::{EndpointToken, tokenize};
