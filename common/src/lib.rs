//! # asvscope-common
//!
//! Classification and validation of scan targets entered by hand.
//!
//! A target list is free text: IP addresses, domains and hostnames separated
//! by commas, semicolons or whitespace. This crate turns such text into
//! typed results:
//!
//! * **[`endpoint::tokenize`]** splits the raw text into [`EndpointToken`]s.
//! * **[`endpoint::classify`]** tags one token with an [`EndpointKind`].
//! * **[`endpoint::summarize`]** aggregates a whole list into a
//!   [`ValidationSummary`], the gate a submission has to pass.
//!
//! [`debounce::Debouncer`] coalesces bursts of input from live search fields.

pub mod config;
pub mod debounce;
pub mod endpoint;
pub mod error;

pub use endpoint::{
    ClassificationResult, Classifier, EndpointKind, EndpointToken, Rule, ValidationSummary,
    classify, summarize, tokenize,
};
pub use error::SubmissionError;
