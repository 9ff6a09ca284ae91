use asvscope_common::{ClassificationResult, EndpointKind, EndpointToken, Rule};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn kind_color(kind: EndpointKind) -> Color {
    match kind {
        EndpointKind::Ipv4 => colors::IPV4_ADDR,
        EndpointKind::Ipv6 => colors::IPV6_ADDR,
        EndpointKind::Domain => colors::DOMAIN,
        EndpointKind::Hostname => colors::HOSTNAME,
        EndpointKind::Invalid => colors::INVALID,
    }
}

pub fn colored_kind(kind: EndpointKind) -> ColoredString {
    let label: ColoredString = kind.to_string().color(kind_color(kind));
    if kind.is_valid() { label } else { label.bold() }
}

pub fn colored_token(token: &EndpointToken, result: &ClassificationResult) -> ColoredString {
    token.as_str().color(kind_color(result.kind))
}

/// Tree rows shown under one entry.
pub fn entry_details(result: &ClassificationResult, rule: Option<Rule>, verbose: bool) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Kind".to_string(), colored_kind(result.kind))];

    if verbose {
        let rule: ColoredString = match rule {
            Some(rule) => rule.to_string().normal(),
            None => "no rule matched".dimmed(),
        };
        details.push(("Rule".to_string(), rule));
    }

    details
}
