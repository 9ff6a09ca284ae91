//! Grammars of the classification cascade.
//!
//! Every pattern is anchored at both ends except the legacy bare-port
//! branch, which only ever looked at the start of a token.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::kind::EndpointKind;

/// Decimal octet 0-255, zero padding up to three digits allowed ("010" is ten).
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]{1,2})";
const PORT: &str = r"(?::[0-9]{1,5})";
const H16: &str = r"[0-9a-fA-F]{1,4}";
/// 1-63 chars, alphanumeric at both ends, hyphens only inside.
const LABEL: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?";

fn ipv4() -> String {
    format!(r"{OCTET}(?:\.{OCTET}){{3}}")
}

/// Full form, leading/trailing `::` and a single `::` anywhere in between.
fn ipv6() -> String {
    [
        format!("(?:{H16}:){{7}}{H16}"),
        format!("(?:{H16}:){{1,7}}:"),
        format!("(?:{H16}:){{1,6}}:{H16}"),
        format!("(?:{H16}:){{1,5}}(?::{H16}){{1,2}}"),
        format!("(?:{H16}:){{1,4}}(?::{H16}){{1,3}}"),
        format!("(?:{H16}:){{1,3}}(?::{H16}){{1,4}}"),
        format!("(?:{H16}:){{1,2}}(?::{H16}){{1,5}}"),
        format!("{H16}:(?::{H16}){{1,6}}"),
        format!(":(?:(?::{H16}){{1,7}}|:)"),
    ]
    .join("|")
}

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).unwrap_or_else(|e| panic!("bad built-in pattern {pattern}: {e}"))
}

static IPV4: LazyLock<Regex> = LazyLock::new(|| compile(format!("^{}$", ipv4())));

static IPV4_WITH_PORT: LazyLock<Regex> =
    LazyLock::new(|| compile(format!("^{}{PORT}?$", ipv4())));

static IPV6: LazyLock<Regex> = LazyLock::new(|| compile(format!("^(?:{})$", ipv6())));

static IPV6_BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"^\[(?:{})\]{PORT}?$", ipv6())));

static LEGACY_BARE_PORT: LazyLock<Regex> =
    LazyLock::new(|| compile(format!("^:{PORT}?")));

static DOMAIN_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^(?:(?i:https?|ftp)://)?(?:www\.)?(?:{LABEL}\.)+[a-zA-Z]{{2,}}{PORT}?(?:/\S*)?$"
    ))
});

static SIMPLE_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"^(?:{LABEL}\.)+[a-zA-Z]{{2,}}$")));

static DOTTED_HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"^{LABEL}(?:\.{LABEL})+$")));

static BARE_HOSTNAME: LazyLock<Regex> = LazyLock::new(|| compile(format!("^{LABEL}$")));

/// One step of the cascade. Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Ipv4,
    Ipv4WithPort,
    Ipv6,
    Ipv6Bracketed,
    DomainUrl,
    SimpleDomain,
    DottedHostname,
    BareHostname,
}

impl Rule {
    /// First match wins, anything left over is invalid.
    pub const CASCADE: [Rule; 8] = [
        Rule::Ipv4,
        Rule::Ipv4WithPort,
        Rule::Ipv6,
        Rule::Ipv6Bracketed,
        Rule::DomainUrl,
        Rule::SimpleDomain,
        Rule::DottedHostname,
        Rule::BareHostname,
    ];

    pub fn kind(self) -> EndpointKind {
        match self {
            Rule::Ipv4 | Rule::Ipv4WithPort => EndpointKind::Ipv4,
            Rule::Ipv6 | Rule::Ipv6Bracketed => EndpointKind::Ipv6,
            Rule::DomainUrl | Rule::SimpleDomain => EndpointKind::Domain,
            Rule::DottedHostname | Rule::BareHostname => EndpointKind::Hostname,
        }
    }

    pub(crate) fn matches(self, token: &str, legacy_bare_port: bool) -> bool {
        match self {
            Rule::Ipv4 => IPV4.is_match(token),
            Rule::Ipv4WithPort => IPV4_WITH_PORT.is_match(token),
            Rule::Ipv6 => IPV6.is_match(token),
            Rule::Ipv6Bracketed => {
                IPV6_BRACKETED.is_match(token)
                    || (legacy_bare_port && LEGACY_BARE_PORT.is_match(token))
            }
            Rule::DomainUrl => DOMAIN_URL.is_match(token),
            Rule::SimpleDomain => SIMPLE_DOMAIN.is_match(token),
            // Dotted digits are a mistyped address, never a name.
            Rule::DottedHostname => DOTTED_HOSTNAME.is_match(token) && !is_dotted_numeric(token),
            Rule::BareHostname => BARE_HOSTNAME.is_match(token),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Ipv4 => "IPv4 literal",
            Rule::Ipv4WithPort => "IPv4 literal with port",
            Rule::Ipv6 => "IPv6 literal",
            Rule::Ipv6Bracketed => "bracketed IPv6 literal",
            Rule::DomainUrl => "domain or URL",
            Rule::SimpleDomain => "simple domain",
            Rule::DottedHostname => "dotted hostname",
            Rule::BareHostname => "bare hostname",
        };
        f.write_str(name)
    }
}

fn is_dotted_numeric(token: &str) -> bool {
    token.contains('.') && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
