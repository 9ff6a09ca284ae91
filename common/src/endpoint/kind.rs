use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    Ipv4,
    Ipv6,
    Domain,
    Hostname,
    Invalid,
}

impl EndpointKind {
    /// Kinds that count towards a valid target list, in display order.
    pub const VALID: [EndpointKind; 4] = [
        EndpointKind::Ipv4,
        EndpointKind::Ipv6,
        EndpointKind::Domain,
        EndpointKind::Hostname,
    ];

    pub fn is_valid(self) -> bool {
        self != EndpointKind::Invalid
    }

    pub fn is_ip(self) -> bool {
        matches!(self, EndpointKind::Ipv4 | EndpointKind::Ipv6)
    }

    pub fn is_name(self) -> bool {
        matches!(self, EndpointKind::Domain | EndpointKind::Hostname)
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EndpointKind::Ipv4 => "IPv4",
            EndpointKind::Ipv6 => "IPv6",
            EndpointKind::Domain => "Domain",
            EndpointKind::Hostname => "Hostname",
            EndpointKind::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_valid: bool,
    pub kind: EndpointKind,
}

impl From<EndpointKind> for ClassificationResult {
    fn from(kind: EndpointKind) -> Self {
        Self {
            is_valid: kind.is_valid(),
            kind,
        }
    }
}
