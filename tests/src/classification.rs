#![cfg(test)]
use asvscope_common::config::Config;
use asvscope_common::{Classifier, EndpointKind, Rule, classify};

fn kind(token: &str) -> EndpointKind {
    classify(token).kind
}

/// Known inputs and the tag the cascade has to produce for each.
#[test]
fn classification_table() {
    let table: &[(&str, EndpointKind)] = &[
        ("8.8.8.8", EndpointKind::Ipv4),
        ("0.0.0.0", EndpointKind::Ipv4),
        ("255.255.255.255", EndpointKind::Ipv4),
        ("10.0.0.1:8080", EndpointKind::Ipv4),
        ("010.0.0.1", EndpointKind::Ipv4),
        ("192.168.001.001", EndpointKind::Ipv4),
        ("01.1.1.1", EndpointKind::Ipv4),
        ("256.1.1.1", EndpointKind::Invalid),
        ("192.168.001.300", EndpointKind::Invalid),
        ("10.0.0", EndpointKind::Invalid),
        ("2001:db8::1", EndpointKind::Ipv6),
        ("::1", EndpointKind::Ipv6),
        ("fe80::1ff:fe23:4567:890a", EndpointKind::Ipv6),
        ("[2001:db8::1]:443", EndpointKind::Ipv6),
        ("example.com", EndpointKind::Domain),
        ("https://www.example.com/path?x=1", EndpointKind::Domain),
        ("ftp://mirror.example.net", EndpointKind::Domain),
        ("db1.internal", EndpointKind::Domain),
        ("portal.example.com:8443", EndpointKind::Domain),
        ("internal-host", EndpointKind::Hostname),
        ("srv01.dc2", EndpointKind::Hostname),
        ("not a valid @@@ token", EndpointKind::Invalid),
        ("bad@@token", EndpointKind::Invalid),
        ("-leading-hyphen", EndpointKind::Invalid),
        ("under_score.example.com", EndpointKind::Invalid),
    ];

    for (token, expected) in table {
        assert_eq!(kind(token), *expected, "token {token:?}");
        assert_eq!(classify(token).is_valid, expected.is_valid(), "token {token:?}");
    }
}

#[test]
fn cascade_order_decides_overlapping_grammars() {
    let classifier = Classifier::default();

    let rule = classifier.matching_rule("db1.internal");
    assert_eq!(rule, Some(Rule::DomainUrl));
    assert!(
        Rule::CASCADE.iter().position(|r| *r == Rule::DomainUrl)
            < Rule::CASCADE.iter().position(|r| *r == Rule::DottedHostname)
    );
    assert_eq!(rule.map(Rule::kind), Some(EndpointKind::Domain));
}

#[test]
fn legacy_bare_port_follows_config() {
    let loose = Classifier::new(&Config {
        legacy_bare_port: true,
        ..Config::default()
    });
    let strict = Classifier::new(&Config::default());

    assert_eq!(loose.classify(":").kind, EndpointKind::Ipv6);
    assert_eq!(loose.classify("::99999").kind, EndpointKind::Ipv6);
    assert_eq!(strict.classify(":").kind, EndpointKind::Invalid);
    assert_eq!(strict.classify("::99999").kind, EndpointKind::Invalid);

    // Both agree on everything the legacy branch does not touch.
    for token in ["10.0.0.1", "example.com", "host", "bad@@token"] {
        assert_eq!(loose.classify(token), strict.classify(token), "{token}");
    }
}
