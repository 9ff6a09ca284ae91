#![cfg(test)]
use asvscope_common::{EndpointKind, SubmissionError, summarize, tokenize};

#[test]
fn mixed_list_is_rejected() {
    let summary = summarize("10.0.0.1, example.com; bad@@token");

    assert_eq!(summary.ips, 1);
    assert_eq!(summary.domains, 1);
    assert_eq!(summary.invalid_count, 1);
    assert_eq!(summary.total, 2);
    assert!(summary.has_invalid);

    let err = summary.check_submittable().unwrap_err();
    assert_eq!(err.to_string(), "found 1 invalid entry: bad@@token");
}

#[test]
fn blank_input_has_nothing_to_submit() {
    for raw in ["", "   ", "\n\t"] {
        let summary = summarize(raw);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.invalid_count, 0);
        assert!(!summary.has_invalid);
        assert!(summary.entries.is_empty());
        assert_eq!(summary.check_submittable(), Err(SubmissionError::NoEntries));
    }
}

#[test]
fn pasted_scope_list_is_accepted() {
    let raw = "\
        203.0.113.10\n\
        203.0.113.11:8443\n\
        2001:db8:abcd::10\n\
        shop.example.com, api.example.com\n\
        vpn-gw\n";
    let summary = summarize(raw);

    assert_eq!(summary.count(EndpointKind::Ipv4), 2);
    assert_eq!(summary.count(EndpointKind::Ipv6), 1);
    assert_eq!(summary.count(EndpointKind::Domain), 2);
    assert_eq!(summary.count(EndpointKind::Hostname), 1);
    assert_eq!(
        summary.detected_message(),
        "Detected: 2 IPv4, 1 IPv6, 2 Domain, 1 Hostname"
    );
    assert!(summary.is_submittable());
}

#[test]
fn summary_tracks_tokenizer_output() {
    let raw = "a.io;;b.io  ,c@d\n\n[::1]:80";
    let tokens = tokenize(raw);
    let summary = summarize(raw);

    assert_eq!(summary.raw_entries, tokens);
    assert_eq!(
        summary.ips + summary.domains + summary.invalid_count,
        tokens.len()
    );
    assert_eq!(summary.invalid_entries(), vec!["c@d"]);
}

#[test]
fn json_matches_external_shape() -> anyhow::Result<()> {
    let summary = summarize("10.0.0.1 example.com");
    let value = serde_json::to_value(&summary)?;

    let keys: Vec<&str> = value
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    for key in [
        "ips",
        "domains",
        "total",
        "invalidCount",
        "hasInvalid",
        "entries",
        "rawEntries",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(value["entries"][1]["kind"], "domain");

    let back: asvscope_common::ValidationSummary = serde_json::from_value(value)?;
    assert_eq!(back, summary);
    Ok(())
}
