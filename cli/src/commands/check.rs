use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use asvscope_common::{Classifier, ValidationSummary, config::Config};
use colored::*;
use tracing::warn;

use crate::terminal::{colors, format, print};

pub fn check(
    entries: Vec<String>,
    file: Option<PathBuf>,
    verbose: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let raw: String = read_input(entries, file, io::stdin())?;
    let classifier: Classifier = Classifier::new(cfg);
    let summary: ValidationSummary = classifier.summarize(&raw);

    if cfg.json {
        print::print(&serde_json::to_string_pretty(&summary)?);
        summary.check_submittable()?;
        return Ok(());
    }

    if cfg.quiet < 2 {
        print_entries(&summary, &classifier, verbose);
    }
    print_verdict(&summary, cfg);

    Ok(summary.check_submittable()?)
}

/// A file wins over positional entries, which win over `stdin`.
fn read_input(
    entries: Vec<String>,
    file: Option<PathBuf>,
    stdin: impl Read,
) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read targets from {}", path.display()));
    }
    if !entries.is_empty() {
        return Ok(entries.join("\n"));
    }
    io::read_to_string(stdin).context("failed to read targets from stdin")
}

fn print_entries(summary: &ValidationSummary, classifier: &Classifier, verbose: bool) {
    let len: usize = summary.raw_entries.len();

    for (idx, (token, result)) in summary.iter().enumerate() {
        let rule = classifier.matching_rule(token.as_str());
        let details = format::entry_details(result, rule, verbose);
        print::entry(idx, &format::colored_token(token, result), &details);

        if idx + 1 != len {
            print::print("");
        }
    }
}

fn print_verdict(summary: &ValidationSummary, cfg: &Config) {
    if cfg.quiet == 0 {
        print::header("summary", cfg.quiet);
        print::field("IPs", summary.ips);
        print::field("Domains", summary.domains);
        print::field("Invalid", count_colored(summary.invalid_count));
        print::fat_separator();
    }

    let detected: String = summary.detected_message();
    match summary.check_submittable() {
        Ok(()) => {
            let output: ColoredString = format!("{detected} - ready to submit").color(colors::TEXT_DEFAULT);
            match cfg.quiet {
                0 => print::centerln(&output.to_string()),
                _ => print::status(output.to_string()),
            }
        }
        Err(_) if summary.total > 0 => warn!("{detected}"),
        Err(_) => {}
    }
}

fn count_colored(count: usize) -> ColoredString {
    let text: ColoredString = count.to_string().normal();
    if count == 0 { text.green() } else { text.red().bold() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asvscope_common::SubmissionError;
    use std::io::Write;

    fn json_config() -> Config {
        Config {
            json: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_read_input_prefers_file() {
        let mut targets = tempfile::NamedTempFile::new().unwrap();
        writeln!(targets, "10.0.0.1\nexample.com").unwrap();

        let raw = read_input(
            vec!["ignored.example".to_string()],
            Some(targets.path().to_path_buf()),
            "from-stdin".as_bytes(),
        )
        .unwrap();
        assert_eq!(raw, "10.0.0.1\nexample.com\n");
    }

    #[test]
    fn test_read_input_entries_before_stdin() {
        let entries = vec!["10.0.0.1,".to_string(), "example.com".to_string()];
        let raw = read_input(entries, None, "from-stdin".as_bytes()).unwrap();
        assert_eq!(raw, "10.0.0.1,\nexample.com");
    }

    #[test]
    fn test_read_input_falls_back_to_stdin() {
        let raw = read_input(Vec::new(), None, "db1.internal; 10.0.0.2".as_bytes()).unwrap();
        assert_eq!(raw, "db1.internal; 10.0.0.2");
    }

    #[test]
    fn test_read_input_missing_file() {
        let missing = PathBuf::from("/nonexistent/asvscope/targets.txt");
        let err = read_input(Vec::new(), Some(missing), io::empty()).unwrap_err();
        assert!(err.to_string().contains("failed to read targets from"));
    }

    #[test]
    fn test_check_accepts_valid_batch() {
        let entries = vec!["10.0.0.1 example.com internal-host".to_string()];
        assert!(check(entries, None, false, &Config::default()).is_ok());
        let entries = vec!["10.0.0.1".to_string()];
        assert!(check(entries, None, false, &json_config()).is_ok());
    }

    #[test]
    fn test_check_rejects_invalid_batch_in_json_mode() {
        let entries = vec!["10.0.0.1, example.com; bad@@token".to_string()];
        let err = check(entries, None, false, &json_config()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<SubmissionError>(),
            Some(&SubmissionError::InvalidEntries {
                count: 1,
                entries: vec!["bad@@token".to_string()],
            })
        );
    }

    #[test]
    fn test_check_rejects_empty_batch() {
        let entries = vec![" ; , ".to_string()];
        let err = check(entries, None, true, &Config::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SubmissionError>(),
            Some(&SubmissionError::NoEntries)
        );
    }
}
