use asvscope_common::{ClassificationResult, Classifier, config::Config};

use crate::terminal::{format, print};

pub fn classify(token: &str, verbose: bool, cfg: &Config) -> anyhow::Result<()> {
    let classifier: Classifier = Classifier::new(cfg);
    let result: ClassificationResult = classifier.classify(token);

    if cfg.json {
        print::print(&serde_json::to_string(&result)?);
    } else {
        print::field("Target", token);
        print::field("Kind", format::colored_kind(result.kind));
        if verbose {
            let rule: String = classifier
                .matching_rule(token)
                .map_or_else(|| "no rule matched".to_string(), |rule| rule.to_string());
            print::field("Rule", rule);
        }
    }

    if !result.is_valid {
        anyhow::bail!("'{token}' is not an IP address, domain or hostname");
    }
    Ok(())
}
