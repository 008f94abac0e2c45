use std::env;

/// Runtime configuration, loaded once at startup and passed by reference
/// into the pipeline. An empty environment variable counts as unset.
#[derive(Clone, Debug, Default)]
pub struct NotifierConfig {
    pub slack_webhook_url: Option<String>,
    pub sender_email: Option<String>,
    pub recipient_email: Option<String>,
    pub aws_region: Option<String>,
    pub monitored_services: Vec<String>,
}

impl NotifierConfig {
    pub fn from_env() -> Self {
        NotifierConfig {
            slack_webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
            sender_email: non_empty_var("SENDER_EMAIL"),
            recipient_email: non_empty_var("RECIPIENT_EMAIL"),
            aws_region: non_empty_var("AWS_REGION"),
            monitored_services: parse_service_list(
                &env::var("MONITORED_SERVICES").unwrap_or_default(),
            ),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Splits a comma-separated allowlist, trimming whitespace around each
/// entry. An empty input yields the empty list, meaning "monitor all".
pub fn parse_service_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_service_list_trims_entries() {
        let actual = parse_service_list("checkout-svc, billing-svc ,cart-svc");
        assert_eq!(actual, vec!["checkout-svc", "billing-svc", "cart-svc"]);
    }

    #[test]
    fn test_parse_service_list_empty_means_monitor_all() {
        assert_eq!(parse_service_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_parse_service_list_skips_blank_entries() {
        let actual = parse_service_list("checkout-svc,,  ,billing-svc");
        assert_eq!(actual, vec!["checkout-svc", "billing-svc"]);
    }
}
