use alert_defs::NotifierConfig;

/// An empty allowlist monitors every service; otherwise membership is
/// exact and case-sensitive.
pub fn is_monitored(config: &NotifierConfig, service_name: &str) -> bool {
    config.monitored_services.is_empty()
        || config
            .monitored_services
            .iter()
            .any(|monitored| monitored == service_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(services: &[&str]) -> NotifierConfig {
        NotifierConfig {
            monitored_services: services.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_allowlist_passes_everything() {
        let config = config_with(&[]);
        assert!(is_monitored(&config, "checkout-svc"));
        assert!(is_monitored(&config, ""));
        assert!(is_monitored(&config, "Unknown (Task run manually?)"));
    }

    #[test]
    fn test_membership_is_exact() {
        let config = config_with(&["checkout-svc"]);
        assert!(is_monitored(&config, "checkout-svc"));
        assert!(!is_monitored(&config, "billing-svc"));
        assert!(!is_monitored(&config, "Checkout-Svc"));
        assert!(!is_monitored(&config, "checkout"));
    }
}
