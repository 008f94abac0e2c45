/// Placeholder service name for tasks launched outside a service, whose
/// group carries no `service:` prefix.
pub const UNKNOWN_SERVICE: &str = "Unknown (Task run manually?)";

/// Extracts "my-service" from "arn:aws:ecs:us-east-1:123:service/my-service".
/// Values without a slash are returned unchanged.
pub fn resource_name_from_arn(arn: &str) -> String {
    match arn.rsplit('/').next() {
        Some(name) => name.to_string(),
        None => arn.to_string(),
    }
}

/// Extracts the service name from an ECS task group such as
/// "service:my-service" or "family:my-task".
pub fn service_name_from_group(group: &str) -> String {
    match group.split(':').nth(1) {
        Some(name) => name.to_string(),
        None => UNKNOWN_SERVICE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resource_name_from_service_arn() {
        let actual = resource_name_from_arn("arn:aws:ecs:us-east-1:123:service/my-service");
        assert_eq!(actual, "my-service");
    }

    #[test]
    fn test_resource_name_without_slash_is_unchanged() {
        assert_eq!(resource_name_from_arn("no-slash-value"), "no-slash-value");
    }

    #[test]
    fn test_service_name_from_group() {
        assert_eq!(service_name_from_group("service:checkout-svc"), "checkout-svc");
        assert_eq!(service_name_from_group("family:my-task"), "my-task");
    }

    #[test]
    fn test_service_name_fallback_for_manual_tasks() {
        assert_eq!(service_name_from_group("manual"), UNKNOWN_SERVICE);
    }
}
