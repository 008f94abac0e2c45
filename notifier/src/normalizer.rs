use alert_defs::{EcsDeploymentDetail, EcsEvent, EcsTaskDetail, EventEnvelope, NotifierError};
use serde::de::DeserializeOwned;

pub const DEPLOYMENT_STATE_CHANGE: &str = "ECS Deployment State Change";
pub const TASK_STATE_CHANGE: &str = "ECS Task State Change";

/// Decodes the opaque detail payload into the typed record matching the
/// envelope's detail type. Unrecognized detail types are not an error, the
/// event simply produces no alert.
pub fn normalize(envelope: &EventEnvelope) -> Result<EcsEvent, NotifierError> {
    match envelope.detail_type.as_str() {
        DEPLOYMENT_STATE_CHANGE => {
            let detail: EcsDeploymentDetail = decode_detail(envelope)?;
            Ok(EcsEvent::DeploymentStateChange(detail))
        }
        TASK_STATE_CHANGE => {
            let detail: EcsTaskDetail = decode_detail(envelope)?;
            Ok(EcsEvent::TaskStateChange(detail))
        }
        _ => Ok(EcsEvent::Unknown),
    }
}

fn decode_detail<T: DeserializeOwned>(envelope: &EventEnvelope) -> Result<T, NotifierError> {
    serde_json::from_value(envelope.detail.clone()).map_err(|source| {
        NotifierError::MalformedPayload {
            detail_type: envelope.detail_type.clone(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn envelope(detail_type: &str, detail: serde_json::Value) -> EventEnvelope {
        EventEnvelope {
            detail_type: detail_type.to_string(),
            detail,
        }
    }

    #[test]
    fn test_decodes_task_state_change() {
        let envelope = envelope(
            TASK_STATE_CHANGE,
            json!({
                "clusterArn": "arn:aws:ecs:us-east-1:123:cluster/prod",
                "taskArn": "arn:aws:ecs:us-east-1:123:task/prod/abc",
                "group": "service:checkout-svc",
                "lastStatus": "STOPPED",
                "stoppedReason": "",
                "containers": [
                    {"name": "app", "image": "app:latest", "exitCode": 137, "reason": "OOMKilled"}
                ]
            }),
        );

        let event = normalize(&envelope).unwrap();
        match event {
            EcsEvent::TaskStateChange(detail) => {
                assert_eq!(detail.group, "service:checkout-svc");
                assert_eq!(detail.containers.len(), 1);
                assert_eq!(detail.containers[0].exit_code, 137);
            }
            other => panic!("expected task state change, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_default_instead_of_failing() {
        let envelope = envelope(DEPLOYMENT_STATE_CHANGE, json!({}));

        let event = normalize(&envelope).unwrap();
        match event {
            EcsEvent::DeploymentStateChange(detail) => assert_eq!(detail.event_name, ""),
            other => panic!("expected deployment state change, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_detail_is_an_error() {
        let envelope = envelope(TASK_STATE_CHANGE, json!({"containers": "not-a-list"}));

        let err = normalize(&envelope).unwrap_err();
        match err {
            NotifierError::MalformedPayload { detail_type, .. } => {
                assert_eq!(detail_type, TASK_STATE_CHANGE);
            }
            other => panic!("expected malformed payload error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_detail_type_is_not_an_error() {
        let envelope = envelope("ECS Container Instance State Change", json!({"anything": 1}));

        assert!(matches!(normalize(&envelope).unwrap(), EcsEvent::Unknown));
    }
}
