use alert_defs::{Classification, EcsDeploymentDetail, EcsEvent, EcsTaskDetail};
use alert_utils::{resource_name_from_arn, service_name_from_group};

/// Stop reasons produced by normal scale-in and scheduler churn; tasks
/// stopped for these reasons are not failures.
const BENIGN_STOP_REASONS: &[&str] = &["Scaling activity", "Service scheduler"];

/// Pure function of the decoded event: the same input always yields the
/// same classification.
pub fn classify(event: &EcsEvent) -> Classification {
    match event {
        EcsEvent::DeploymentStateChange(detail) => classify_deployment(detail),
        EcsEvent::TaskStateChange(detail) => classify_task(detail),
        EcsEvent::Unknown => no_alert(String::new()),
    }
}

/// The EventBridge rule in front of this lambda only forwards
/// failure-class deployment events, so every deployment event that reaches
/// this point alerts; `event_name` is not re-checked here.
fn classify_deployment(detail: &EcsDeploymentDetail) -> Classification {
    let service_name = resource_name_from_arn(&detail.service);
    Classification {
        is_alert: true,
        subject: format!("ECS Service Rollback/Failure: {}", service_name),
        body: format!(
            "*Service:* {}\n*Event:* {}\n*Reason:* {}\n*Cluster:* {}",
            service_name,
            detail.event_name,
            detail.reason,
            resource_name_from_arn(&detail.cluster)
        ),
        service_name,
    }
}

fn classify_task(detail: &EcsTaskDetail) -> Classification {
    let service_name = service_name_from_group(&detail.group);

    // Transitions other than STOPPED carry no failure signal.
    if detail.last_status != "STOPPED" {
        return no_alert(service_name);
    }

    let mut failure_details = String::new();
    for container in &detail.containers {
        if container.exit_code != 0 {
            failure_details.push_str(&format!(
                "- Container '{}' exited with code {} ({})\n",
                container.name, container.exit_code, container.reason
            ));
        }
    }

    // Tasks that failed to start leave no container exit code; a stop
    // reason outside the benign set still counts as a failure.
    if failure_details.is_empty()
        && !detail.stopped_reason.is_empty()
        && !is_benign_stop(&detail.stopped_reason)
    {
        failure_details.push_str(&format!("- Task stopped: {}\n", detail.stopped_reason));
    }

    if failure_details.is_empty() {
        return no_alert(service_name);
    }

    Classification {
        is_alert: true,
        subject: format!("⚠️ ECS Task Failure: {}", service_name),
        body: format!(
            "*Service:* {}\n*Task ARN:* {}\n*Failure Details:*\n{}",
            service_name, detail.task_arn, failure_details
        ),
        service_name,
    }
}

fn is_benign_stop(reason: &str) -> bool {
    BENIGN_STOP_REASONS
        .iter()
        .any(|pattern| reason.contains(pattern))
}

fn no_alert(service_name: String) -> Classification {
    Classification {
        is_alert: false,
        subject: String::new(),
        body: String::new(),
        service_name,
    }
}
