use serde::{Deserialize, Serialize};

/// Generic EventBridge envelope: a discriminator plus an opaque detail
/// payload that is decoded once the discriminator is known.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct EventEnvelope {
    #[serde(rename = "detail-type", default)]
    pub detail_type: String,
    #[serde(default)]
    pub detail: serde_json::Value,
}

/// Typed view of an inbound event after decoding.
#[derive(Clone, Debug)]
pub enum EcsEvent {
    DeploymentStateChange(EcsDeploymentDetail),
    TaskStateChange(EcsTaskDetail),
    Unknown,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EcsDeploymentDetail {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EcsTaskDetail {
    #[serde(default)]
    pub cluster_arn: String,
    #[serde(default)]
    pub task_arn: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub last_status: String,
    #[serde(default)]
    pub stopped_reason: String,
    #[serde(default)]
    pub containers: Vec<ContainerInfo>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    // Absent for tasks that never started a container; 0 means a clean exit.
    #[serde(default)]
    pub exit_code: i32,
    #[serde(default)]
    pub reason: String,
}
