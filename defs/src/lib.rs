mod config;
mod errors;
mod event;
mod notification;

pub use config::{parse_service_list, NotifierConfig};
pub use errors::NotifierError;
pub use event::{ContainerInfo, EcsDeploymentDetail, EcsEvent, EcsTaskDetail, EventEnvelope};
pub use notification::{Classification, Notification};
