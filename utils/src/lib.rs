mod arn;
mod logging;

pub use arn::{resource_name_from_arn, service_name_from_group, UNKNOWN_SERVICE};
pub use logging::setup_logging;
