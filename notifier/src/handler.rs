use alert_defs::{EcsEvent, EventEnvelope, Notification, NotifierConfig};
use lambda_runtime::{Error, LambdaEvent};
use log::info;
use serde_json::{json, Value};

use crate::classifier::classify;
use crate::dispatch::Dispatcher;
use crate::filter::is_monitored;
use crate::normalizer::normalize;

/// Runs one event through the pipeline: normalize, classify, filter,
/// dispatch. Only a malformed detail payload fails the invocation; every
/// other outcome is reported in the returned status value.
pub async fn handle_event(
    event: LambdaEvent<EventEnvelope>,
    config: &NotifierConfig,
    dispatcher: &Dispatcher,
) -> Result<Value, Error> {
    let (envelope, _context) = event.into_parts();
    info!("Received event: {}", envelope.detail_type);

    let ecs_event = normalize(&envelope)?;
    if matches!(ecs_event, EcsEvent::Unknown) {
        return Ok(json!({
            "status": "ignored",
            "detail_type": envelope.detail_type,
        }));
    }

    let classification = classify(&ecs_event);

    if !is_monitored(config, &classification.service_name) {
        info!(
            "Skipping alert for service '{}' (not in allowed list)",
            classification.service_name
        );
        return Ok(json!({
            "status": "filtered",
            "service": classification.service_name,
        }));
    }

    if !classification.is_alert {
        info!("Event processed, no alert conditions met");
        return Ok(json!({
            "status": "no_alert",
            "service": classification.service_name,
        }));
    }

    let notification = Notification {
        subject: classification.subject,
        body: classification.body,
    };
    let delivered = dispatcher.dispatch(&notification).await;

    Ok(json!({
        "status": "alerted",
        "service": classification.service_name,
        "delivered_channels": delivered,
    }))
}
