mod classifier;
mod dispatch;
mod email;
mod filter;
mod handler;
mod normalizer;
mod slack;

use alert_defs::{EventEnvelope, NotifierConfig};
use alert_utils::setup_logging;
use dispatch::Dispatcher;
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging()?;

    let config = NotifierConfig::from_env();
    let dispatcher = Dispatcher::from_config(&config).await;

    let config_ref = &config;
    let dispatcher_ref = &dispatcher;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<EventEnvelope>| async move {
        handler::handle_event(event, config_ref, dispatcher_ref).await
    }))
    .await?;

    Ok(())
}
