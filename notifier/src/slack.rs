use std::time::Duration;

use alert_defs::{Notification, NotifierConfig, NotifierError};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde_json::json;

use crate::dispatch::NotificationChannel;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SlackChannel {
    webhook_url: Option<String>,
    client: Client,
}

impl SlackChannel {
    pub fn new(config: &NotifierConfig) -> Self {
        SlackChannel {
            webhook_url: config.slack_webhook_url.clone(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl NotificationChannel for SlackChannel {
    fn name(&self) -> &'static str {
        "Slack"
    }

    async fn send(&self, notification: &Notification) -> Result<(), anyhow::Error> {
        let webhook_url = match &self.webhook_url {
            Some(url) => url,
            None => {
                info!("Slack webhook URL not configured, skipping Slack notification");
                return Ok(());
            }
        };

        let payload = json!({
            "text": notification.body,
        });

        let response = self
            .client
            .post(webhook_url)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifierError::ChannelDelivery {
                channel: "Slack",
                reason: format!("received non-2xx response: {}", response.status()),
            }
            .into());
        }

        Ok(())
    }
}
