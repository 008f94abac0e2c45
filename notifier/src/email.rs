use alert_defs::{Notification, NotifierConfig, NotifierError};
use async_trait::async_trait;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use log::info;

use crate::dispatch::NotificationChannel;

pub struct EmailChannel {
    client: aws_sdk_ses::Client,
    sender: Option<String>,
    recipient: Option<String>,
}

impl EmailChannel {
    pub async fn new(config: &NotifierConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let shared_config = loader.load().await;

        EmailChannel {
            client: aws_sdk_ses::Client::new(&shared_config),
            sender: config.sender_email.clone(),
            recipient: config.recipient_email.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "Email"
    }

    async fn send(&self, notification: &Notification) -> Result<(), anyhow::Error> {
        let (sender, recipient) = match (&self.sender, &self.recipient) {
            (Some(sender), Some(recipient)) => (sender, recipient),
            _ => {
                info!("Sender or recipient email not configured, skipping email notification");
                return Ok(());
            }
        };

        let destination = Destination::builder().to_addresses(recipient).build();
        let message = Message::builder()
            .subject(Content::builder().data(&notification.subject).build()?)
            .body(
                Body::builder()
                    .text(Content::builder().data(&notification.body).build()?)
                    .build(),
            )
            .build();

        self.client
            .send_email()
            .source(sender)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| NotifierError::ChannelDelivery {
                channel: "Email",
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
