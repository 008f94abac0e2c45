use alert_defs::{Notification, NotifierConfig};
use async_trait::async_trait;
use futures::future::join_all;
use log::{error, info};

use crate::email::EmailChannel;
use crate::slack::SlackChannel;

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Delivers one notification. Channels with missing configuration skip
    /// the send and return Ok.
    async fn send(&self, notification: &Notification) -> Result<(), anyhow::Error>;
}

pub struct Dispatcher {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl Dispatcher {
    pub async fn from_config(config: &NotifierConfig) -> Self {
        Dispatcher::new(vec![
            Box::new(SlackChannel::new(config)),
            Box::new(EmailChannel::new(config).await),
        ])
    }

    pub fn new(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Dispatcher { channels }
    }

    /// Attempts delivery on every channel concurrently. A failing channel
    /// is logged and does not abort the others; the invocation itself
    /// never fails because of a channel error.
    pub async fn dispatch(&self, notification: &Notification) -> usize {
        let sends = self.channels.iter().map(|channel| async move {
            match channel.send(notification).await {
                Ok(()) => {
                    info!("{} notification sent", channel.name());
                    true
                }
                Err(e) => {
                    error!("Error sending {} notification: {}", channel.name(), e);
                    false
                }
            }
        });

        join_all(sends)
            .await
            .into_iter()
            .filter(|delivered| *delivered)
            .count()
    }
}
