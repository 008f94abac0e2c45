use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("failed to decode \"{detail_type}\" detail: {source}")]
    MalformedPayload {
        detail_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{channel} delivery failed: {reason}")]
    ChannelDelivery {
        channel: &'static str,
        reason: String,
    },
}
