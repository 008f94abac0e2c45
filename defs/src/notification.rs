/// Output of the classifier: whether the event warrants an alert, the
/// composed message, and the resolved service name used for filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub is_alert: bool,
    pub subject: String,
    pub body: String,
    pub service_name: String,
}

/// One outbound message, delivered once per configured channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}
