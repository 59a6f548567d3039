use super::FailureReason;

///
/// Outcome of one delivery attempt within a multicast.
///
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub message_id: Option<String>,
    pub error: Option<FailureReason>,
}

impl SendOutcome {
    pub fn success(message_id: String) -> Self {
        Self {
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failure(reason: FailureReason) -> Self {
        Self {
            message_id: None,
            error: Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
