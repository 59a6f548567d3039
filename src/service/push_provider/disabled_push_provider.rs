use super::{dto::PushPayload, dto::SendOutcome, error::Error, PushProvider};
use async_trait::async_trait;

///
/// Stand-in wired when no push configuration is present.
///
pub struct DisabledPushProvider;

#[async_trait]
impl PushProvider for DisabledPushProvider {
    fn available(&self) -> bool {
        false
    }

    async fn send_multicast(
        &self,
        _tokens: &[String],
        _payload: &PushPayload,
    ) -> Result<Vec<SendOutcome>, Error> {
        Err(Error::Unavailable)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_available() {
        assert!(!DisabledPushProvider.available());
    }

    #[tokio::test]
    async fn send_multicast_unavailable() {
        let payload = PushPayload {
            title: "title".to_string(),
            body: "body".to_string(),
            link: None,
            tag: "tag".to_string(),
            icon: None,
            badge: None,
        };

        let send_result = DisabledPushProvider
            .send_multicast(&["token".to_string()], &payload)
            .await;

        assert!(matches!(send_result, Err(Error::Unavailable)));
    }
}
