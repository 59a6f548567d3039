use super::{
    dto::{
        CachedAccessToken, FcmApiResponse, FcmErrorBody, FcmMessage, FcmMessageContent,
        FailureReason, OauthJwtClaims, OauthTokenResponse, PushPayload, SendOutcome,
        ServiceAccountKey,
    },
    error::Error,
    PushProvider,
};
use async_trait::async_trait;
use futures_util::future;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::{collections::HashMap, sync::Mutex};
use time::OffsetDateTime;

const FCM_ENDPOINT: &str = "https://fcm.googleapis.com";
const OAUTH_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const OAUTH_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Access token is refreshed when it has less lifetime left than this
const ACCESS_TOKEN_LEEWAY_SECONDS: i64 = 60;

///
/// FCM HTTP v1 implementation of [PushProvider].
///
/// One `messages:send` call is issued per token; the calls of one
/// multicast run concurrently and their outcomes are collected in
/// input order.
///
pub struct FcmPushProvider {
    credentials: ServiceAccountKey,
    endpoint: String,
    token_cache: Mutex<Option<CachedAccessToken>>,
    http_client: reqwest::Client,
}

impl FcmPushProvider {
    pub fn new(credentials: ServiceAccountKey) -> Self {
        Self {
            credentials,
            endpoint: FCM_ENDPOINT.to_string(),
            token_cache: Mutex::new(None),
            http_client: reqwest::Client::new(),
        }
    }

    async fn send_one(
        &self,
        access_token: &str,
        token: String,
        data: HashMap<String, String>,
    ) -> SendOutcome {
        let message = FcmMessage {
            message: FcmMessageContent { token, data },
        };

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.endpoint, self.credentials.project_id
        );

        let response = match self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&message)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%err, "push send request failed");
                return SendOutcome::failure(FailureReason::Unknown);
            }
        };

        if response.status().is_success() {
            let message_id = response
                .json::<FcmApiResponse>()
                .await
                .ok()
                .and_then(|response| response.name)
                .unwrap_or_default();
            return SendOutcome::success(message_id);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let reason = failure_reason_from_error_body(&body);
        tracing::debug!(%status, reason = reason.as_ref(), "push send rejected");

        SendOutcome::failure(reason)
    }

    async fn access_token(&self) -> Result<String, Error> {
        {
            let cache = self.token_cache.lock().expect("token cache lock poisoned");
            if let Some(cached) = cache.as_ref() {
                let now = OffsetDateTime::now_utc().unix_timestamp();
                if cached.expires_at > now + ACCESS_TOKEN_LEEWAY_SECONDS {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = OauthJwtClaims {
            iss: self.credentials.client_email.clone(),
            scope: OAUTH_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            iat: now,
            exp: now + 3600,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?;

        let params = [("grant_type", OAUTH_GRANT_TYPE), ("assertion", &assertion)];
        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::AccessToken("token endpoint rejected request"));
        }

        let token_response = response
            .json::<OauthTokenResponse>()
            .await
            .map_err(|_| Error::AccessToken("invalid token endpoint response"))?;

        let expires_at = OffsetDateTime::now_utc().unix_timestamp() + token_response.expires_in;
        {
            let mut cache = self.token_cache.lock().expect("token cache lock poisoned");
            *cache = Some(CachedAccessToken {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }
}

#[async_trait]
impl PushProvider for FcmPushProvider {
    fn available(&self) -> bool {
        true
    }

    async fn send_multicast(
        &self,
        tokens: &[String],
        payload: &PushPayload,
    ) -> Result<Vec<SendOutcome>, Error> {
        let access_token = self.access_token().await?;
        let data = payload.to_data();

        let sends = tokens
            .iter()
            .map(|token| self.send_one(&access_token, token.clone(), data.clone()));
        let outcomes = future::join_all(sends).await;

        Ok(outcomes)
    }
}

fn failure_reason_from_error_body(body: &str) -> FailureReason {
    let Ok(error_body) = serde_json::from_str::<FcmErrorBody>(body) else {
        return FailureReason::Unknown;
    };

    let error_code = error_body
        .error
        .details
        .iter()
        .find_map(|detail| detail.error_code.as_deref())
        .or(error_body.error.status.as_deref());

    match error_code {
        Some(code) => FailureReason::from_code(code),
        None => FailureReason::Unknown,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn failure_reason_parsed_from_error_code_detail() {
        let body = r#"{
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND",
                "details": [
                    {
                        "@type": "type.googleapis.com/google.firebase.fcm.v1.FcmError",
                        "errorCode": "UNREGISTERED"
                    }
                ]
            }
        }"#;

        assert_eq!(
            failure_reason_from_error_body(body),
            FailureReason::Unregistered
        );
    }

    #[test]
    fn failure_reason_falls_back_to_status() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "The registration token is not a valid FCM registration token",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        assert_eq!(
            failure_reason_from_error_body(body),
            FailureReason::InvalidToken
        );
    }

    #[test]
    fn failure_reason_unparsable_body() {
        assert_eq!(
            failure_reason_from_error_body("<html>502 Bad Gateway</html>"),
            FailureReason::Unknown
        );
        assert_eq!(failure_reason_from_error_body(""), FailureReason::Unknown);
    }
}
