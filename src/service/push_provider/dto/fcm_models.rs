use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FCM HTTP v1 send request
#[derive(Debug, Serialize)]
pub struct FcmMessage {
    pub message: FcmMessageContent,
}

///
/// Data-only message. The payload rides in the `data` envelope so that
/// the receiving client alone decides whether and how to render it;
/// a provider-rendered `notification` block would display a second time
/// next to the client's own handler.
///
#[derive(Debug, Serialize)]
pub struct FcmMessageContent {
    pub token: String,
    pub data: HashMap<String, String>,
}

/// FCM HTTP v1 send response
#[derive(Debug, Deserialize)]
pub struct FcmApiResponse {
    pub name: Option<String>,
}

/// FCM HTTP v1 error response
#[derive(Debug, Deserialize)]
pub struct FcmErrorBody {
    pub error: FcmErrorStatus,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorStatus {
    pub status: Option<String>,

    #[serde(default)]
    pub details: Vec<FcmErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorDetail {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
}

/// JWT claims of the OAuth2 service account flow
#[derive(Debug, Serialize)]
pub struct OauthJwtClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Deserialize)]
pub struct OauthTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct CachedAccessToken {
    pub access_token: String,
    pub expires_at: i64,
}
