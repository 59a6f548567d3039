#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("push provider not configured")]
    Unavailable,

    #[error("signing access token request failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("fetching access token failed: {0}")]
    AccessToken(&'static str),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
