use std::str::FromStr;
use strum::{AsRefStr, EnumString};

///
/// Provider-reported classification of a failed delivery attempt.
///
/// Only [FailureReason::InvalidToken] and [FailureReason::Unregistered]
/// are permanent: the token can never succeed again and must be retired.
/// Every other reason is transient and leaves the token untouched.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum FailureReason {
    /// Token is not a valid registration token
    #[strum(serialize = "INVALID_ARGUMENT")]
    InvalidToken,

    /// Token was valid once but the device dropped its registration
    #[strum(serialize = "UNREGISTERED", serialize = "NOT_FOUND")]
    Unregistered,

    #[strum(serialize = "QUOTA_EXCEEDED")]
    QuotaExceeded,

    #[strum(serialize = "UNAVAILABLE")]
    Unavailable,

    #[strum(serialize = "INTERNAL")]
    Internal,

    Unknown,
}

impl FailureReason {
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code).unwrap_or(Self::Unknown)
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::InvalidToken | Self::Unregistered)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_code_known_codes() {
        assert_eq!(
            FailureReason::from_code("UNREGISTERED"),
            FailureReason::Unregistered
        );
        assert_eq!(
            FailureReason::from_code("NOT_FOUND"),
            FailureReason::Unregistered
        );
        assert_eq!(
            FailureReason::from_code("INVALID_ARGUMENT"),
            FailureReason::InvalidToken
        );
        assert_eq!(
            FailureReason::from_code("QUOTA_EXCEEDED"),
            FailureReason::QuotaExceeded
        );
    }

    #[test]
    fn from_code_unknown_code() {
        assert_eq!(
            FailureReason::from_code("THIRD_PARTY_AUTH_ERROR"),
            FailureReason::Unknown
        );
        assert_eq!(FailureReason::from_code(""), FailureReason::Unknown);
    }

    #[test]
    fn only_dead_token_reasons_are_permanent() {
        assert!(FailureReason::InvalidToken.is_permanent());
        assert!(FailureReason::Unregistered.is_permanent());

        assert!(!FailureReason::QuotaExceeded.is_permanent());
        assert!(!FailureReason::Unavailable.is_permanent());
        assert!(!FailureReason::Internal.is_permanent());
        assert!(!FailureReason::Unknown.is_permanent());
    }
}
