use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Kind of device a push token was registered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceClass {
    Web,
    Ios,
    Android,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_lowercase() {
        let json = serde_json::to_string(&DeviceClass::Android).unwrap();

        assert_eq!(json, r#""android""#);
    }

    #[test]
    fn deserialize_lowercase() {
        let device_class: DeviceClass = serde_json::from_str(r#""web""#).unwrap();

        assert_eq!(device_class, DeviceClass::Web);
    }
}
