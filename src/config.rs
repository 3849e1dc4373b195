//! Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::channel::DEFAULT_CHANNEL;
use crate::domain::{SuccessToken, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Validation(#[from] ValidationError),
}

/// Settings for [`SmsDispatchBridge`](crate::SmsDispatchBridge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Channel name the application layer binds to.
    pub channel: String,
    /// Value returned by a successful `send`.
    pub success_token: String,
    /// Parse recipients as international numbers and hand them to the transmitter in E.164.
    pub normalize_recipients: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_owned(),
            success_token: SuccessToken::DEFAULT.to_owned(),
            normalize_recipients: false,
        }
    }
}

impl BridgeConfig {
    /// Read a config from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.success_token()?;
        Ok(config)
    }

    pub(crate) fn success_token(&self) -> Result<SuccessToken, ValidationError> {
        SuccessToken::new(self.success_token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_canonical_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.channel, "com.seuapp.sms/send_direct");
        assert_eq!(config.success_token, "SMS_SENT_OK");
        assert!(!config.normalize_recipients);
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = BridgeConfig::from_json(r#"{ "normalize_recipients": true }"#).unwrap();
        assert!(config.normalize_recipients);
        assert_eq!(config.success_token, "SMS_SENT_OK");

        let config = BridgeConfig::from_json("{}").unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn from_json_rejects_blank_token_and_bad_json() {
        assert!(matches!(
            BridgeConfig::from_json(r#"{ "success_token": "  " }"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            BridgeConfig::from_json("{ nope"),
            Err(ConfigError::Json(_))
        ));
    }
}
