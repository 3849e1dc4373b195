use serde_json::{Value, json};

use crate::channel::ChannelError;

#[derive(Debug, Clone, PartialEq)]
/// Reply to one channel call.
///
/// Wire shapes: success `[value]`, error `[code, message|null, details|null]`, and the empty
/// reply for not-implemented.
pub enum Envelope {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    NotImplemented,
}

impl Envelope {
    pub fn error(code: impl Into<String>, message: Option<String>) -> Self {
        Self::Error {
            code: code.into(),
            message,
            details: Value::Null,
        }
    }
}

pub fn encode_envelope(envelope: &Envelope) -> Vec<u8> {
    match envelope {
        Envelope::Success(value) => json!([value]).to_string().into_bytes(),
        Envelope::Error {
            code,
            message,
            details,
        } => json!([code, message, details]).to_string().into_bytes(),
        Envelope::NotImplemented => Vec::new(),
    }
}

pub fn decode_envelope(bytes: &[u8]) -> Result<Envelope, ChannelError> {
    if bytes.is_empty() {
        return Ok(Envelope::NotImplemented);
    }

    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(mut items) if items.len() == 1 => Ok(Envelope::Success(items.remove(0))),
        Value::Array(items) if items.len() == 3 => {
            let mut items = items.into_iter();
            match (items.next(), items.next(), items.next()) {
                (Some(Value::String(code)), Some(Value::String(message)), Some(details)) => {
                    Ok(Envelope::Error {
                        code,
                        message: Some(message),
                        details,
                    })
                }
                (Some(Value::String(code)), Some(Value::Null), Some(details)) => {
                    Ok(Envelope::Error {
                        code,
                        message: None,
                        details,
                    })
                }
                (code, message, details) => Err(ChannelError::UnknownEnvelope {
                    shape: json!([code, message, details]).to_string(),
                }),
            }
        }
        other => Err(ChannelError::UnknownEnvelope {
            shape: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_a_single_element_array() {
        let bytes = encode_envelope(&Envelope::Success(json!("SMS_SENT_OK")));
        assert_eq!(bytes, br#"["SMS_SENT_OK"]"#);
        assert_eq!(
            decode_envelope(&bytes).unwrap(),
            Envelope::Success(json!("SMS_SENT_OK"))
        );
    }

    #[test]
    fn error_carries_code_message_and_details() {
        let envelope = Envelope::error("ERROR_SMS", Some("radio off".to_owned()));
        let bytes = encode_envelope(&envelope);
        assert_eq!(bytes, br#"["ERROR_SMS","radio off",null]"#);
        assert_eq!(decode_envelope(&bytes).unwrap(), envelope);

        let without_message = Envelope::error("NO_PERMISSION", None);
        assert_eq!(
            decode_envelope(&encode_envelope(&without_message)).unwrap(),
            without_message
        );
    }

    #[test]
    fn not_implemented_is_the_empty_reply() {
        assert!(encode_envelope(&Envelope::NotImplemented).is_empty());
        assert_eq!(decode_envelope(b"").unwrap(), Envelope::NotImplemented);
    }

    #[test]
    fn decode_rejects_unknown_shapes() {
        assert!(matches!(
            decode_envelope(b"[]"),
            Err(ChannelError::UnknownEnvelope { .. })
        ));
        assert!(matches!(
            decode_envelope(br#"[1, "x", null]"#),
            Err(ChannelError::UnknownEnvelope { .. })
        ));
        assert!(matches!(
            decode_envelope(br#"{"ok":true}"#),
            Err(ChannelError::UnknownEnvelope { .. })
        ));
        assert!(matches!(decode_envelope(b"[1,"), Err(ChannelError::Json(_))));
    }
}
