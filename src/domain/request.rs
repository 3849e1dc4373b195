use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageBody, RawPhoneNumber};

pub const METHOD_SEND: &str = "send";
pub const METHOD_CHECK_AUTHORIZATION: &str = "checkAuthorization";
pub const METHOD_REQUEST_AUTHORIZATION: &str = "requestAuthorization";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound text message: who receives it and what it says.
pub struct SendRequest {
    recipient: RawPhoneNumber,
    body: MessageBody,
}

impl SendRequest {
    pub fn new(recipient: RawPhoneNumber, body: MessageBody) -> Self {
        Self { recipient, body }
    }

    /// Parse the untyped argument payload of a `send` call.
    ///
    /// Both `number` and `message` must be present, non-null strings; `number` must also be
    /// non-blank. Both are kept verbatim. A `null` payload is treated like an empty map.
    pub fn from_arguments(arguments: &Value) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let map = match arguments {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(ValidationError::Missing {
                    field: RawPhoneNumber::FIELD,
                });
            }
        };

        let number = string_argument(map, RawPhoneNumber::FIELD)?;
        let message = string_argument(map, MessageBody::FIELD)?;

        Ok(Self {
            recipient: RawPhoneNumber::new(number)?,
            body: MessageBody::new(message),
        })
    }

    pub fn recipient(&self) -> &RawPhoneNumber {
        &self.recipient
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub(crate) fn with_recipient(self, recipient: RawPhoneNumber) -> Self {
        Self { recipient, ..self }
    }
}

fn string_argument<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every operation the bridge answers, already parsed out of a channel call.
pub enum Operation {
    Send(SendRequest),
    CheckAuthorization,
    RequestAuthorization,
}

impl Operation {
    /// Resolve a method name to the operation it names, without looking at arguments.
    pub fn lookup(method: &str) -> Option<OperationKind> {
        Some(match method {
            METHOD_SEND => OperationKind::Send,
            METHOD_CHECK_AUTHORIZATION => OperationKind::CheckAuthorization,
            METHOD_REQUEST_AUTHORIZATION => OperationKind::RequestAuthorization,
            _ => return None,
        })
    }

    /// Channel method name for this operation.
    pub fn method(&self) -> &'static str {
        self.kind().method()
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Send(_) => OperationKind::Send,
            Self::CheckAuthorization => OperationKind::CheckAuthorization,
            Self::RequestAuthorization => OperationKind::RequestAuthorization,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Send,
    CheckAuthorization,
    RequestAuthorization,
}

impl OperationKind {
    pub fn method(self) -> &'static str {
        match self {
            Self::Send => METHOD_SEND,
            Self::CheckAuthorization => METHOD_CHECK_AUTHORIZATION,
            Self::RequestAuthorization => METHOD_REQUEST_AUTHORIZATION,
        }
    }

    /// Build the full operation from the call's argument payload.
    ///
    /// Authorization operations take no arguments and ignore whatever was sent.
    pub fn parse(self, arguments: &Value) -> Result<Operation, ValidationError> {
        Ok(match self {
            Self::Send => Operation::Send(SendRequest::from_arguments(arguments)?),
            Self::CheckAuthorization => Operation::CheckAuthorization,
            Self::RequestAuthorization => Operation::RequestAuthorization,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn send_request_parses_both_fields() {
        let request = SendRequest::from_arguments(&json!({
            "number": " +15551234567 ",
            "message": "hi",
        }))
        .unwrap();
        assert_eq!(request.recipient().raw(), " +15551234567 ");
        assert_eq!(request.body().as_str(), "hi");
    }

    #[test]
    fn send_request_rejects_missing_or_null_fields() {
        let err = SendRequest::from_arguments(&json!({ "number": null, "message": "hi" }))
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "number" });

        let err = SendRequest::from_arguments(&json!({ "number": "+15551234567" })).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "message" });

        let err = SendRequest::from_arguments(&Value::Null).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "number" });
    }

    #[test]
    fn send_request_rejects_non_string_and_blank_number() {
        let err = SendRequest::from_arguments(&json!({ "number": 15551234567u64, "message": "hi" }))
            .unwrap_err();
        assert_eq!(err, ValidationError::NotAString { field: "number" });

        let err =
            SendRequest::from_arguments(&json!({ "number": "  ", "message": "hi" })).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "number" });

        let err = SendRequest::from_arguments(&json!(["+15551234567", "hi"])).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "number" });
    }

    #[test]
    fn send_request_allows_empty_message() {
        let request =
            SendRequest::from_arguments(&json!({ "number": "+15551234567", "message": "" }))
                .unwrap();
        assert_eq!(request.body().as_str(), "");
    }

    #[test]
    fn lookup_resolves_known_methods_only() {
        assert_eq!(Operation::lookup("send"), Some(OperationKind::Send));
        assert_eq!(
            Operation::lookup("checkAuthorization"),
            Some(OperationKind::CheckAuthorization)
        );
        assert_eq!(
            Operation::lookup("requestAuthorization"),
            Some(OperationKind::RequestAuthorization)
        );
        assert_eq!(Operation::lookup("sendSms"), None);
        assert_eq!(Operation::lookup("Send"), None);
    }

    #[test]
    fn authorization_operations_ignore_arguments() {
        let op = OperationKind::CheckAuthorization
            .parse(&json!({ "junk": 1 }))
            .unwrap();
        assert_eq!(op, Operation::CheckAuthorization);
        assert_eq!(op.method(), "checkAuthorization");
    }
}
