//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    METHOD_CHECK_AUTHORIZATION, METHOD_REQUEST_AUTHORIZATION, METHOD_SEND, Operation,
    OperationKind, SendRequest,
};
pub use response::{ErrorKind, Reply};
pub use validation::ValidationError;
pub use value::{Capability, MessageBody, PhoneNumber, RawPhoneNumber, SuccessToken};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn =
            PhoneNumber::parse(Some(phonenumber::country::Id::US), "(555) 123-4567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+15551234567");
    }

    #[test]
    fn typed_request_matches_parsed_request() {
        let typed = SendRequest::new(
            RawPhoneNumber::new("+15551234567").unwrap(),
            MessageBody::new("hi"),
        );
        let parsed =
            SendRequest::from_arguments(&json!({ "number": "+15551234567", "message": "hi" }))
                .unwrap();
        assert_eq!(typed, parsed);
    }

    #[test]
    fn unknown_method_is_rejected_before_arguments_are_read() {
        assert!(Operation::lookup("delete").is_none());
        let op = Operation::lookup(METHOD_SEND)
            .unwrap()
            .parse(&json!({ "number": "+15551234567", "message": "hi" }))
            .unwrap();
        assert!(matches!(op, Operation::Send(_)));
    }
}
