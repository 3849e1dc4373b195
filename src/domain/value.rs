use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient phone number (`number`).
///
/// Invariant: not blank. The value is kept exactly as supplied, surrounding whitespace
/// included; if you want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Channel argument name carrying the recipient (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-blank) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Value exactly as handed to the transmitter.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Channel argument name carrying the recipient (`number`).
    pub const FIELD: &'static str = "number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Any string is accepted, including the empty string; the value is preserved verbatim.
pub struct MessageBody(String);

impl MessageBody {
    /// Channel argument name carrying the body (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sentinel returned to the caller when a message was handed to the telephony stack.
///
/// Invariant: non-empty after trimming, so it can never be confused with an empty reply.
pub struct SuccessToken(String);

impl SuccessToken {
    pub const DEFAULT: &'static str = "SMS_SENT_OK";

    const FIELD: &'static str = "success_token";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SuccessToken {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Host-granted permission gating a sensitive platform function.
pub enum Capability {
    SendSms,
}

impl Capability {
    /// Permission name as understood by the host (Android manifest permission string).
    pub fn host_name(self) -> &'static str {
        match self {
            Self::SendSms => "android.permission.SEND_SMS",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.host_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_phone_number_keeps_input_verbatim() {
        let raw = RawPhoneNumber::new(" +15551234567\n").unwrap();
        assert_eq!(raw.raw(), " +15551234567\n");
        assert!(RawPhoneNumber::new("").is_err());
        assert!(matches!(
            RawPhoneNumber::new("   "),
            Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+15551234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+1 555-123-4567").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+15551234567");
        assert_eq!(p2.raw(), "+1 555-123-4567");

        let raw: RawPhoneNumber = p2.into();
        assert_eq!(raw.raw(), "+15551234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_uses_default_region_for_national_input() {
        let pn = PhoneNumber::parse(Some(country::Id::US), " 555-123-4567 ").unwrap();
        assert_eq!(pn.raw(), "555-123-4567");
        assert_eq!(pn.e164(), "+15551234567");
    }

    #[test]
    fn message_body_is_preserved_verbatim() {
        assert_eq!(MessageBody::new(" hi ").as_str(), " hi ");
        assert_eq!(MessageBody::new("").as_str(), "");
    }

    #[test]
    fn success_token_defaults_and_rejects_blank() {
        assert_eq!(SuccessToken::default().as_str(), "SMS_SENT_OK");
        assert_eq!(SuccessToken::new(" DONE ").unwrap().as_str(), "DONE");
        assert!(SuccessToken::new("  ").is_err());
    }

    #[test]
    fn capability_maps_to_host_permission() {
        assert_eq!(
            Capability::SendSms.host_name(),
            "android.permission.SEND_SMS"
        );
        assert_eq!(
            Capability::SendSms.to_string(),
            "android.permission.SEND_SMS"
        );
    }
}
