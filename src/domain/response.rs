use crate::domain::value::SuccessToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful outcome of an operation.
pub enum Reply {
    /// The message was handed to the telephony stack.
    Sent(SuccessToken),
    /// Whether the send capability is currently granted.
    Authorization(bool),
    /// A permission prompt was launched; its outcome is not awaited.
    AuthorizationRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Reason a call was rejected.
pub enum ErrorKind {
    InvalidArguments,
    NoPermission,
    SendFailure,
    NotImplemented,
    AuthorizationRequestFailed,
    MalformedCall,
}

impl ErrorKind {
    /// Error code carried in the channel's error envelope.
    ///
    /// `NotImplemented` has no code: it is signalled by an empty reply.
    pub fn code(self) -> Option<&'static str> {
        Some(match self {
            Self::InvalidArguments => "INVALID_ARGS",
            Self::NoPermission => "NO_PERMISSION",
            Self::SendFailure => "ERROR_SMS",
            Self::AuthorizationRequestFailed => "REQUEST_FAILED",
            Self::MalformedCall => "MALFORMED_CALL",
            Self::NotImplemented => return None,
        })
    }

    /// Map an envelope error code back to its kind, if known.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "INVALID_ARGS" => Self::InvalidArguments,
            "NO_PERMISSION" => Self::NoPermission,
            "ERROR_SMS" => Self::SendFailure,
            "REQUEST_FAILED" => Self::AuthorizationRequestFailed,
            "MALFORMED_CALL" => Self::MalformedCall,
            _ => return None,
        })
    }

    /// Whether resubmitting the same call could succeed without any change on the host.
    pub fn is_caller_fixable(self) -> bool {
        matches!(self, Self::InvalidArguments | Self::MalformedCall)
    }
}
