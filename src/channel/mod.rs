//! Channel layer: wire format of method calls and their reply envelopes (JSON).

mod envelope;
mod method_call;

pub use envelope::{Envelope, decode_envelope, encode_envelope};
pub use method_call::{RawMethodCall, decode_method_call, encode_method_call};

/// Channel name the application layer binds to unless configured otherwise.
pub const DEFAULT_CHANNEL: &str = "com.seuapp.sms/send_direct";

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid JSON message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty message")]
    Empty,

    #[error("unrecognized envelope shape: {shape}")]
    UnknownEnvelope { shape: String },
}
