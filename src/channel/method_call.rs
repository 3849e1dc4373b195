use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::ChannelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Untyped call as it arrives on the channel: `{"method": "...", "args": ...}`.
///
/// Routing and argument validation happen later, in the bridge; this type only guarantees
/// the message was well-formed.
pub struct RawMethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl RawMethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

pub fn decode_method_call(bytes: &[u8]) -> Result<RawMethodCall, ChannelError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ChannelError::Empty);
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_method_call(call: &RawMethodCall) -> Result<Vec<u8>, ChannelError> {
    Ok(serde_json::to_vec(call)?)
}
