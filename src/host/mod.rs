//! Host layer: the platform capabilities the bridge consumes but does not implement.
//!
//! The bridge only ever talks to a [`Host`]; which one is used depends on the build target
//! (see [`platform_host`]). Tests supply their own fake.

use crate::domain::{Capability, SendRequest};

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
/// Runtime error raised by a platform API (no radio, carrier rejection, JNI failure, ...).
pub struct Fault {
    message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable message as reported by the platform.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Permission checks and prompts.
pub trait Authorization: Send + Sync {
    /// Whether `capability` is granted to this process right now.
    fn is_granted(&self, capability: Capability) -> bool;

    /// Ask the host to prompt the user for `capability`.
    ///
    /// Returns once the prompt has been launched. The user's answer is delivered to the host
    /// out of band and is never reported back through this call.
    fn request(&self, capability: Capability) -> Result<(), Fault>;
}

/// Outbound text messaging.
pub trait Transmitter: Send + Sync {
    /// Hand one message to the telephony stack. Synchronous; no retry.
    fn transmit(&self, request: &SendRequest) -> Result<(), Fault>;
}

/// Everything the bridge needs from the platform.
pub trait Host: Authorization + Transmitter {
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;
}

/// Host implementation for the target operating system.
pub fn platform_host() -> Box<dyn Host> {
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidHost::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Box::new(stub::StubHost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_displays_platform_message_verbatim() {
        let fault = Fault::new("radio off");
        assert_eq!(fault.to_string(), "radio off");
        assert_eq!(fault.message(), "radio off");
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn platform_host_is_stub_off_device() {
        let host = platform_host();
        assert_eq!(host.platform_name(), "Desktop (stub)");
        assert!(!host.is_granted(Capability::SendSms));
    }
}
