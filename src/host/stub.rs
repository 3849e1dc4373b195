//! Stub host for desktop/CI builds where the telephony stack is unavailable.
//!
//! Nothing is ever granted and every transmission fails; the real implementation lives in
//! the `android` module.

use crate::domain::{Capability, SendRequest};
use crate::host::{Authorization, Fault, Host, Transmitter};

const UNAVAILABLE: &str = "SMS is not available on this platform";

/// No-op host returned on non-mobile platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubHost;

impl Host for StubHost {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl Authorization for StubHost {
    fn is_granted(&self, capability: Capability) -> bool {
        tracing::warn!(%capability, "Authorization::is_granted called on stub host");
        false
    }

    fn request(&self, capability: Capability) -> Result<(), Fault> {
        tracing::warn!(%capability, "Authorization::request called on stub host");
        Err(Fault::new(UNAVAILABLE))
    }
}

impl Transmitter for StubHost {
    fn transmit(&self, _request: &SendRequest) -> Result<(), Fault> {
        tracing::warn!("Transmitter::transmit called on stub host");
        Err(Fault::new(UNAVAILABLE))
    }
}
