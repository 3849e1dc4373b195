//! Native bridge exposing SMS sending to a cross-platform application layer.
//!
//! The design has four small layers: a domain layer of strong types, a channel layer for
//! the JSON method-call wire format, a host layer abstracting the platform's permission
//! and telephony APIs, and the bridge that routes one to the other.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sms_bridge::{MessageBody, RawPhoneNumber, SendRequest, SmsDispatchBridge, platform_host};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bridge = SmsDispatchBridge::new(Arc::from(platform_host()));
//!     let request = SendRequest::new(
//!         RawPhoneNumber::new("+15551234567")?,
//!         MessageBody::new("hello"),
//!     );
//!     let token = bridge.send(request)?;
//!     println!("{}", token.as_str());
//!     Ok(())
//! }
//! ```
#![cfg_attr(not(target_os = "android"), forbid(unsafe_code))]

pub mod bridge;
pub mod channel;
pub mod config;
pub mod domain;
pub mod host;

pub use bridge::{BridgeError, SmsDispatchBridge, SmsDispatchBridgeBuilder};
pub use channel::{ChannelError, DEFAULT_CHANNEL, Envelope, RawMethodCall};
pub use config::{BridgeConfig, ConfigError};
pub use domain::{
    Capability, ErrorKind, MessageBody, Operation, PhoneNumber, RawPhoneNumber, Reply,
    SendRequest, SuccessToken, ValidationError,
};
pub use host::{Authorization, Fault, Host, Transmitter, platform_host};
