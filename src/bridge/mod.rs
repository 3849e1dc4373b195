//! Bridge layer: routes channel calls to operations and operations to the host.

use std::sync::Arc;

use serde_json::Value;

use crate::channel::{
    ChannelError, Envelope, RawMethodCall, decode_method_call, encode_envelope,
};
use crate::config::{BridgeConfig, ConfigError};
use crate::domain::{
    Capability, ErrorKind, Operation, PhoneNumber, Reply, SendRequest, SuccessToken,
    ValidationError,
};
use crate::host::{Fault, Host};

const NO_PERMISSION_MESSAGE: &str = "SMS permission denied";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsDispatchBridge`].
///
/// Every variant is local to the call that produced it; none leaves the bridge unusable.
pub enum BridgeError {
    /// A required argument was missing, null, or malformed. Nothing was transmitted.
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// The host has not granted the capability. Nothing was transmitted.
    #[error("permission not granted: {capability}")]
    NoPermission { capability: Capability },

    /// The transmitter raised a fault. The message is the platform's, verbatim.
    #[error("send failed: {0}")]
    SendFailure(#[source] Fault),

    /// The method name is not one the bridge answers.
    #[error("method not implemented: {method}")]
    NotImplemented { method: String },

    /// The host could not launch the permission prompt.
    #[error("authorization request failed: {0}")]
    AuthorizationRequestFailed(#[source] Fault),

    /// The channel message could not be decoded.
    #[error("malformed call: {0}")]
    Channel(#[from] ChannelError),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments(_) => ErrorKind::InvalidArguments,
            Self::NoPermission { .. } => ErrorKind::NoPermission,
            Self::SendFailure(_) => ErrorKind::SendFailure,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::AuthorizationRequestFailed(_) => ErrorKind::AuthorizationRequestFailed,
            Self::Channel(_) => ErrorKind::MalformedCall,
        }
    }

    /// Human-readable detail sent alongside the error code.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidArguments(err) => Some(err.to_string()),
            Self::NoPermission { .. } => Some(NO_PERMISSION_MESSAGE.to_owned()),
            Self::SendFailure(fault) | Self::AuthorizationRequestFailed(fault) => {
                Some(fault.message().to_owned())
            }
            Self::NotImplemented { .. } => None,
            Self::Channel(err) => Some(err.to_string()),
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        match self.kind().code() {
            Some(code) => Envelope::error(code, self.detail()),
            None => Envelope::NotImplemented,
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmsDispatchBridge`].
pub struct SmsDispatchBridgeBuilder {
    host: Arc<dyn Host>,
    config: BridgeConfig,
}

impl SmsDispatchBridgeBuilder {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self {
            host,
            config: BridgeConfig::default(),
        }
    }

    /// Replace every setting at once.
    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.config.channel = channel.into();
        self
    }

    pub fn success_token(mut self, token: impl Into<String>) -> Self {
        self.config.success_token = token.into();
        self
    }

    pub fn normalize_recipients(mut self, normalize: bool) -> Self {
        self.config.normalize_recipients = normalize;
        self
    }

    pub fn build(self) -> Result<SmsDispatchBridge, ConfigError> {
        let success_token = self.config.success_token()?;
        Ok(SmsDispatchBridge::assemble(
            self.host,
            self.config,
            success_token,
        ))
    }
}

#[derive(Clone)]
/// Exposes SMS sending to the application layer.
///
/// Each call is independent: validate, check the permission, transmit once, reply. The bridge
/// holds no per-call state, so one instance can serve concurrent callers; two identical calls
/// produce two transmissions.
pub struct SmsDispatchBridge {
    /// Informational: the name the application layer binds to. Routing never reads it.
    channel: String,
    success_token: SuccessToken,
    normalize_recipients: bool,
    host: Arc<dyn Host>,
}

impl SmsDispatchBridge {
    /// Create a bridge with the default configuration.
    pub fn new(host: Arc<dyn Host>) -> Self {
        let config = BridgeConfig::default();
        let success_token = config.success_token().unwrap_or_default();
        Self::assemble(host, config, success_token)
    }

    fn assemble(host: Arc<dyn Host>, config: BridgeConfig, success_token: SuccessToken) -> Self {
        Self {
            channel: config.channel,
            success_token,
            normalize_recipients: config.normalize_recipients,
            host,
        }
    }

    pub fn builder(host: Arc<dyn Host>) -> SmsDispatchBridgeBuilder {
        SmsDispatchBridgeBuilder::new(host)
    }

    /// Channel name the application layer should bind this bridge to.
    ///
    /// Only reported to the embedding code; calls are routed by method name alone.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn platform_name(&self) -> &str {
        self.host.platform_name()
    }

    /// Send one SMS.
    ///
    /// Errors:
    /// - [`BridgeError::InvalidArguments`] when recipient normalization is on and the number
    ///   does not parse,
    /// - [`BridgeError::NoPermission`] when the send capability is not granted,
    /// - [`BridgeError::SendFailure`] when the transmitter raises a fault.
    ///
    /// The transmitter is invoked only after both checks pass, and at most once.
    pub fn send(&self, request: SendRequest) -> Result<SuccessToken, BridgeError> {
        let request = self.normalize(request)?;

        let capability = Capability::SendSms;
        if !self.host.is_granted(capability) {
            tracing::warn!(%capability, "send rejected: permission not granted");
            return Err(BridgeError::NoPermission { capability });
        }

        tracing::debug!(
            platform = self.host.platform_name(),
            bytes = request.body().as_str().len(),
            "permission granted, transmitting SMS"
        );
        if let Err(fault) = self.host.transmit(&request) {
            tracing::error!(%fault, "SMS transmission failed");
            return Err(BridgeError::SendFailure(fault));
        }

        Ok(self.success_token.clone())
    }

    /// Whether the send capability is currently granted. No side effects.
    pub fn check_authorization(&self) -> bool {
        self.host.is_granted(Capability::SendSms)
    }

    /// Ask the host to prompt for the send capability and return without waiting for the
    /// user's answer.
    pub fn request_authorization(&self) -> Result<(), BridgeError> {
        self.host
            .request(Capability::SendSms)
            .map_err(BridgeError::AuthorizationRequestFailed)
    }

    pub fn dispatch(&self, operation: Operation) -> Result<Reply, BridgeError> {
        tracing::debug!(method = operation.method(), "dispatching operation");
        match operation {
            Operation::Send(request) => self.send(request).map(Reply::Sent),
            Operation::CheckAuthorization => Ok(Reply::Authorization(self.check_authorization())),
            Operation::RequestAuthorization => self
                .request_authorization()
                .map(|()| Reply::AuthorizationRequested),
        }
    }

    /// Route an untyped channel call.
    ///
    /// The method name is resolved before the arguments are looked at, so an unknown method
    /// is always [`BridgeError::NotImplemented`].
    pub fn handle(&self, call: &RawMethodCall) -> Result<Reply, BridgeError> {
        let Some(kind) = Operation::lookup(&call.method) else {
            tracing::debug!(method = %call.method, "method not implemented");
            return Err(BridgeError::NotImplemented {
                method: call.method.clone(),
            });
        };
        let operation = kind.parse(&call.args)?;
        self.dispatch(operation)
    }

    /// Decode a channel message, handle it, and encode the reply envelope.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        let outcome = decode_method_call(message)
            .map_err(BridgeError::from)
            .and_then(|call| self.handle(&call));

        let envelope = match outcome {
            Ok(reply) => Envelope::Success(reply_value(reply)),
            Err(err) => err.to_envelope(),
        };
        encode_envelope(&envelope)
    }

    fn normalize(&self, request: SendRequest) -> Result<SendRequest, ValidationError> {
        if !self.normalize_recipients {
            return Ok(request);
        }
        let parsed = PhoneNumber::parse(None, request.recipient().raw())?;
        Ok(request.with_recipient(parsed.into()))
    }
}

fn reply_value(reply: Reply) -> Value {
    match reply {
        Reply::Sent(token) => Value::String(token.as_str().to_owned()),
        Reply::Authorization(granted) => Value::Bool(granted),
        Reply::AuthorizationRequested => Value::Null,
    }
}
