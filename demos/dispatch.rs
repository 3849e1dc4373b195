use std::io;
use std::sync::Arc;

use serde_json::json;
use sms_bridge::channel::{decode_envelope, encode_method_call};
use sms_bridge::{RawMethodCall, SmsDispatchBridge, platform_host};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let number = std::env::var("SMS_BRIDGE_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMS_BRIDGE_NUMBER environment variable is required",
        )
    })?;
    let message = std::env::var("SMS_BRIDGE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sms-bridge demo.".to_owned());

    let bridge = SmsDispatchBridge::new(Arc::from(platform_host()));
    println!(
        "channel: {}, platform: {}",
        bridge.channel(),
        bridge.platform_name()
    );

    let call = RawMethodCall::new("send", json!({ "number": number, "message": message }));
    let reply = bridge.handle_message(&encode_method_call(&call)?);
    println!("reply: {:?}", decode_envelope(&reply)?);

    Ok(())
}
