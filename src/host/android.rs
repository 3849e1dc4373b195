//! Android host via JNI.
//!
//! Requires the Android NDK and the hosting Activity to be registered with `ndk-context`.
//! Permission checks go through `Context.checkSelfPermission`, prompts through
//! `Activity.requestPermissions`, and transmission through
//! `SmsManager.getDefault().sendTextMessage`.
//!
//! The permission prompt is asynchronous on Android: its answer arrives in the Activity's
//! `onRequestPermissionsResult` with request code [`REQUEST_SEND_SMS`]. The host Activity
//! owns that callback; nothing here waits for it.

#![cfg(target_os = "android")]

use jni::objects::{JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use crate::domain::{Capability, SendRequest};
use crate::host::{Authorization, Fault, Host, Transmitter};

/// Request code passed to `requestPermissions`.
pub const REQUEST_SEND_SMS: i32 = 0x534D_0001; // "SM" + 1

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: i32 = 0;

const SMS_MANAGER_CLASS: &str = "android/telephony/SmsManager";

/// Attach the current thread to the process JVM and run `f` with the hosting Activity.
fn with_activity<T>(
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> Result<T, Fault>,
) -> Result<T, Fault> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` registered by the NDK glue and lives for the whole
    // process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| Fault::new(format!("failed to obtain JavaVM: {e}")))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| Fault::new(format!("failed to attach JNI thread: {e}")))?;

    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(Fault::new("Android context is null; activity not initialised"));
    }
    // SAFETY: the NDK guarantees this is a valid global reference to the hosting Activity.
    let activity = unsafe { JObject::from_raw(ptr.cast()) };

    f(&mut env, &activity)
}

/// Map a JNI failure to a [`Fault`], surfacing a pending Java exception's message if any.
fn jni_fault(env: &mut JNIEnv<'_>, context: &str, err: jni::errors::Error) -> Fault {
    if matches!(err, jni::errors::Error::JavaException) {
        if let Some(message) = take_exception_message(env) {
            return Fault::new(message);
        }
    }
    Fault::new(format!("{context}: {err}"))
}

/// Clear the pending exception and return `getMessage()`, or `toString()` when it is null.
fn take_exception_message(env: &mut JNIEnv<'_>) -> Option<String> {
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    if throwable.is_null() {
        return None;
    }

    let mut text = env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    if text.is_null() {
        text = env
            .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
            .ok()?
            .l()
            .ok()?;
    }

    let text = JString::from(text);
    let message: String = env.get_string(&text).ok()?.into();
    Some(message)
}

/// Android implementation of the SMS host.
///
/// Zero-sized; all state lives on the Java side. No JNI call happens until a trait method
/// is invoked.
#[derive(Debug, Default)]
pub struct AndroidHost;

impl AndroidHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for AndroidHost {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

impl Authorization for AndroidHost {
    fn is_granted(&self, capability: Capability) -> bool {
        let granted = with_activity(|env, activity| {
            let permission: JString = env
                .new_string(capability.host_name())
                .map_err(|e| jni_fault(env, "new_string(permission)", e))?;

            env.call_method(
                activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&permission)],
            )
            .map_err(|e| jni_fault(env, "checkSelfPermission", e))?
            .i()
            .map_err(|e| jni_fault(env, "checkSelfPermission->i", e))
        });

        match granted {
            Ok(status) => status == PERMISSION_GRANTED,
            Err(fault) => {
                tracing::warn!(%capability, %fault, "Android: permission check failed");
                false
            }
        }
    }

    fn request(&self, capability: Capability) -> Result<(), Fault> {
        with_activity(|env, activity| {
            tracing::info!(%capability, "Android: requesting permission");

            let permission: JString = env
                .new_string(capability.host_name())
                .map_err(|e| jni_fault(env, "new_string(permission)", e))?;

            let permissions = env
                .new_object_array(1, "java/lang/String", &JObject::null())
                .map_err(|e| jni_fault(env, "new_object_array(permissions)", e))?;
            env.set_object_array_element(&permissions, 0, &permission)
                .map_err(|e| jni_fault(env, "set_object_array_element", e))?;

            env.call_method(
                activity,
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[JValue::Object(&permissions), JValue::Int(REQUEST_SEND_SMS)],
            )
            .map_err(|e| jni_fault(env, "requestPermissions", e))?;

            Ok(())
        })
    }
}

impl Transmitter for AndroidHost {
    fn transmit(&self, request: &SendRequest) -> Result<(), Fault> {
        with_activity(|env, _activity| {
            let manager: JObject = env
                .call_static_method(
                    SMS_MANAGER_CLASS,
                    "getDefault",
                    "()Landroid/telephony/SmsManager;",
                    &[],
                )
                .map_err(|e| jni_fault(env, "SmsManager.getDefault", e))?
                .l()
                .map_err(|e| jni_fault(env, "getDefault->l", e))?;

            let destination: JString = env
                .new_string(request.recipient().raw())
                .map_err(|e| jni_fault(env, "new_string(destination)", e))?;
            let text: JString = env
                .new_string(request.body().as_str())
                .map_err(|e| jni_fault(env, "new_string(text)", e))?;
            let null = JObject::null();

            // sendTextMessage(destinationAddress, scAddress, text, sentIntent, deliveryIntent)
            env.call_method(
                &manager,
                "sendTextMessage",
                "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;\
                 Landroid/app/PendingIntent;Landroid/app/PendingIntent;)V",
                &[
                    JValue::Object(&destination),
                    JValue::Object(&null),
                    JValue::Object(&text),
                    JValue::Object(&null),
                    JValue::Object(&null),
                ],
            )
            .map_err(|e| jni_fault(env, "SmsManager.sendTextMessage", e))?;

            Ok(())
        })
    }
}
