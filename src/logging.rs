use crate::clock::unix_millis;
use log::Level;
use serde_json::{Map, Number, Value};

#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::warn!("logger already initialised");
    }
}

/// Builds the JSON line for an event: `ts`, `level` and `event` first, then
/// whatever object fields the caller attached. Non-object `fields` are dropped.
pub fn event_payload(level: Level, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    let ts = Number::from_f64(unix_millis().floor()).unwrap_or_else(|| Number::from(0_u64));
    payload.insert("ts".to_string(), Value::Number(ts));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(level: Level, event: &str, fields: Value) {
    if !log::log_enabled!(level) {
        return;
    }

    log::log!(level, "{}", event_payload(level, event, fields));
}
