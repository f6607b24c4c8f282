//! Wall-clock capture and `hour:minute` labels for rendered messages.
//!
//! Under `hydrate` the label uses the browser locale (two-digit hour and
//! minute, as `toLocaleTimeString` renders them). Elsewhere it falls back to
//! a UTC `HH:MM` label so server-rendered markup stays deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as f64;
        ms
    }
}

/// Localized `hour:minute` label for `epoch_ms`.
pub fn time_label(epoch_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        browser_time_label(epoch_ms).unwrap_or_else(|| utc_hour_minute(epoch_ms))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_hour_minute(epoch_ms)
    }
}

#[cfg(feature = "hydrate")]
fn browser_time_label(epoch_ms: f64) -> Option<String> {
    use wasm_bindgen::JsValue;

    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_owned());

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("hour"), &JsValue::from_str("2-digit")).ok()?;
    js_sys::Reflect::set(&options, &JsValue::from_str("minute"), &JsValue::from_str("2-digit")).ok()?;

    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms));
    Some(String::from(date.to_locale_time_string_with_options(&locale, &options)))
}

/// `HH:MM` in UTC; `--:--` when `epoch_ms` is out of range.
pub fn utc_hour_minute(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() {
        return "--:--".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let secs = (epoch_ms / 1000.0).floor() as i64;
    time::OffsetDateTime::from_unix_timestamp(secs)
        .map_or_else(|_| "--:--".to_owned(), |t| format!("{:02}:{:02}", t.hour(), t.minute()))
}
