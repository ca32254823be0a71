use chrono::{DateTime, Utc};
use wasm_bindgen::JsValue;

/// Format an instant the way the browser formats dates by default, in the
/// user's own locale and time zone
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(instant.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_instant_uses_browser_locale() {
        let instant = Utc.with_ymd_and_hms(2025, 12, 2, 12, 0, 0).unwrap();
        let formatted = format_instant(&instant);

        assert!(formatted.contains("2025"));
        assert_ne!(formatted, instant.to_rfc3339());
    }
}
