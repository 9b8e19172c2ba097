//! Browser clocks

/// Monotonic milliseconds (performance.now), wall clock as fallback
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Wall clock milliseconds since the epoch
pub fn epoch_ms() -> f64 {
    js_sys::Date::now()
}

/// Local time of day for history entries, e.g. "10:42:07 AM"
pub fn display_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("default").into()
}
