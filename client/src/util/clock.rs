//! Wall-clock access in milliseconds since the Unix epoch.

/// Current time in milliseconds.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere, so the
/// session gate behaves the same in tests and during server rendering.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
