//! Display formatting for prices, pictures, stock lines, and log timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::consts::{DEFAULT_PICTURE, LOW_STOCK_CRITICAL_BELOW, RAW_PICTURE_MIN_LEN};
use crate::net::types::WarehouseProduct;

/// Placeholder for any missing cell.
pub const MISSING: &str = "-";

/// `899.5` → `"899.50 kr"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2} kr")
}

/// Image source for a stored product picture.
///
/// Data URLs pass through, long raw base64 is wrapped as JPEG, anything else
/// falls back to the default picture.
#[must_use]
pub fn resolve_picture_src(picture: Option<&str>) -> String {
    match picture {
        Some(p) if p.starts_with("data:image") => p.to_owned(),
        Some(p) if p.len() > RAW_PICTURE_MIN_LEN => format!("data:image/jpeg;base64,{p}"),
        _ => DEFAULT_PICTURE.to_owned(),
    }
}

/// `"<q> stk · <product> (<warehouse>)"`.
#[must_use]
pub fn format_stock_line(row: &WarehouseProduct) -> String {
    format!("{} stk · {} ({})", row.quantity, row.product.name, row.warehouse.name)
}

#[must_use]
pub fn is_critical_stock(quantity: i64) -> bool {
    quantity < LOW_STOCK_CRITICAL_BELOW
}

/// What the transfer form knows about the selected source stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockReading {
    /// Product or source warehouse not chosen yet.
    #[default]
    Unselected,
    Known(i64),
    /// The lookup failed.
    Unavailable,
}

/// Stock line under the transfer form.
#[must_use]
pub fn format_stock_display(reading: StockReading) -> String {
    match reading {
        StockReading::Unselected => "Lagerbeholdning: -".to_owned(),
        StockReading::Known(q) => format!("Lagerbeholdning: {q}"),
        StockReading::Unavailable => "Lagerbeholdning: N/A".to_owned(),
    }
}

/// Live summary shown beside the delivery form.
#[must_use]
pub fn delivery_summary(date: &str, address: &str, carrier: &str, tracking_number: &str) -> String {
    let field = |v: &str| {
        let v = v.trim();
        if v.is_empty() { MISSING.to_owned() } else { v.to_owned() }
    };
    format!(
        "Dato: {} · Adresse: {} · Fragtfirma: {} · Tracking: {}",
        field(date),
        field(address),
        field(carrier),
        field(tracking_number)
    )
}

// =============================================================================
// LOG TIMESTAMPS
// =============================================================================

fn parse_iso(raw: &str) -> Option<PrimitiveDateTime> {
    let date = Date::parse(raw.get(..10)?, format_description!("[year]-[month]-[day]")).ok()?;
    let time = match raw.get(11..16) {
        Some(hm) => Time::parse(hm, format_description!("[hour]:[minute]")).ok()?,
        None => Time::MIDNIGHT,
    };
    Some(PrimitiveDateTime::new(date, time))
}

#[allow(clippy::cast_possible_truncation)]
fn parse_epoch_ms(ms: f64) -> Option<PrimitiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    let nanos = i128::from(ms as i64) * 1_000_000;
    let at = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
    Some(PrimitiveDateTime::new(at.date(), at.time()))
}

/// `[year, month, day, hour?, minute?, ...]` as Jackson writes a
/// `LocalDateTime` without a custom serializer.
fn parse_parts(parts: &[serde_json::Value]) -> Option<PrimitiveDateTime> {
    let num = |i: usize| parts.get(i).and_then(serde_json::Value::as_i64);
    let year = i32::try_from(num(0)?).ok()?;
    let month = Month::try_from(u8::try_from(num(1)?).ok()?).ok()?;
    let day = u8::try_from(num(2)?).ok()?;
    let hour = u8::try_from(num(3).unwrap_or(0)).ok()?;
    let minute = u8::try_from(num(4).unwrap_or(0)).ok()?;
    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = Time::from_hms(hour, minute, 0).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

/// Split a log timestamp into `("dd/mm/yyyy", "HH:MM")`.
///
/// Both halves are `"-"` when the value is absent or unreadable.
#[must_use]
pub fn format_log_timestamp(value: Option<&serde_json::Value>) -> (String, String) {
    let parsed = match value {
        Some(serde_json::Value::String(s)) => parse_iso(s.trim()),
        Some(serde_json::Value::Number(n)) => n.as_f64().and_then(parse_epoch_ms),
        Some(serde_json::Value::Array(parts)) => parse_parts(parts),
        _ => None,
    };
    let Some(at) = parsed else {
        return (MISSING.to_owned(), MISSING.to_owned());
    };
    let date = at.format(format_description!("[day]/[month]/[year]"));
    let time = at.format(format_description!("[hour]:[minute]"));
    match (date, time) {
        (Ok(d), Ok(t)) => (d, t),
        _ => (MISSING.to_owned(), MISSING.to_owned()),
    }
}

/// Cell text, or `"-"` when blank.
#[must_use]
pub fn or_missing(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_owned()
}
