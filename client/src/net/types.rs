//! Wire DTOs for the warehouse backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON field names (`SKU`, `timeStamp`,
//! `trackingNumber`, ...) so serde does the renaming and views work with
//! snake_case Rust fields. Response types default every field they can, since
//! the backend omits nulls inconsistently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// RESPONSES
// =============================================================================

/// A product as returned by `/api/products`, `/api/products/{id}`, and the
/// search-bar listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Data URL, raw base64, or a picture path.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(rename = "SKU", alias = "sku", default)]
    pub sku: String,
    #[serde(default)]
    pub price: f64,
}

/// Product with its total stock, from `/api/products/dto`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(rename = "SKU", alias = "sku", default)]
    pub sku: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Wire role name, e.g. `ROLE_ADMIN`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Minimal `{id, name}` reference nested in stock and log rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

/// Stock of one product in one warehouse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseProduct {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
    #[serde(default)]
    pub product: NamedRef,
    #[serde(default)]
    pub warehouse: NamedRef,
}

/// User reference nested in a log row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// One change-log row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub id: Option<i64>,
    /// ISO date-time string, epoch milliseconds, or a Jackson date array.
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: Option<serde_json::Value>,
    #[serde(default)]
    pub user: Option<LogUser>,
    #[serde(default)]
    pub product: Option<NamedRef>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// User role as the backend names it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[default]
    #[serde(rename = "ROLE_USER")]
    Employee,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Employee];

    /// Label shown in the role dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Medarbejder",
        }
    }

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Employee => "ROLE_USER",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_wire() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub picture: String,
    pub sku: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewWarehouse {
    pub name: String,
    pub description: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDelivery {
    /// `YYYY-MM-DD` from the date input.
    pub date: String,
    pub address: String,
    pub carrier: String,
    pub tracking_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub product_id: i64,
    pub from_warehouse_id: i64,
    pub to_warehouse_id: i64,
    pub amount: i64,
}

/// Partial product update; only `Some` fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
