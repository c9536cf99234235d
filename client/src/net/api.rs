//! Typed REST calls against the warehouse backend.
//!
//! Every call goes through `http::authorized_fetch`, so each request carries
//! the session's bearer value. Paths are origin-relative; the host forwards
//! everything under `/api` to the backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` with the backend's body text so
//! views can show it verbatim. Views pick their own wording for network and
//! decode failures via `error_message`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{self, ApiError, ApiResponse, Method, RequestOptions};
use super::types::{
    LogEntry, LoginRequest, LoginResponse, NewDelivery, NewProduct, NewUser, NewWarehouse, Product, ProductPatch,
    ProductSummary, TransferRequest, User, Warehouse, WarehouseProduct,
};
use crate::consts::API_PREFIX;

fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}/{path}")
}

fn product_endpoint(id: i64) -> String {
    endpoint(&format!("products/{id}"))
}

fn stock_quantity_endpoint(warehouse_id: i64, product_id: i64) -> String {
    endpoint(&format!("warehousetransfer/{warehouse_id}/product/{product_id}/quantity"))
}

fn user_logs_endpoint(user_id: i64) -> String {
    endpoint(&format!("logs/user/{user_id}"))
}

fn product_logs_endpoint(product_id: i64) -> String {
    endpoint(&format!("logs/product/{product_id}"))
}

/// User-facing text for a failed call.
///
/// Backend rejections show the body as `Fejl: <body>`; anything that never
/// produced a usable answer shows `fallback`.
#[must_use]
pub fn error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { body, .. } => format!("Fejl: {body}"),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Request(_) => fallback.to_owned(),
    }
}

/// Parse a stock-quantity body. The backend answers with a bare number.
fn parse_quantity(body: &str) -> Result<i64, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).map_err(|e| ApiError::Decode(e.to_string()))?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ApiError::Decode(format!("quantity is not an integer: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| ApiError::Decode(e.to_string())),
        other => Err(ApiError::Decode(format!("unexpected quantity body: {other}"))),
    }
}

/// Backend client bound to one session credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Api {
    token: Option<String>,
}

impl Api {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    async fn send(&self, url: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        http::authorized_fetch(url, options, self.token.as_deref())
            .await?
            .error_for_status()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.send(url, RequestOptions::get()).await?.json()
    }

    async fn send_json<B: Serialize>(&self, method: Method, url: &str, payload: &B) -> Result<ApiResponse, ApiError> {
        self.send(url, RequestOptions::json(method, payload)?).await
    }

    // ---------------------------------------------------------------------
    // Users and session
    // ---------------------------------------------------------------------

    /// `POST /api/users/login`. Returns the issued token, if any.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection as `ApiError::Status`.
    pub async fn login(&self, request: &LoginRequest) -> Result<Option<String>, ApiError> {
        let resp = self
            .send_json(Method::Post, &endpoint("users/login"), request)
            .await?;
        Ok(resp.json::<LoginResponse>()?.token)
    }

    /// `POST /api/users`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.send_json(Method::Post, &endpoint("users"), user).await?;
        Ok(())
    }

    /// `GET /api/users`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&endpoint("users")).await
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// `GET /api/products`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(&endpoint("products")).await
    }

    /// `GET /api/products/dto`: products with their total stock.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_product_summaries(&self) -> Result<Vec<ProductSummary>, ApiError> {
        self.get_json(&endpoint("products/dto")).await
    }

    /// `GET /api/products/searchBar`: the corpus the search bar filters.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn search_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(&endpoint("products/searchBar")).await
    }

    /// `GET /api/products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&product_endpoint(id)).await
    }

    /// `POST /api/products`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        self.send_json(Method::Post, &endpoint("products"), product).await?;
        Ok(())
    }

    /// `PATCH /api/products/{id}` with only the changed fields.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<(), ApiError> {
        self.send_json(Method::Patch, &product_endpoint(id), patch).await?;
        Ok(())
    }

    /// `DELETE /api/products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.send(&product_endpoint(id), RequestOptions::delete()).await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Warehouses and stock
    // ---------------------------------------------------------------------

    /// `GET /api/warehouses`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.get_json(&endpoint("warehouses")).await
    }

    /// `POST /api/warehouses`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_warehouse(&self, warehouse: &NewWarehouse) -> Result<(), ApiError> {
        self.send_json(Method::Post, &endpoint("warehouses"), warehouse).await?;
        Ok(())
    }

    /// `GET /api/warehouses/lowQty`: stock rows below the backend's threshold.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn low_stock(&self) -> Result<Vec<WarehouseProduct>, ApiError> {
        self.get_json(&endpoint("warehouses/lowQty")).await
    }

    /// `GET /api/warehouseproducts`: every stock row.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_warehouse_products(&self) -> Result<Vec<WarehouseProduct>, ApiError> {
        self.get_json(&endpoint("warehouseproducts")).await
    }

    /// Quantity of `product_id` held in `warehouse_id`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures; a non-numeric body is
    /// `ApiError::Decode`.
    pub async fn stock_quantity(&self, warehouse_id: i64, product_id: i64) -> Result<i64, ApiError> {
        let resp = self
            .send(&stock_quantity_endpoint(warehouse_id, product_id), RequestOptions::get())
            .await?;
        parse_quantity(&resp.body)
    }

    /// `POST /api/warehousetransfer`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, &endpoint("warehousetransfer"), request).await?;
        Ok(())
    }

    /// `POST /api/deliveries`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_delivery(&self, delivery: &NewDelivery) -> Result<(), ApiError> {
        self.send_json(Method::Post, &endpoint("deliveries"), delivery).await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Change log
    // ---------------------------------------------------------------------

    /// `GET /api/logs`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn list_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json(&endpoint("logs")).await
    }

    /// `GET /api/logs/user/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn logs_for_user(&self, user_id: i64) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json(&user_logs_endpoint(user_id)).await
    }

    /// `GET /api/logs/product/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn logs_for_product(&self, product_id: i64) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json(&product_logs_endpoint(product_id)).await
    }
}
