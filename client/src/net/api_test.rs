use super::*;

#[test]
fn endpoint_prefixes_api_root() {
    assert_eq!(endpoint("warehouses/lowQty"), "/api/warehouses/lowQty");
}

#[test]
fn product_endpoint_formats_id() {
    assert_eq!(product_endpoint(42), "/api/products/42");
}

#[test]
fn stock_quantity_endpoint_orders_warehouse_then_product() {
    assert_eq!(stock_quantity_endpoint(3, 9), "/api/warehousetransfer/3/product/9/quantity");
}

#[test]
fn log_endpoints_format_ids() {
    assert_eq!(user_logs_endpoint(5), "/api/logs/user/5");
    assert_eq!(product_logs_endpoint(6), "/api/logs/product/6");
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefixes_backend_body() {
    let err = ApiError::Status { status: 400, body: "SKU already exists".to_owned() };
    assert_eq!(error_message(&err, "unused"), "Fejl: SKU already exists");
}

#[test]
fn error_message_uses_fallback_for_transport_failures() {
    let fallback = "Netværksfejl – kunne ikke oprette produktet.";
    assert_eq!(error_message(&ApiError::Network("offline".to_owned()), fallback), fallback);
    assert_eq!(error_message(&ApiError::Decode("eof".to_owned()), fallback), fallback);
}

// =============================================================
// parse_quantity
// =============================================================

#[test]
fn parse_quantity_reads_bare_number() {
    assert_eq!(parse_quantity("17"), Ok(17));
    assert_eq!(parse_quantity(" 0\n"), Ok(0));
}

#[test]
fn parse_quantity_reads_quoted_number() {
    assert_eq!(parse_quantity("\"12\""), Ok(12));
}

#[test]
fn parse_quantity_rejects_other_shapes() {
    assert!(matches!(parse_quantity("{\"quantity\":3}"), Err(ApiError::Decode(_))));
    assert!(matches!(parse_quantity("1.5"), Err(ApiError::Decode(_))));
    assert!(matches!(parse_quantity("not found"), Err(ApiError::Decode(_))));
}

#[test]
fn api_new_keeps_token() {
    assert_eq!(Api::new(Some("t".to_owned())), Api::new(Some("t".to_owned())));
    assert_ne!(Api::new(None), Api::new(Some("t".to_owned())));
}
