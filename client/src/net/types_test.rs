use super::*;

// =============================================================
// Response decoding
// =============================================================

#[test]
fn product_reads_uppercase_sku() {
    let raw = r#"{"id":7,"name":"Plaid","description":"Alpaka","picture":null,"SKU":"PL-01","price":899.95}"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.id, 7);
    assert_eq!(product.sku, "PL-01");
    assert!(product.picture.is_none());
    assert!((product.price - 899.95).abs() < f64::EPSILON);
}

#[test]
fn product_accepts_lowercase_sku_and_missing_optionals() {
    let product: Product = serde_json::from_str(r#"{"id":1,"name":"Hue","sku":"H-1"}"#).unwrap();
    assert_eq!(product.sku, "H-1");
    assert_eq!(product.description, "");
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn product_id_accepts_integral_float() {
    let product: Product = serde_json::from_str(r#"{"id":3.0,"name":"Sjal"}"#).unwrap();
    assert_eq!(product.id, 3);
}

#[test]
fn product_id_rejects_fractional_float() {
    assert!(serde_json::from_str::<Product>(r#"{"id":3.5,"name":"Sjal"}"#).is_err());
}

#[test]
fn product_summary_defaults_quantity_to_zero() {
    let summary: ProductSummary = serde_json::from_str(r#"{"id":2,"name":"Tæppe","SKU":"T"}"#).unwrap();
    assert_eq!(summary.quantity, 0);
}

#[test]
fn warehouse_product_reads_nested_refs() {
    let raw = r#"{"id":5,"quantity":2,"product":{"id":1,"name":"Plaid"},"warehouse":{"id":9,"name":"Aarhus"}}"#;
    let row: WarehouseProduct = serde_json::from_str(raw).unwrap();
    assert_eq!(row.quantity, 2);
    assert_eq!(row.product.name, "Plaid");
    assert_eq!(row.warehouse.id, Some(9));
}

#[test]
fn log_entry_reads_camel_case_timestamp_and_nested_refs() {
    let raw = r#"{"id":1,"timeStamp":"2025-11-20T10:15:30","user":{"id":2,"username":"mette"},"product":null,"action":"Oprettede produkt"}"#;
    let entry: LogEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.time_stamp, Some(serde_json::json!("2025-11-20T10:15:30")));
    assert_eq!(entry.user.and_then(|u| u.username).as_deref(), Some("mette"));
    assert!(entry.product.is_none());
}

#[test]
fn user_keeps_unknown_role_names() {
    let user: User = serde_json::from_str(r#"{"id":4,"username":"ole","role":"ROLE_MANAGER"}"#).unwrap();
    assert_eq!(user.role.as_deref(), Some("ROLE_MANAGER"));
}

#[test]
fn login_response_without_token() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.token.is_none());
}

// =============================================================
// Request encoding
// =============================================================

#[test]
fn role_serializes_to_backend_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ROLE_ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"ROLE_USER\"");
}

#[test]
fn role_labels_and_wire_round_trip() {
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(Role::Employee.label(), "Medarbejder");
    assert_eq!(Role::from_wire("ROLE_ADMIN"), Some(Role::Admin));
    assert_eq!(Role::from_wire("ROLE_X"), None);
}

#[test]
fn new_delivery_uses_camel_case_tracking_number() {
    let delivery = NewDelivery {
        date: "2025-12-01".to_owned(),
        address: "Havnegade 1".to_owned(),
        carrier: "GLS".to_owned(),
        tracking_number: "GLS123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&delivery).unwrap(),
        serde_json::json!({
            "date": "2025-12-01",
            "address": "Havnegade 1",
            "carrier": "GLS",
            "trackingNumber": "GLS123"
        })
    );
}

#[test]
fn transfer_request_uses_camel_case_ids() {
    let req = TransferRequest { product_id: 1, from_warehouse_id: 2, to_warehouse_id: 3, amount: 4 };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "productId": 1, "fromWarehouseId": 2, "toWarehouseId": 3, "amount": 4 })
    );
}

#[test]
fn product_patch_omits_unchanged_fields() {
    let patch = ProductPatch { price: Some(10.0), ..ProductPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "price": 10.0 }));
    assert!(!patch.is_empty());
    assert!(ProductPatch::default().is_empty());
}

#[test]
fn new_product_uses_lowercase_sku() {
    let product = NewProduct {
        name: "Plaid".to_owned(),
        description: "Alpaka".to_owned(),
        picture: "/pictures/missing picture.jpg".to_owned(),
        sku: "PL-01".to_owned(),
        price: 899.0,
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value["sku"], "PL-01");
    assert!(value.get("SKU").is_none());
}
