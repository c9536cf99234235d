//! Form validation: raw input strings in, request payloads or a message out.
//!
//! Every validator trims its text inputs and returns the exact sentence the
//! form shows under its submit button. Nothing here touches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::consts::DEFAULT_PICTURE;
use crate::net::types::{
    LoginRequest, NewDelivery, NewProduct, NewUser, NewWarehouse, Product, ProductPatch, Role, TransferRequest,
};

pub const LOGIN_REQUIRED: &str = "Udfyld brugernavn og kodeord.";
pub const PRODUCT_REQUIRED: &str = "Navn, beskrivelse og pris skal udfyldes.";
pub const WAREHOUSE_REQUIRED: &str = "Navn, beskrivelse og adresse skal udfyldes.";
pub const USER_REQUIRED: &str = "Brugernavn, email og kodeord skal udfyldes.";
pub const DELIVERY_REQUIRED: &str = "Leveringsdato og adresse skal udfyldes.";
pub const TRANSFER_REQUIRED: &str = "Udfyld alle felter.";
pub const TRANSFER_SAME_WAREHOUSE: &str = "Fra og til lager må ikke være det samme.";
pub const PATCH_NAME_REQUIRED: &str = "Navn og beskrivelse må ikke være tomme.";
pub const PATCH_PRICE_INVALID: &str = "Prisen skal være et positivt tal.";
pub const PATCH_UNCHANGED: &str = "Ingen ændringer at gemme.";

/// Positive, finite price from a number input. Accepts a decimal comma.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// # Errors
///
/// `LOGIN_REQUIRED` when either field is blank.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let (username, password) = (username.trim(), password.trim());
    if username.is_empty() || password.is_empty() {
        return Err(LOGIN_REQUIRED);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// `picture` is the encoded upload, if one was chosen.
///
/// # Errors
///
/// `PRODUCT_REQUIRED` when name or description is blank, or the price is not
/// a positive number.
pub fn validate_product(
    name: &str,
    description: &str,
    price: &str,
    sku: &str,
    picture: Option<&str>,
) -> Result<NewProduct, &'static str> {
    let (name, description) = (name.trim(), description.trim());
    let price = parse_price(price).ok_or(PRODUCT_REQUIRED)?;
    if name.is_empty() || description.is_empty() {
        return Err(PRODUCT_REQUIRED);
    }
    Ok(NewProduct {
        name: name.to_owned(),
        description: description.to_owned(),
        picture: picture
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PICTURE)
            .to_owned(),
        sku: sku.trim().to_owned(),
        price,
    })
}

/// # Errors
///
/// `WAREHOUSE_REQUIRED` when any field is blank.
pub fn validate_warehouse(name: &str, description: &str, address: &str) -> Result<NewWarehouse, &'static str> {
    let (name, description, address) = (name.trim(), description.trim(), address.trim());
    if name.is_empty() || description.is_empty() || address.is_empty() {
        return Err(WAREHOUSE_REQUIRED);
    }
    Ok(NewWarehouse {
        name: name.to_owned(),
        description: description.to_owned(),
        address: address.to_owned(),
    })
}

/// # Errors
///
/// `USER_REQUIRED` when username, email, or password is blank.
pub fn validate_user(username: &str, email: &str, password: &str, role: Role) -> Result<NewUser, &'static str> {
    let (username, email, password) = (username.trim(), email.trim(), password.trim());
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(USER_REQUIRED);
    }
    Ok(NewUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    })
}

/// # Errors
///
/// `DELIVERY_REQUIRED` when the date or address is blank.
pub fn validate_delivery(
    date: &str,
    address: &str,
    carrier: &str,
    tracking_number: &str,
) -> Result<NewDelivery, &'static str> {
    let (date, address) = (date.trim(), address.trim());
    if date.is_empty() || address.is_empty() {
        return Err(DELIVERY_REQUIRED);
    }
    Ok(NewDelivery {
        date: date.to_owned(),
        address: address.to_owned(),
        carrier: carrier.trim().to_owned(),
        tracking_number: tracking_number.trim().to_owned(),
    })
}

/// # Errors
///
/// `TRANSFER_REQUIRED` when a selection is missing or the amount is not a
/// positive integer; `TRANSFER_SAME_WAREHOUSE` when source and target match.
pub fn validate_transfer(
    product_id: &str,
    from_warehouse_id: &str,
    to_warehouse_id: &str,
    amount: &str,
) -> Result<TransferRequest, &'static str> {
    let (Some(product_id), Some(from_warehouse_id), Some(to_warehouse_id)) =
        (parse_id(product_id), parse_id(from_warehouse_id), parse_id(to_warehouse_id))
    else {
        return Err(TRANSFER_REQUIRED);
    };
    let amount = parse_id(amount).filter(|a| *a > 0).ok_or(TRANSFER_REQUIRED)?;
    if from_warehouse_id == to_warehouse_id {
        return Err(TRANSFER_SAME_WAREHOUSE);
    }
    Ok(TransferRequest { product_id, from_warehouse_id, to_warehouse_id, amount })
}

/// Diff the edit form against `current`, keeping only changed fields.
///
/// # Errors
///
/// `PATCH_NAME_REQUIRED` for a blank name or description,
/// `PATCH_PRICE_INVALID` for a non-positive price, and `PATCH_UNCHANGED` when
/// nothing differs.
pub fn validate_product_patch(
    current: &Product,
    name: &str,
    description: &str,
    price: &str,
) -> Result<ProductPatch, &'static str> {
    let (name, description) = (name.trim(), description.trim());
    if name.is_empty() || description.is_empty() {
        return Err(PATCH_NAME_REQUIRED);
    }
    let price = parse_price(price).ok_or(PATCH_PRICE_INVALID)?;

    let patch = ProductPatch {
        name: (name != current.name).then(|| name.to_owned()),
        description: (description != current.description).then(|| description.to_owned()),
        price: ((price - current.price).abs() > f64::EPSILON).then_some(price),
    };
    if patch.is_empty() {
        return Err(PATCH_UNCHANGED);
    }
    Ok(patch)
}
