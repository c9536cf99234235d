use super::*;

fn summary(id: i64, quantity: i64) -> ProductSummary {
    ProductSummary {
        id,
        name: format!("P{id}"),
        description: String::new(),
        picture: None,
        sku: String::new(),
        price: 1.0,
        quantity,
    }
}

#[test]
fn sorts_fullest_first() {
    let mut list = vec![summary(1, 3), summary(2, 40), summary(3, 0), summary(4, 12)];
    sort_by_quantity_desc(&mut list);
    let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4, 1, 3]);
}

#[test]
fn equal_quantities_come_out_reversed() {
    let mut list = vec![summary(1, 5), summary(2, 5)];
    sort_by_quantity_desc(&mut list);
    assert_eq!(list[0].id, 2);
}

#[test]
fn load_failure_shows_backend_text() {
    let err = ApiError::Status { status: 500, body: "Databasefejl".to_owned() };
    assert_eq!(load_failure_message(&err), "Databasefejl");
    assert_eq!(
        load_failure_message(&ApiError::Network("x".to_owned())),
        "Netværksfejl - kunne ikke oprette forbindelse til backend"
    );
}
