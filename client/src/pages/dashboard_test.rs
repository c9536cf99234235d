use super::*;

#[test]
fn cards_in_grid_order() {
    let titles: Vec<&str> = DASHBOARD_CARDS.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        titles,
        vec![
            "Opret produkt",
            "Opret lager",
            "Flyt produkt til lager",
            "Lav beholdningsstatus",
            "Registrer ny leverance",
            "Se alle produkter",
            "Opret bruger",
            "Ændringshistorik",
        ]
    );
}

#[test]
fn every_card_opens_a_distinct_panel() {
    for (i, (_, panel)) in DASHBOARD_CARDS.iter().enumerate() {
        assert!(DASHBOARD_CARDS[i + 1..].iter().all(|(_, other)| other != panel));
        assert_ne!(*panel, Panel::Login);
    }
}
