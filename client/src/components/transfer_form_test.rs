use super::*;

#[test]
fn selection_needs_both_ids() {
    assert_eq!(stock_selection("4", "2"), Some((4, 2)));
    assert_eq!(stock_selection("", "2"), None);
    assert_eq!(stock_selection("4", ""), None);
}

#[test]
fn reading_for_old_selection_does_not_match_new_one() {
    let issued = stock_selection("4", "2");
    assert_ne!(stock_selection("5", "2"), issued);
    assert_ne!(stock_selection("4", "3"), issued);
    assert_eq!(stock_selection("4", "2"), issued);
}
