use super::*;

#[test]
fn catalog_ids_are_unique() {
    let all = products();
    assert_eq!(all.len(), 6);
    for (i, a) in all.iter().enumerate() {
        for b in all.iter().skip(i + 1) {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn product_by_id_finds_known_and_rejects_unknown() {
    assert_eq!(product_by_id(3).map(|p| p.name), Some("Premium Kitchen Unit".to_owned()));
    assert!(product_by_id(99).is_none());
}

#[test]
fn filter_all_and_empty_return_everything() {
    let all = products();
    assert_eq!(filter_products(&all, FILTER_ALL), all);
    assert_eq!(filter_products(&all, ""), all);
}

#[test]
fn filter_matches_name_or_description_case_insensitively() {
    let all = products();
    let custom = filter_products(&all, "Custom");
    assert_eq!(custom.iter().map(|p| p.id).collect::<Vec<_>>(), vec![6]);

    let premium = filter_products(&all, "PREMIUM");
    assert_eq!(premium.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn filter_with_no_match_is_empty() {
    let all = products();
    assert!(filter_products(&all, "Thermofoil").is_empty());
}

#[test]
fn filter_options_start_with_all() {
    assert_eq!(FILTER_OPTIONS.first(), Some(&FILTER_ALL));
}
