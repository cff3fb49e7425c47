use super::*;

fn units() -> AdminTable<AdminUnit> {
    AdminTable::new(seed_units())
}

fn names(table: &AdminTable<AdminUnit>) -> Vec<&str> {
    table.rows().iter().map(|u| u.name.as_str()).collect()
}

// =============================================================
// Units
// =============================================================

#[test]
fn seed_rows() {
    assert_eq!(names(&units()), vec!["Unit 1", "Unit 2"]);
    assert_eq!(AdminTable::new(seed_projects()).rows()[1].title, "Classic Bathroom");
}

#[test]
fn edit_loads_draft_and_save_writes_back() {
    let mut table = units();
    table.edit("2");
    assert!(table.is_editing("2"));
    assert_eq!(table.edit_draft.price, "1200");

    table.edit_draft.price = "1350".to_owned();
    table.edit_draft.available = true;
    assert!(table.save());
    assert_eq!(table.editing(), None);
    assert_eq!(table.rows()[1], AdminUnit { id: "2".to_owned(), name: "Unit 2".to_owned(), price: "1350".to_owned(), available: true });
}

#[test]
fn save_with_blank_required_field_keeps_editing() {
    let mut table = units();
    table.edit("1");
    table.edit_draft.name = "  ".to_owned();
    assert!(!table.save());
    assert!(table.is_editing("1"));
    assert_eq!(table.rows()[0].name, "Unit 1");
}

#[test]
fn edit_unknown_id_is_ignored() {
    let mut table = units();
    table.edit("nope");
    assert_eq!(table.editing(), None);
}

#[test]
fn add_appends_with_fresh_unique_ids() {
    let mut table = units();
    table.add_draft = UnitDraft { name: "Unit 3".to_owned(), price: "900".to_owned(), available: false };
    assert!(table.add());
    table.add_draft = UnitDraft { name: "Unit 4".to_owned(), price: "950".to_owned(), available: true };
    assert!(table.add());

    assert_eq!(names(&table), vec!["Unit 1", "Unit 2", "Unit 3", "Unit 4"]);
    let mut ids: Vec<_> = table.rows().iter().map(|u| u.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(table.add_draft, UnitDraft::default());
}

#[test]
fn add_requires_name_and_price() {
    let mut table = units();
    table.add_draft.name = "Unit 3".to_owned();
    assert!(!table.add());
    assert_eq!(table.rows().len(), 2);
}

#[test]
fn opening_an_editor_keeps_the_pending_addition() {
    let mut table = units();
    table.add_draft.name = "Unit 3".to_owned();
    table.add_draft.price = "900".to_owned();
    table.edit("1");
    assert_eq!(table.draft(DraftSlot::Edit).name, "Unit 1");
    assert_eq!(table.draft(DraftSlot::Add).name, "Unit 3");

    table.draft_mut(DraftSlot::Edit).price = "1100".to_owned();
    assert!(table.save());
    assert_eq!(table.rows()[0].price, "1100");
    assert_eq!(table.add_draft.price, "900");

    assert!(table.add());
    assert_eq!(names(&table), vec!["Unit 1", "Unit 2", "Unit 3"]);
}

#[test]
fn add_is_refused_while_a_row_is_being_edited() {
    let mut table = units();
    table.add_draft = UnitDraft { name: "Unit 3".to_owned(), price: "900".to_owned(), available: true };
    table.edit("2");
    assert!(!table.add());
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.add_draft.name, "Unit 3");

    table.cancel();
    assert!(table.add());
    assert_eq!(table.rows().len(), 3);
}

#[test]
fn delete_removes_row_and_closes_its_editor() {
    let mut table = units();
    table.edit("1");
    table.delete("1");
    assert_eq!(names(&table), vec!["Unit 2"]);
    assert_eq!(table.editing(), None);
}

// =============================================================
// Projects
// =============================================================

#[test]
fn project_requires_title_category_and_image() {
    let mut table = AdminTable::new(seed_projects());
    table.add_draft = ProjectDraft { title: "Loft".to_owned(), category: "Kitchen".to_owned(), image_url: String::new() };
    assert!(!table.add());

    table.add_draft.image_url = "/images/loft.jpg".to_owned();
    assert!(table.add());
    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.rows()[2].image_url, "/images/loft.jpg");
}

#[test]
fn cancel_discards_draft() {
    let mut table = AdminTable::new(seed_projects());
    table.edit("1");
    table.edit_draft.title = "Changed".to_owned();
    table.cancel();
    assert_eq!(table.rows()[0].title, "Modern Kitchen");
    assert_eq!(table.edit_draft, ProjectDraft::default());
}

#[test]
fn tab_labels() {
    assert_eq!(AdminTab::default(), AdminTab::Projects);
    assert_eq!(AdminTab::Units.label(), "Units (Book Now)");
}
