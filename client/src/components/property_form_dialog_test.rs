use super::*;

fn valid_form() -> PropertyForm {
    PropertyForm {
        title: "Sea-facing flat".to_owned(),
        kind: PropertyType::Apartment,
        price: "7500000".to_owned(),
        area: "1200 sqft".to_owned(),
        beds: "2".to_owned(),
        baths: "2".to_owned(),
        bhk: "2BHK".to_owned(),
        address: "12 Marine Drive".to_owned(),
        city: "Mumbai".to_owned(),
        images: " https://img/a.jpg, ,https://img/b.jpg ".to_owned(),
        ..PropertyForm::default()
    }
}

#[test]
fn valid_form_becomes_draft() {
    let draft = valid_form().to_draft().unwrap();
    assert_eq!(draft.price, 7_500_000.0);
    assert_eq!(draft.beds, Some(2));
    assert_eq!(draft.bhk.as_deref(), Some("2BHK"));
    assert_eq!(draft.images, "https://img/a.jpg,https://img/b.jpg");
}

#[test]
fn price_must_parse() {
    let form = PropertyForm { price: "abc".to_owned(), ..valid_form() };
    assert_eq!(form.to_draft(), Err("Enter a valid price"));
}

#[test]
fn draft_rules_still_apply() {
    let form = PropertyForm { title: "Flat".to_owned(), ..valid_form() };
    assert_eq!(form.to_draft(), Err("Title must be between 5 and 100 characters"));
}

#[test]
fn land_drops_room_counts() {
    let form = PropertyForm { kind: PropertyType::Land, ..valid_form() };
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.beds, None);
    assert_eq!(draft.baths, None);
    assert_eq!(draft.bhk, None);
}

#[test]
fn editing_keeps_listing_id() {
    let form = PropertyForm { id: Some(42), ..valid_form() };
    assert!(form.is_edit());
    assert_eq!(form.to_draft().unwrap().id, Some(42));
    assert!(!valid_form().is_edit());
}
