use super::*;

fn user() -> AuthUser {
    AuthUser {
        id: "7".to_owned(),
        name: "Mona".to_owned(),
        email: "mona@example.com".to_owned(),
        image: None,
        created_at: None,
    }
}

// =============================================================
// avatar_src
// =============================================================

#[test]
fn avatar_src_falls_back_when_missing() {
    assert_eq!(avatar_src(&user()), DEFAULT_AVATAR);
}

#[test]
fn avatar_src_falls_back_when_blank() {
    let u = AuthUser { image: Some("  ".to_owned()), ..user() };
    assert_eq!(avatar_src(&u), DEFAULT_AVATAR);
}

#[test]
fn avatar_src_uses_provider_image() {
    let u = AuthUser { image: Some("https://cdn.example.com/a.png".to_owned()), ..user() };
    assert_eq!(avatar_src(&u), "https://cdn.example.com/a.png");
}

// =============================================================
// joined_label
// =============================================================

#[test]
fn joined_label_is_na_without_timestamp() {
    assert_eq!(joined_label(&user()), "N/A");
}

#[test]
fn joined_label_keeps_date_part_of_iso_timestamp() {
    let u = AuthUser { created_at: Some("2024-03-09T12:30:00.000Z".to_owned()), ..user() };
    assert_eq!(joined_label(&u), "2024-03-09");
}

#[test]
fn joined_label_is_na_for_empty_timestamp() {
    let u = AuthUser { created_at: Some(String::new()), ..user() };
    assert_eq!(joined_label(&u), "N/A");
}
