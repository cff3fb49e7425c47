use super::*;

#[test]
fn subject_is_optional() {
    let mut form = EnquiryForm {
        name: "Hany".to_owned(),
        email: "hany@example.com".to_owned(),
        subject: String::new(),
        message: "Do you ship to Aswan?".to_owned(),
    };
    assert_eq!(form.submit(), EnquiryStatus::Success);
    assert_eq!(form, EnquiryForm::default());
}

#[test]
fn missing_message_is_an_error_and_keeps_input() {
    let mut form = EnquiryForm { name: "Hany".to_owned(), email: "h@x.io".to_owned(), ..EnquiryForm::default() };
    let before = form.clone();
    assert_eq!(form.submit(), EnquiryStatus::Error);
    assert_eq!(form, before);
}
