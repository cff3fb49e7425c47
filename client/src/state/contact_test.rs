use super::*;
use crate::state::catalog::product_by_id;

fn filled_form() -> ContactForm {
    ContactForm {
        first_name: " Ali ".to_owned(),
        last_name: "Hassan".to_owned(),
        email: "ali@example.com".to_owned(),
        phone: "01000000000".to_owned(),
        address: "12 Tahrir Sq".to_owned(),
        governorate: Some(Governorate::Alexandria),
        message: "Please call me".to_owned(),
    }
}

fn selection_of(ids: &[u32]) -> Selection {
    Selection::from_products(ids.iter().filter_map(|id| product_by_id(*id)))
}

// =============================================================
// Governorate
// =============================================================

#[test]
fn governorate_list_has_27_unique_labels() {
    let mut labels: Vec<_> = Governorate::ALL.iter().map(|g| g.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 27);
}

#[test]
fn governorate_parse_round_trips_labels() {
    for gov in Governorate::ALL {
        assert_eq!(Governorate::parse(gov.label()), Some(gov));
    }
    assert_eq!(Governorate::parse(""), None);
    assert_eq!(Governorate::parse("Atlantis"), None);
}

#[test]
fn governorate_serializes_as_label() {
    assert_eq!(serde_json::to_string(&Governorate::KafrElSheikh).unwrap(), "\"Kafr El Sheikh\"");
    assert_eq!(serde_json::from_str::<Governorate>("\"Port Said\"").unwrap(), Governorate::PortSaid);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_builds_trimmed_submission_with_units() {
    let submission = filled_form().validate(&selection_of(&[3, 1])).unwrap();
    assert_eq!(submission.first_name, "Ali");
    assert_eq!(submission.gov, "Alexandria");
    assert_eq!(submission.units.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1]);
}

#[test]
fn empty_selection_is_reported_first() {
    let errors = filled_form().validate(&Selection::default()).unwrap_err();
    assert_eq!(errors.summary(), Some(NO_UNITS_MESSAGE));
}

#[test]
fn blank_fields_are_reported_per_field() {
    let mut form = filled_form();
    form.phone = "   ".to_owned();
    form.message.clear();
    let errors = form.validate(&selection_of(&[1])).unwrap_err();
    assert!(errors.for_field(ContactField::Phone).is_some());
    assert!(errors.for_field(ContactField::Message).is_some());
    assert!(errors.for_field(ContactField::Email).is_none());
}

#[test]
fn email_without_at_sign_is_rejected() {
    let mut form = filled_form();
    form.email = "ali.example.com".to_owned();
    let errors = form.validate(&selection_of(&[1])).unwrap_err();
    assert_eq!(errors.for_field(ContactField::Email), Some("Please enter a valid email address."));
}

#[test]
fn missing_governorate_is_rejected() {
    let mut form = filled_form();
    form.governorate = None;
    let errors = form.validate(&selection_of(&[1])).unwrap_err();
    assert!(errors.for_field(ContactField::Governorate).is_some());
}

#[test]
fn set_and_value_cover_governorate_select() {
    let mut form = ContactForm::default();
    form.set(ContactField::Governorate, "Red Sea".to_owned());
    assert_eq!(form.governorate, Some(Governorate::RedSea));
    assert_eq!(form.value(ContactField::Governorate), "Red Sea");
    form.set(ContactField::Governorate, String::new());
    assert_eq!(form.value(ContactField::Governorate), "");
}

// =============================================================
// Submit gating and lifecycle
// =============================================================

#[test]
fn submit_disabled_rules() {
    let one = selection_of(&[1]);
    assert!(!submit_disabled(false, Some(Governorate::Cairo), &one));
    assert!(submit_disabled(true, Some(Governorate::Cairo), &one));
    assert!(submit_disabled(false, None, &one));
    assert!(submit_disabled(false, Some(Governorate::Cairo), &Selection::default()));
}

#[test]
fn begin_submit_moves_to_sending_and_blocks_second_submit() {
    let mut state = ContactFormState { form: filled_form(), status: SubmitStatus::Idle };
    let selection = selection_of(&[2]);
    assert!(state.begin_submit(&selection).is_some());
    assert!(state.status.is_busy());
    assert!(state.begin_submit(&selection).is_none());
}

#[test]
fn failed_post_keeps_fields_and_shows_retry_message() {
    let mut state = ContactFormState { form: filled_form(), status: SubmitStatus::Idle };
    state.begin_submit(&selection_of(&[2]));
    state.finish_submit(&Err::<(), _>("offline"));
    assert_eq!(state.status.error(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(state.form, filled_form());
}

#[test]
fn successful_post_clears_fields() {
    let mut state = ContactFormState { form: filled_form(), status: SubmitStatus::Idle };
    state.begin_submit(&selection_of(&[2]));
    state.finish_submit(&Ok::<(), ()>(()));
    assert_eq!(state.status, SubmitStatus::Sent);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn editing_clears_inline_error() {
    let mut state = ContactFormState::default();
    state.begin_submit(&Selection::default());
    assert_eq!(state.status.error(), Some(NO_UNITS_MESSAGE));
    state.edit(ContactField::FirstName, "A".to_owned());
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.form.first_name, "A");
}
