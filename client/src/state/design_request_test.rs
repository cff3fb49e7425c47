use super::*;

fn complete() -> DesignRequestForm {
    DesignRequestForm {
        name: "Sara".to_owned(),
        email: "sara@example.com".to_owned(),
        phone: "0122".to_owned(),
        address: "5 Corniche".to_owned(),
        governorate: Some(Governorate::Luxor),
        project_type: Some(ProjectType::Wardrobe),
        area: "14".to_owned(),
        message: "Walnut finish".to_owned(),
    }
}

#[test]
fn complete_form_validates() {
    assert_eq!(complete().validate(), Ok(()));
}

#[test]
fn any_blank_field_fails() {
    let mut form = complete();
    form.area = " ".to_owned();
    assert_eq!(form.validate(), Err(FIELDS_REQUIRED_MESSAGE));

    let mut form = complete();
    form.project_type = None;
    assert_eq!(form.validate(), Err(FIELDS_REQUIRED_MESSAGE));
}

#[test]
fn selects_parse_labels() {
    let mut form = DesignRequestForm::default();
    form.set(DesignField::ProjectType, "Kitchen".to_owned());
    form.set(DesignField::Governorate, "Beni Suef".to_owned());
    assert_eq!(form.project_type, Some(ProjectType::Kitchen));
    assert_eq!(form.value(DesignField::Governorate), "Beni Suef");
    form.set(DesignField::ProjectType, "Garage".to_owned());
    assert_eq!(form.project_type, None);
}
