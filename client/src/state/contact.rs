//! Reservation form: typed fields, validation, and submit lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Contact page pairs this form with the current cart selection. A valid
//! form plus a non-empty selection becomes a [`ContactSubmission`] for
//! `POST /api/contact`; a successful post clears both the form and the cart.
//!
//! INVARIANTS
//! ==========
//! - Only one submission is in flight at a time (`SubmitStatus::Sending`).
//! - Editing any field clears a previous inline error.
//! - A failed post keeps the entered fields so the user can retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ContactSubmission;
use crate::state::cart::Selection;

pub const NO_UNITS_MESSAGE: &str = "Please select at least one unit.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Egyptian governorates offered in the reservation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Governorate {
    Cairo,
    Giza,
    Alexandria,
    Dakahlia,
    #[serde(rename = "Red Sea")]
    RedSea,
    Beheira,
    Fayoum,
    Gharbia,
    Ismailia,
    Menoufia,
    Minya,
    Qalyubia,
    #[serde(rename = "New Valley")]
    NewValley,
    Suez,
    Aswan,
    Assiut,
    #[serde(rename = "Beni Suef")]
    BeniSuef,
    #[serde(rename = "Port Said")]
    PortSaid,
    Damietta,
    Sharqia,
    #[serde(rename = "South Sinai")]
    SouthSinai,
    #[serde(rename = "Kafr El Sheikh")]
    KafrElSheikh,
    Matrouh,
    Luxor,
    Qena,
    #[serde(rename = "North Sinai")]
    NorthSinai,
    Sohag,
}

impl Governorate {
    /// Every governorate in dropdown order.
    pub const ALL: [Self; 27] = [
        Self::Cairo,
        Self::Giza,
        Self::Alexandria,
        Self::Dakahlia,
        Self::RedSea,
        Self::Beheira,
        Self::Fayoum,
        Self::Gharbia,
        Self::Ismailia,
        Self::Menoufia,
        Self::Minya,
        Self::Qalyubia,
        Self::NewValley,
        Self::Suez,
        Self::Aswan,
        Self::Assiut,
        Self::BeniSuef,
        Self::PortSaid,
        Self::Damietta,
        Self::Sharqia,
        Self::SouthSinai,
        Self::KafrElSheikh,
        Self::Matrouh,
        Self::Luxor,
        Self::Qena,
        Self::NorthSinai,
        Self::Sohag,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cairo => "Cairo",
            Self::Giza => "Giza",
            Self::Alexandria => "Alexandria",
            Self::Dakahlia => "Dakahlia",
            Self::RedSea => "Red Sea",
            Self::Beheira => "Beheira",
            Self::Fayoum => "Fayoum",
            Self::Gharbia => "Gharbia",
            Self::Ismailia => "Ismailia",
            Self::Menoufia => "Menoufia",
            Self::Minya => "Minya",
            Self::Qalyubia => "Qalyubia",
            Self::NewValley => "New Valley",
            Self::Suez => "Suez",
            Self::Aswan => "Aswan",
            Self::Assiut => "Assiut",
            Self::BeniSuef => "Beni Suef",
            Self::PortSaid => "Port Said",
            Self::Damietta => "Damietta",
            Self::Sharqia => "Sharqia",
            Self::SouthSinai => "South Sinai",
            Self::KafrElSheikh => "Kafr El Sheikh",
            Self::Matrouh => "Matrouh",
            Self::Luxor => "Luxor",
            Self::Qena => "Qena",
            Self::NorthSinai => "North Sinai",
            Self::Sohag => "Sohag",
        }
    }

    /// Parse a dropdown label. Empty or unknown input yields `None`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// Editable fields of the reservation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Governorate,
    Message,
}

/// One validation failure. `field` is `None` for form-level problems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Option<ContactField>,
    pub message: &'static str,
}

/// Every problem found by [`ContactForm::validate`], in display priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: Option<ContactField>, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn for_field(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == Some(field)).map(|e| e.message)
    }

    /// The single message shown under the form.
    #[must_use]
    pub fn summary(&self) -> Option<&'static str> {
        self.0.first().map(|e| e.message)
    }
}

/// Typed reservation form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub governorate: Option<Governorate>,
    pub message: String,
}

impl ContactForm {
    /// Current raw value of `field` as bound to its input.
    #[must_use]
    pub fn value(&self, field: ContactField) -> String {
        match field {
            ContactField::FirstName => self.first_name.clone(),
            ContactField::LastName => self.last_name.clone(),
            ContactField::Email => self.email.clone(),
            ContactField::Phone => self.phone.clone(),
            ContactField::Address => self.address.clone(),
            ContactField::Governorate => self.governorate.map(Governorate::label).unwrap_or_default().to_owned(),
            ContactField::Message => self.message.clone(),
        }
    }

    /// Write an input's value into `field`.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Address => self.address = value,
            ContactField::Governorate => self.governorate = Governorate::parse(&value),
            ContactField::Message => self.message = value,
        }
    }

    /// Check the form against `selection` and build the wire payload.
    ///
    /// # Errors
    ///
    /// Returns every failed rule; the empty-selection error sorts first.
    pub fn validate(&self, selection: &Selection) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();
        if selection.is_empty() {
            errors.push(None, NO_UNITS_MESSAGE);
        }
        let required = [
            (ContactField::FirstName, &self.first_name, "First name is required."),
            (ContactField::LastName, &self.last_name, "Last name is required."),
            (ContactField::Email, &self.email, "Email is required."),
            (ContactField::Phone, &self.phone, "Phone number is required."),
            (ContactField::Address, &self.address, "Address is required."),
            (ContactField::Message, &self.message, "Message is required."),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.push(Some(field), message);
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            errors.push(Some(ContactField::Email), "Please enter a valid email address.");
        }
        let Some(gov) = self.governorate else {
            errors.push(Some(ContactField::Governorate), "Please select a governorate.");
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: email.to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            gov: gov.label().to_owned(),
            message: self.message.trim().to_owned(),
            units: selection.items().to_vec(),
        })
    }
}

/// Lifecycle of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Whether the submit button is disabled.
#[must_use]
pub fn submit_disabled(busy: bool, governorate: Option<Governorate>, selection: &Selection) -> bool {
    busy || governorate.is_none() || selection.is_empty()
}

/// Form plus submit status, held in a page-local signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactFormState {
    /// Apply an edit and clear any inline error.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        if matches!(self.status, SubmitStatus::Failed(_) | SubmitStatus::Sent) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Start a submit. Returns the payload to post, or `None` when a submit
    /// is already running or validation failed (the error is recorded).
    pub fn begin_submit(&mut self, selection: &Selection) -> Option<ContactSubmission> {
        if self.status.is_busy() {
            return None;
        }
        match self.form.validate(selection) {
            Ok(submission) => {
                self.status = SubmitStatus::Sending;
                Some(submission)
            }
            Err(errors) => {
                let message = errors.summary().unwrap_or(SUBMIT_FAILED_MESSAGE);
                self.status = SubmitStatus::Failed(message.to_owned());
                None
            }
        }
    }

    /// Record the outcome of the post. Success resets the fields.
    pub fn finish_submit<E>(&mut self, outcome: &Result<(), E>) {
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent;
            }
            Err(_) => self.status = SubmitStatus::Failed(SUBMIT_FAILED_MESSAGE.to_owned()),
        }
    }
}
