//! "Get 3D Design" request form.
//!
//! There is no backend for design requests yet; the page simulates delivery
//! with a fixed delay and then resets the form.

#[cfg(test)]
#[path = "design_request_test.rs"]
mod design_request_test;

use crate::state::contact::Governorate;

/// Simulated delivery time for a design request.
pub const SIMULATED_SUBMIT_MS: u32 = 1200;

pub const FIELDS_REQUIRED_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Kitchen,
    Wardrobe,
    Other,
}

impl ProjectType {
    pub const ALL: [Self; 3] = [Self::Kitchen, Self::Wardrobe, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Wardrobe => "Wardrobe",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesignField {
    Name,
    Email,
    Phone,
    Address,
    Governorate,
    ProjectType,
    Area,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignRequestForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub governorate: Option<Governorate>,
    pub project_type: Option<ProjectType>,
    /// Free-text area in square meters.
    pub area: String,
    pub message: String,
}

impl DesignRequestForm {
    #[must_use]
    pub fn value(&self, field: DesignField) -> String {
        match field {
            DesignField::Name => self.name.clone(),
            DesignField::Email => self.email.clone(),
            DesignField::Phone => self.phone.clone(),
            DesignField::Address => self.address.clone(),
            DesignField::Governorate => self.governorate.map(Governorate::label).unwrap_or_default().to_owned(),
            DesignField::ProjectType => self.project_type.map(ProjectType::label).unwrap_or_default().to_owned(),
            DesignField::Area => self.area.clone(),
            DesignField::Message => self.message.clone(),
        }
    }

    pub fn set(&mut self, field: DesignField, value: String) {
        match field {
            DesignField::Name => self.name = value,
            DesignField::Email => self.email = value,
            DesignField::Phone => self.phone = value,
            DesignField::Address => self.address = value,
            DesignField::Governorate => self.governorate = Governorate::parse(&value),
            DesignField::ProjectType => self.project_type = ProjectType::parse(&value),
            DesignField::Area => self.area = value,
            DesignField::Message => self.message = value,
        }
    }

    /// Every field is required.
    ///
    /// # Errors
    ///
    /// Returns the inline message when any field is blank or unselected.
    pub fn validate(&self) -> Result<(), &'static str> {
        let texts = [&self.name, &self.email, &self.phone, &self.address, &self.area, &self.message];
        if texts.iter().any(|t| t.trim().is_empty()) || self.governorate.is_none() || self.project_type.is_none() {
            return Err(FIELDS_REQUIRED_MESSAGE);
        }
        Ok(())
    }
}
