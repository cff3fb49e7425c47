//! General "Contact Us" enquiry form. Local-only; nothing is sent.

#[cfg(test)]
#[path = "contact_us_test.rs"]
mod contact_us_test;

/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 3000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    /// Optional.
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnquiryStatus {
    Success,
    Error,
}

impl EnquiryForm {
    /// Accept the enquiry when name, email, and message are filled; a
    /// successful submit clears the form.
    pub fn submit(&mut self) -> EnquiryStatus {
        let required = [&self.name, &self.email, &self.message];
        if required.iter().any(|v| v.trim().is_empty()) {
            return EnquiryStatus::Error;
        }
        *self = Self::default();
        EnquiryStatus::Success
    }
}
