//! Site chrome state (auth modal and mobile menu visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`cart`,
//! `auth`) so the header can open the modal from any page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub auth_modal_open: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// Open the auth modal; the mobile menu closes underneath it.
    pub fn open_auth_modal(&mut self) {
        self.auth_modal_open = true;
        self.mobile_menu_open = false;
    }

    pub fn close_auth_modal(&mut self) {
        self.auth_modal_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called after any navigation.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
