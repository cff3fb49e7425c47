//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod admin;
pub mod book_now;
pub mod contact;
pub mod contact_us;
pub mod dashboard;
pub mod gallery;
pub mod home;
pub mod legal;
pub mod login;
pub mod request_design;
pub mod services;
