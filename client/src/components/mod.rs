//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, the cart, and the forms while reading and
//! writing shared state from Leptos context providers.

pub mod admin_tables;
pub mod auth_modal;
pub mod cart_launcher;
pub mod cart_panel;
pub mod contact_form;
pub mod filter_sidebar;
pub mod footer;
pub mod gallery_lightbox;
pub mod header;
pub mod kitchen_calculator;
pub mod product_card;
pub mod request_design_form;
