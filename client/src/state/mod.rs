//! Client-side state containers shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is plain Rust data plus transitions, testable natively.
//! Components wrap them in `RwSignal`s; browser persistence is injected as a
//! `SessionStore` rather than held inside the state.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod contact_us;
pub mod design_request;
pub mod estimator;
pub mod gallery;
pub mod launcher;
pub mod ui;
