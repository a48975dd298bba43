//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and shared widgets while reading shared state
//! (session, search text, API client) from Leptos context providers.

pub mod google_sign_in;
pub mod map_preview;
pub mod nav_bar;
pub mod notice;
pub mod property_card;
pub mod property_form_dialog;
pub mod route_outlet;
