//! Networking: REST client and backend DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls against the external backend and `types`
//! defines the JSON schema it speaks.

pub mod api;
pub mod types;
