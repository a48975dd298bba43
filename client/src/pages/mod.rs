//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and form state and delegates shared
//! rendering to `components`. Access control happens before a page mounts
//! (see `util::guard`), so pages assume the session they need is present.

pub mod admin_dashboard;
pub mod buyer_dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod property_details;
pub mod seller_dashboard;
pub mod signup;
