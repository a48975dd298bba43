//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Both stores are constructed once in `app::App` and handed to views through
//! Leptos context. Neither is ambient global state; tests build their own.

pub mod search;
pub mod session;
