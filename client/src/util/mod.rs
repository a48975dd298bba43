//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure decision logic (route
//! guarding, form validation) from page and component rendering.

pub mod browser;
pub mod contact;
pub mod forms;
pub mod guard;
pub mod storage;
pub mod task;
