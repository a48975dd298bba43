//! Small browser affordances: confirmation prompts and history navigation.
//!
//! SSR paths no-op. `confirm` answers `false` there so destructive actions
//! never proceed without a user.

/// Ask the user to confirm `message`. `false` when no browser is present.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Step back one entry in the browser history.
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(Err(e)) = web_sys::window().and_then(|w| w.history().ok()).map(|h| h.back()) {
        leptos::logging::warn!("history back failed: {e:?}");
    }
}
