//! Search query shared between the navigation bar and the listing browser.
//!
//! Plain last-writer-wins cell. No debouncing and no validation: a `set`
//! is visible to every other handle on the very next `get`.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SearchContext {
    query: ArcRwSignal<String>,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self { query: ArcRwSignal::new(String::new()) }
    }

    /// Current query. Tracked when read inside a reactive scope.
    pub fn get(&self) -> String {
        self.query.get()
    }

    pub fn get_untracked(&self) -> String {
        self.query.get_untracked()
    }

    pub fn set(&self, value: impl Into<String>) {
        self.query.set(value.into());
    }

    pub fn clear(&self) {
        self.query.set(String::new());
    }
}
