//! Inline status message.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

/// A message plus its kind. `None` hides the notice.
pub type NoticeState = Option<(NoticeKind, String)>;

#[component]
pub fn Notice(state: RwSignal<NoticeState>) -> impl IntoView {
    move || {
        state.get().map(|(kind, message)| {
            view! {
                <div class=kind.class() role="status">
                    <span>{message}</span>
                    <button class="notice__close" on:click=move |_| state.set(None)>"×"</button>
                </div>
            }
        })
    }
}
