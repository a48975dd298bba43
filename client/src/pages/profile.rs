//! Profile page: view and edit the signed-in user's details.
//!
//! Any authenticated role may open it. Saved changes to the display name
//! are written back into the session so the nav bar picks them up.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeKind, NoticeState};
use crate::net::api::ApiClient;
use crate::net::types::UserAccount;
use crate::state::session::{Role, Session, SessionStore};
use crate::util::forms::{ProfileForm, validate_profile};
use crate::util::task::spawn_browser;

/// Pre-fill the form from the stored account.
pub fn form_from_account(account: &UserAccount) -> ProfileForm {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    ProfileForm {
        name: account.name.clone(),
        phone: text(&account.phone),
        company_name: text(&account.company_name),
        address: text(&account.address),
        city: text(&account.city),
        state: text(&account.state),
        zip: text(&account.zip),
    }
}

/// Fold a saved account back into the session. Identity and credentials
/// stay as issued at login.
pub fn refreshed_session(session: &Session, account: &UserAccount) -> Session {
    Session {
        name: if account.name.trim().is_empty() { session.name.clone() } else { account.name.clone() },
        ..session.clone()
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();

    let form = RwSignal::new(ProfileForm::default());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let notice = RwSignal::<NoticeState>::new(None);

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let Some(token) = session.bearer_token() else {
                return;
            };
            if let Some(current) = session.current_session_untracked() {
                form.update(|f| f.name = current.name);
            }
            let api = api.clone();
            spawn_browser(async move {
                match api.profile(&token).await {
                    Ok(account) => form.set(form_from_account(&account)),
                    Err(e) => leptos::logging::warn!("profile load failed: {e}"),
                }
            });
        });
    }

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let update = match form.with(validate_profile) {
                Ok(update) => update,
                Err(message) => {
                    notice.set(Some((NoticeKind::Error, message.to_owned())));
                    return;
                }
            };
            let Some(token) = session.bearer_token() else {
                return;
            };
            saving.set(true);
            let api = api.clone();
            let session = session.clone();
            spawn_browser(async move {
                match api.update_profile(&update, &token).await {
                    Ok(account) => {
                        if let Some(current) = session.current_session_untracked() {
                            session.set_session(refreshed_session(&current, &account));
                        }
                        form.set(form_from_account(&account));
                        notice.set(Some((NoticeKind::Success, "Profile updated successfully!".to_owned())));
                        editing.set(false);
                    }
                    Err(e) => {
                        leptos::logging::error!("profile update failed: {e}");
                        notice.set(Some((NoticeKind::Error, format!("Failed to update profile. {e}"))));
                    }
                }
                saving.set(false);
            });
        }
    };

    let field = move |label: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type="text"
                    disabled=move || !editing.get()
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    let header = {
        let session = session.clone();
        move || {
            let current = session.current_session();
            let email = current.as_ref().map(|s| s.email.clone()).unwrap_or_default();
            let role = current.map_or(Role::Unknown, |s| s.role);
            view! {
                <header class="profile-card__header">
                    <h1>"My Profile"</h1>
                    <p>{email}</p>
                    <span class="badge badge--success">{role.label()}</span>
                </header>
            }
        }
    };
    let email = move || session.current_session().map(|s| s.email).unwrap_or_default();

    view! {
        <div class="profile-page">
            <div class="profile-card">
                {header}
                <div class="profile-card__body">
                    <h2 class="section-title">"Personal Information"</h2>
                    <Notice state=notice/>
                    <form class="profile-form" on:submit=on_submit>
                        <div class="field-grid">
                            {field("Full Name", |f| f.name.clone(), |f, v| f.name = v)}
                            <label class="field">
                                <span>"Email Address"</span>
                                <input type="email" disabled=true prop:value=email/>
                            </label>
                            {field("Phone Number", |f| f.phone.clone(), |f, v| f.phone = v)}
                            {field("Company Name", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                            {field("Address", |f| f.address.clone(), |f, v| f.address = v)}
                            {field("City", |f| f.city.clone(), |f, v| f.city = v)}
                            {field("State", |f| f.state.clone(), |f, v| f.state = v)}
                            {field("Zip Code", |f| f.zip.clone(), |f, v| f.zip = v)}
                        </div>
                        <div class="profile-form__actions">
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <button type="button" class="btn btn--primary" on:click=move |_| editing.set(true)>
                                        "Edit Profile"
                                    </button>
                                }
                            >
                                <button type="button" class="btn" on:click=move |_| editing.set(false)>"Cancel"</button>
                                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                                    "Save Changes"
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
