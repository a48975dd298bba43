//! Login page: email + password, plus Google sign-in when configured.
//!
//! A successful login writes the session through [`SessionStore`] and moves
//! the user to their role's dashboard. An unknown role lands on the home
//! page instead of a dashboard it could never open.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_sign_in::GoogleSignIn;
use crate::net::api::ApiClient;
use crate::state::session::SessionStore;
use crate::util::forms::validate_login;
use crate::util::guard::post_login_path;
use crate::util::task::spawn_browser;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let landing = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(target) = landing.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = {
        let session = session.clone();
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let request = match validate_login(&email.get(), &password.get()) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            let session = session.clone();
            let api = api.clone();
            spawn_browser(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        let user = response.into_session(&request.email);
                        let target = post_login_path(user.role);
                        session.set_session(user);
                        landing.set(Some(target));
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_credential = Callback::new(move |credential: String| {
        let session = session.clone();
        let api = api.clone();
        busy.set(true);
        error.set(None);
        spawn_browser(async move {
            match api.google_login(&credential).await {
                Ok(response) => {
                    let user = response.into_session("");
                    let target = post_login_path(user.role);
                    session.set_session(user);
                    landing.set(Some(target));
                }
                Err(e) => {
                    leptos::logging::warn!("google login failed: {e}");
                    error.set(Some("Google Login Failed".to_owned()));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                {move || error.get().map(|message| view! { <div class="notice notice--error">{message}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <GoogleSignIn on_credential=on_credential/>
                <p class="auth-card__footer">"Don't have an account? " <A href="/signup">"Sign up"</A></p>
            </div>
        </div>
    }
}
