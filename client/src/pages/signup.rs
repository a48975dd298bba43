//! Signup page: registration form, then email OTP verification.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice::{Notice, NoticeKind, NoticeState};
use crate::net::api::ApiClient;
use crate::state::session::Role;
use crate::util::forms::{SignupForm, validate_otp, validate_signup};
use crate::util::guard::LOGIN_PATH;
use crate::util::task::spawn_browser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Register,
    Verify,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm { role: Role::Buyer, ..SignupForm::default() });
    let otp = RwSignal::new(String::new());
    let step = RwSignal::new(Step::Register);
    let notice = RwSignal::<NoticeState>::new(None);
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let verified = RwSignal::new(false);

    Effect::new(move || {
        if verified.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let fail = move |message: String| notice.set(Some((NoticeKind::Error, message)));

    let on_register = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let request = match form.with(validate_signup) {
                Ok(request) => request,
                Err(message) => return fail(message.to_owned()),
            };
            busy.set(true);
            notice.set(None);
            let api = api.clone();
            spawn_browser(async move {
                match api.signup(&request).await {
                    Ok(_) => {
                        notice.set(Some((
                            NoticeKind::Success,
                            "Registration successful! Please check your email for OTP.".to_owned(),
                        )));
                        step.set(Step::Verify);
                    }
                    Err(e) => fail(e.to_string()),
                }
                busy.set(false);
            });
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_otp(&form.with(|f| f.email.clone()), &otp.get()) {
            Ok(request) => request,
            Err(message) => return fail(message.to_owned()),
        };
        busy.set(true);
        let api = api.clone();
        spawn_browser(async move {
            match api.verify_otp(&request).await {
                Ok(_) => {
                    notice.set(Some((NoticeKind::Success, "Email verified successfully!".to_owned())));
                    verified.set(true);
                }
                Err(e) => fail(e.to_string()),
            }
            busy.set(false);
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, get: fn(&SignupForm) -> String, set: fn(&mut SignupForm, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    let register_view = move || {
        view! {
            <form class="auth-form" on:submit=on_register.clone()>
                {text_field("Full Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                <label class="field">
                    <span>"Password"</span>
                    <div class="field__row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button type="button" class="btn btn--ghost" on:click=move |_| show_password.update(|v| *v = !*v)>
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                {text_field("Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                <label class="field">
                    <span>"I am a"</span>
                    <select on:change=move |ev| {
                        let role = if event_target_value(&ev) == "SELLER" { Role::Seller } else { Role::Buyer };
                        form.update(|f| f.role = role);
                    }>
                        <option value="BUYER">"Buyer"</option>
                        <option value="SELLER">"Seller"</option>
                    </select>
                </label>
                <Show when=move || form.with(|f| f.role == Role::Seller)>
                    {text_field("Company Name (Optional)", "text", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                    <label class="field">
                        <span>"Address"</span>
                        <textarea
                            rows="2"
                            prop:value=move || form.with(|f| f.address.clone())
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        ></textarea>
                    </label>
                </Show>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    "Create Account"
                </button>
            </form>
        }
    };

    let verify_view = move || {
        view! {
            <form class="auth-form" on:submit=on_verify.clone()>
                <p class="auth-card__subtitle">
                    "Enter the code sent to " {move || form.with(|f| f.email.clone())}
                </p>
                <label class="field">
                    <span>"OTP"</span>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    "Verify Email"
                </button>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Notice state=notice/>
                {move || match step.get() {
                    Step::Register => register_view().into_any(),
                    Step::Verify => verify_view().into_any(),
                }}
                <p class="auth-card__footer">"Already have an account? " <A href="/login">"Login"</A></p>
            </div>
        </div>
    }
}
