//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows role-specific dashboard links and, for buyers, the listing search
//! box. The search box writes the shared `SearchContext`, which the buyer
//! dashboard reads as its city filter.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::search::SearchContext;
use crate::state::session::{Role, SessionStore};
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let search = expect_context::<SearchContext>();
    let navigate = use_navigate();

    let role = {
        let session = session.clone();
        move || session.role()
    };
    let is_buyer = {
        let role = role.clone();
        move || role() == Some(Role::Buyer)
    };
    let display_name = {
        let session = session.clone();
        Signal::derive(move || session.current_session().map(|s| s.name).unwrap_or_default())
    };

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.clear_session();
            logged_out.set(true);
        }
    };

    let search_value = {
        let search = search.clone();
        move || search.get()
    };
    let on_search_input = move |ev| search.set(event_target_value(&ev));

    let signed_in = {
        let session = session.clone();
        move || session.is_authenticated()
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"RealEstateHelper"</A>

            <Show when=is_buyer.clone()>
                <div class="navbar__search">
                    <input
                        class="navbar__search-input"
                        type="search"
                        placeholder="Search properties by city..."
                        prop:value=search_value.clone()
                        on:input=on_search_input.clone()
                    />
                </div>
            </Show>

            <div class="navbar__links">
                <Show when={
                    let is_buyer = is_buyer.clone();
                    move || !is_buyer()
                }>
                    <A href="/" attr:class="navbar__link">"Home"</A>
                </Show>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="btn btn--outline">"Login"</A>
                            <A href="/signup" attr:class="btn btn--primary">"Sign Up"</A>
                        }
                    }
                >
                    {
                        let role = role.clone();
                        move || dashboard_link(role())
                    }
                    <A href="/profile" attr:class="navbar__user">{display_name}</A>
                    <button class="btn btn--danger-text" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}

fn dashboard_link(role: Option<Role>) -> Option<AnyView> {
    let role = role?;
    let href = role.dashboard_path()?;
    let label = match role {
        Role::Buyer => "Dashboard",
        Role::Seller => "Seller Dashboard",
        Role::Admin => "Admin Panel",
        Role::Unknown => return None,
    };
    Some(view! { <A href=href attr:class="navbar__link navbar__link--strong">{label}</A> }.into_any())
}
