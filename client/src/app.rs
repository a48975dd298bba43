//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_outlet::{NotFoundPage, RouteOutlet};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::search::SearchContext;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

const GOOGLE_IDENTITY_SCRIPT: &str = "https://accounts.google.com/gsi/client";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let google_script = ClientConfig::from_build_env()
        .google_client_id
        .map(|_| view! { <script src=GOOGLE_IDENTITY_SCRIPT></script> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {google_script}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, shared search text, and API client, then
/// hands every route to [`RouteOutlet`] so the role guard runs on each
/// navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(Arc::new(LocalStorage));
    provide_context(session.clone());
    provide_context(SearchContext::new());
    provide_context(ApiClient::new(ClientConfig::from_build_env()));

    // Browser storage only exists after hydration; the server renders the
    // unrestored (loading) state.
    Effect::new(move || {
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/realestate.css"/>
        <Title text="RealEstateHelper"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=StaticSegment("login") view=RouteOutlet/>
                    <Route path=StaticSegment("signup") view=RouteOutlet/>
                    <Route path=StaticSegment("profile") view=RouteOutlet/>
                    <Route path=(StaticSegment("property"), ParamSegment("id")) view=RouteOutlet/>
                    <Route path=StaticSegment("buyer") view=RouteOutlet/>
                    <Route path=(StaticSegment("buyer"), WildcardSegment("rest")) view=RouteOutlet/>
                    <Route path=StaticSegment("seller") view=RouteOutlet/>
                    <Route path=(StaticSegment("seller"), WildcardSegment("rest")) view=RouteOutlet/>
                    <Route path=StaticSegment("admin") view=RouteOutlet/>
                    <Route path=(StaticSegment("admin"), WildcardSegment("rest")) view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}
