//! Route outlet that applies the role guard on every navigation.
//!
//! Every declared route renders this component. It re-evaluates
//! `util::guard::resolve` whenever the pathname or the session changes and
//! mounts the resulting page or issues a redirect. The decision is memoized,
//! so session edits that keep the same outcome (a renamed user, say) do not
//! remount the page.

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_location;

use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::buyer_dashboard::BuyerDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::property_details::PropertyDetailsPage;
use crate::pages::seller_dashboard::SellerDashboardPage;
use crate::pages::signup::SignupPage;
use crate::state::session::SessionStore;
use crate::util::guard::{AppView, RouteDecision, resolve};

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        session
            .is_restored()
            .then(|| resolve(&location.pathname.get(), session.current_session().as_ref()))
    });

    move || match decision.get() {
        None => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
        Some(RouteDecision::Mount(view)) => mount(view),
        Some(RouteDecision::Redirect(to)) => view! { <Redirect path=to/> }.into_any(),
        Some(RouteDecision::NotFound) => view! { <NotFoundPage/> }.into_any(),
    }
}

fn mount(view: AppView) -> AnyView {
    match view {
        AppView::Home => view! { <HomePage/> }.into_any(),
        AppView::Login => view! { <LoginPage/> }.into_any(),
        AppView::Signup => view! { <SignupPage/> }.into_any(),
        AppView::Profile => view! { <ProfilePage/> }.into_any(),
        AppView::PropertyDetails { id } => view! { <PropertyDetailsPage id=id/> }.into_any(),
        AppView::BuyerDashboard => view! { <BuyerDashboardPage/> }.into_any(),
        AppView::SellerDashboard => view! { <SellerDashboardPage/> }.into_any(),
        AppView::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"Page not found"</h1>
            <A href="/" attr:class="btn btn--primary">"Back to listings"</A>
        </div>
    }
}
