//! Landing page: hero, quick search, curated highlights, and the latest
//! approved listings.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::property_card::PropertyCard;
use crate::net::api::ApiClient;
use crate::net::types::{Property, PropertyFilter};
use crate::state::search::SearchContext;
use crate::state::session::SessionStore;
use crate::util::task::spawn_browser;

const LATEST_LIMIT: usize = 6;

struct Featured {
    title: &'static str,
    location: &'static str,
    price: &'static str,
    badge: &'static str,
    image: &'static str,
}

const FEATURED: [Featured; 3] = [
    Featured {
        title: "Modern Villa",
        location: "Mumbai, India",
        price: "₹ 2.5 Cr",
        badge: "House",
        image: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=400&q=80",
    },
    Featured {
        title: "Agricultural Farmland",
        location: "Pune, India",
        price: "₹ 85 L",
        badge: "Farm",
        image: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=400&q=80",
    },
    Featured {
        title: "Residential Land",
        location: "Bangalore, India",
        price: "₹ 1.2 Cr",
        badge: "Land",
        image: "https://images.unsplash.com/photo-1500076656116-558758c991c1?auto=format&fit=crop&w=400&q=80",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let search = expect_context::<SearchContext>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let dashboard = move || session.role().and_then(|role| role.dashboard_path());
    let query = RwSignal::new(search.get_untracked());
    let latest = RwSignal::new(Vec::<Property>::new());

    Effect::new(move || {
        let api = api.clone();
        spawn_browser(async move {
            match api.list_properties(&PropertyFilter::default()).await {
                Ok(mut list) => {
                    list.truncate(LATEST_LIMIT);
                    latest.set(list);
                }
                Err(e) => leptos::logging::error!("latest listings load failed: {e}"),
            }
        });
    });

    // Browsing lives on the buyer dashboard; the guard sends everyone else
    // to login first.
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.set(query.get_untracked().trim());
        navigate("/buyer", NavigateOptions::default());
    };

    let featured = FEATURED
        .iter()
        .map(|item| {
            view! {
                <article class="feature-card">
                    <div class="feature-card__media">
                        <img src=item.image alt=item.title/>
                        <span class="feature-card__badge">{item.badge}</span>
                    </div>
                    <div class="feature-card__body">
                        <h3>{item.title}</h3>
                        <p class="feature-card__location">{item.location}</p>
                        <p class="feature-card__price">{item.price}</p>
                    </div>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__copy">
                    <h1>"Find Your Dream " <span class="hero__accent">"Property"</span> " With Ease"</h1>
                    <p class="hero__lead">
                        "Discover the perfect home, land, or farm from our verified listings. "
                        "Connect with sellers and manage your real estate journey."
                    </p>
                    <div class="hero__actions">
                        {move || match dashboard() {
                            Some(path) => {
                                view! { <A href=path attr:class="btn btn--primary">"Go to Dashboard"</A> }.into_any()
                            }
                            None => {
                                view! {
                                    <A href="/signup" attr:class="btn btn--primary">"Get Started"</A>
                                    <A href="/login" attr:class="btn btn--outline">"Login"</A>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
                <form class="hero__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search by city"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </section>
            <section class="featured">
                <h2>"Featured Properties"</h2>
                <p class="featured__subtitle">"Explore top trending verified listings"</p>
                <div class="featured__grid">{featured}</div>
            </section>
            <section class="latest">
                <h2>"Latest Listings"</h2>
                {move || {
                    let cards = latest
                        .get()
                        .into_iter()
                        .map(|property| view! { <PropertyCard property=property/> })
                        .collect::<Vec<_>>();
                    if cards.is_empty() {
                        view! { <p class="empty-state">"No listings yet."</p> }.into_any()
                    } else {
                        view! { <div class="property-grid">{cards}</div> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
