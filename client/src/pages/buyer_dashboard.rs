//! Buyer dashboard: browse with filters, wishlist, and bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The city filter comes from the shared [`SearchContext`] fed by the nav bar
//! search box; the remaining filters live on this page. Any change re-runs
//! the listing query.
//!
//! DESIGN
//! ======
//! Responses can arrive out of order while the user types, so each browse
//! request carries a sequence number and only the newest one may write the
//! result list.

#[cfg(test)]
#[path = "buyer_dashboard_test.rs"]
mod buyer_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::property_card::PropertyCard;
use crate::net::api::ApiClient;
use crate::net::types::{Property, PropertyFilter, PropertyType, Transaction, format_date, format_price};
use crate::state::search::SearchContext;
use crate::state::session::SessionStore;
use crate::util::forms::parse_optional;
use crate::util::task::spawn_browser;

/// Filter inputs as typed. Blank means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub min_price: String,
    pub max_price: String,
    pub kind: String,
    pub beds: String,
}

/// Combine the shared search text with the page filters.
///
/// The bedroom filter only applies to property types that have rooms, so a
/// value left over from a previous selection cannot hide land or farms.
pub fn build_filter(city: &str, inputs: &FilterInputs) -> PropertyFilter {
    let kind = PropertyType::parse(&inputs.kind);
    let beds = match kind {
        Some(kind) if !kind.has_rooms() => None,
        _ => parse_optional(&inputs.beds),
    };
    PropertyFilter {
        city: city.trim().to_owned(),
        min_price: parse_optional(&inputs.min_price),
        max_price: parse_optional(&inputs.max_price),
        kind,
        beds,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Browse,
    Wishlist,
    Bookings,
}

#[component]
pub fn BuyerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let search = expect_context::<SearchContext>();
    let api = expect_context::<ApiClient>();

    let inputs = RwSignal::new(FilterInputs::default());
    let tab = RwSignal::new(Tab::Browse);
    let properties = RwSignal::new(Vec::<Property>::new());
    let wishlist = RwSignal::new(Vec::<Property>::new());
    let bookings = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let latest_request = StoredValue::new(0_u64);

    {
        let api = api.clone();
        let search = search.clone();
        Effect::new(move || {
            let filter = build_filter(&search.get(), &inputs.get());
            let seq = latest_request.get_value() + 1;
            latest_request.set_value(seq);
            loading.set(true);
            let api = api.clone();
            spawn_browser(async move {
                let result = api.list_properties(&filter).await;
                if latest_request.get_value() != seq {
                    return;
                }
                match result {
                    Ok(list) => {
                        properties.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        leptos::logging::error!("property search failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    {
        let api = api.clone();
        Effect::new(move || {
            let current = tab.get();
            let Some(token) = session.bearer_token() else {
                return;
            };
            let api = api.clone();
            match current {
                Tab::Browse => {}
                Tab::Wishlist => spawn_browser(async move {
                    match api.wishlist(&token).await {
                        Ok(list) => wishlist.set(list),
                        Err(e) => leptos::logging::error!("wishlist load failed: {e}"),
                    }
                }),
                Tab::Bookings => spawn_browser(async move {
                    match api.buyer_transactions(&token).await {
                        Ok(list) => bookings.set(list),
                        Err(e) => leptos::logging::error!("bookings load failed: {e}"),
                    }
                }),
            }
        });
    }

    let shows_rooms = move || inputs.with(|i| PropertyType::parse(&i.kind).is_none_or(PropertyType::has_rooms));

    let filters = move || {
        let type_options = PropertyType::ALL
            .into_iter()
            .map(|kind| {
                let selected = move || inputs.with(|i| i.kind == kind.as_str());
                view! { <option value=kind.as_str() selected=selected>{kind.label()}</option> }
            })
            .collect::<Vec<_>>();
        view! {
            <aside class="filters">
                <h3>"Filters"</h3>
                <label class="field">
                    <span>"Location"</span>
                    <input
                        type="text"
                        placeholder="City"
                        prop:value={
                            let search = search.clone();
                            move || search.get()
                        }
                        on:input={
                            let search = search.clone();
                            move |ev| search.set(event_target_value(&ev))
                        }
                    />
                </label>
                <label class="field">
                    <span>"Property Type"</span>
                    <select on:change=move |ev| inputs.update(|i| i.kind = event_target_value(&ev))>
                        <option value="">"All Types"</option>
                        {type_options}
                    </select>
                </label>
                <div class="field__row">
                    <label class="field">
                        <span>"Min Price"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || inputs.with(|i| i.min_price.clone())
                            on:input=move |ev| inputs.update(|i| i.min_price = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Max Price"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || inputs.with(|i| i.max_price.clone())
                            on:input=move |ev| inputs.update(|i| i.max_price = event_target_value(&ev))
                        />
                    </label>
                </div>
                <Show when=shows_rooms>
                    <label class="field">
                        <span>"Bedrooms"</span>
                        <select on:change=move |ev| inputs.update(|i| i.beds = event_target_value(&ev))>
                            <option value="">"Any"</option>
                            <option value="1">"1+"</option>
                            <option value="2">"2+"</option>
                            <option value="3">"3+"</option>
                            <option value="4">"4+"</option>
                        </select>
                    </label>
                </Show>
                <button
                    class="btn btn--ghost btn--block"
                    on:click={
                        let search = search.clone();
                        move |_| {
                            search.clear();
                            inputs.set(FilterInputs::default());
                        }
                    }
                >
                    "Reset"
                </button>
            </aside>
        }
    };

    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    let property_grid = |list: Vec<Property>, empty: &'static str| {
        if list.is_empty() {
            return view! { <p class="empty-state">{empty}</p> }.into_any();
        }
        let cards = list
            .into_iter()
            .map(|property| view! { <PropertyCard property=property show_like=true/> })
            .collect::<Vec<_>>();
        view! { <div class="property-grid">{cards}</div> }.into_any()
    };

    let bookings_view = move || {
        let rows = bookings.get();
        if rows.is_empty() {
            return view! { <p class="empty-state">"No bookings yet."</p> }.into_any();
        }
        let rows = rows
            .into_iter()
            .map(|booking| {
                let (title, href) = booking
                    .property
                    .as_ref()
                    .map(|p| (p.title.clone(), format!("/property/{}", p.id)))
                    .unwrap_or_else(|| ("Listing removed".to_owned(), "/buyer".to_owned()));
                view! {
                    <tr>
                        <td><A href=href>{title}</A></td>
                        <td>{format_price(booking.amount)}</td>
                        <td class="mono">{booking.transaction_id.clone()}</td>
                        <td>{format_date(booking.payment_date.as_deref())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="data-table">
                <thead>
                    <tr><th>"Property"</th><th>"Token Paid"</th><th>"Transaction"</th><th>"Date"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
            .into_any()
    };

    view! {
        <div class="dashboard buyer-dashboard">
            <header class="dashboard__header">
                <h1>"Find Your Next Property"</h1>
            </header>
            <div class="tabs">
                {tab_button(Tab::Browse, "Browse")}
                {tab_button(Tab::Wishlist, "Wishlist")}
                {tab_button(Tab::Bookings, "My Bookings")}
            </div>
            {move || error.get().map(|message| view! { <div class="notice notice--error">{message}</div> })}
            {move || match tab.get() {
                Tab::Browse => {
                    view! {
                        <div class="browse">
                            {filters()}
                            <section class="browse__results">
                                <Show when=move || loading.get()>
                                    <p class="muted">"Searching..."</p>
                                </Show>
                                {move || property_grid(properties.get(), "No properties found. Try adjusting your filters or location.")}
                            </section>
                        </div>
                    }
                        .into_any()
                }
                Tab::Wishlist => {
                    view! { <section>{move || property_grid(wishlist.get(), "Your wishlist is empty.")}</section> }.into_any()
                }
                Tab::Bookings => view! { <section>{bookings_view}</section> }.into_any(),
            }}
        </div>
    }
}
