//! Listing card used by the home page and the buyer dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::{Property, format_price};
use crate::state::session::SessionStore;
use crate::util::task::spawn_browser;

/// A clickable listing summary. With `show_like`, buyers get a wishlist
/// toggle backed by the likes endpoints.
#[component]
pub fn PropertyCard(property: Property, #[prop(optional)] show_like: bool) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let liked = RwSignal::new(false);
    let property_id = property.id;

    if show_like {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let Some(token) = session.bearer_token() else {
                return;
            };
            let api = api.clone();
            spawn_browser(async move {
                match api.is_liked(property_id, &token).await {
                    Ok(value) => liked.set(value),
                    Err(e) => leptos::logging::warn!("like check failed for {property_id}: {e}"),
                }
            });
        });
    }

    let on_like = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(token) = session.bearer_token() else {
            return;
        };
        let api = api.clone();
        spawn_browser(async move {
            match api.toggle_like(property_id, &token).await {
                Ok(value) => liked.set(value),
                Err(e) => leptos::logging::error!("like toggle failed for {property_id}: {e}"),
            }
        });
    };

    let href = format!("/property/{property_id}");
    let cover = property.cover_image();
    let rooms = property.kind.has_rooms().then(|| {
        format!(
            "{} bd · {} ba{}",
            property.beds.unwrap_or_default(),
            property.baths.unwrap_or_default(),
            property.bhk.as_deref().map(|b| format!(" · {b}")).unwrap_or_default()
        )
    });

    view! {
        <A href=href attr:class="property-card">
            <div class="property-card__media">
                <img class="property-card__image" src=cover alt=property.title.clone()/>
                <span class="property-card__type">{property.kind.label()}</span>
                <Show when=move || show_like>
                    <button
                        class="property-card__like"
                        class:property-card__like--active=move || liked.get()
                        title="Save to wishlist"
                        on:click=on_like.clone()
                    >
                        {move || if liked.get() { "♥" } else { "♡" }}
                    </button>
                </Show>
            </div>
            <div class="property-card__body">
                <h3 class="property-card__title">{property.title.clone()}</h3>
                <p class="property-card__location">{property.full_address()}</p>
                <p class="property-card__facts">
                    <span>{property.area.clone()}</span>
                    {rooms.map(|r| view! { <span>{r}</span> })}
                </p>
                <p class="property-card__price">{format_price(property.price)}</p>
            </div>
        </A>
    }
}
