//! Embedded map for a listing's address.
//!
//! The mapping provider is an external collaborator: this component only
//! builds an embed URL from the address text and lets the provider geocode
//! it. No coordinates are resolved or stored here.

#[cfg(test)]
#[path = "map_preview_test.rs"]
mod map_preview_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;

#[component]
pub fn MapPreview(address: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let embed_base = api.config().maps_embed_base.clone();
    let src = embed_url(&embed_base, &address);
    let link = directions_url(&address);

    view! {
        <div class="map-preview">
            {match src {
                Some(src) => {
                    view! {
                        <iframe
                            class="map-preview__frame"
                            title="Property location"
                            src=src
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                    }
                        .attr("loading", "lazy")
                        .into_any()
                }
                None => view! { <p class="map-preview__empty">"Location unavailable"</p> }.into_any(),
            }}
            {link.map(|href| view! {
                <a class="map-preview__link" href=href target="_blank" rel="noopener">"Open in Maps"</a>
            })}
        </div>
    }
}

/// Embed URL for `address`, or `None` for a blank address.
pub fn embed_url(base: &str, address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    Some(format!("{base}?q={}&z=15&output=embed", urlencoding::encode(address)))
}

/// External map search link for `address`.
pub fn directions_url(address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    ))
}
