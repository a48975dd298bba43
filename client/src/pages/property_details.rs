//! Property details: gallery, facts, map, and buyer actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by anyone. Buyers can contact the seller or book the listing by
//! paying the token amount. Contacting while signed out sends the visitor to
//! the login page first.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::map_preview::MapPreview;
use crate::components::notice::{Notice, NoticeKind, NoticeState};
use crate::net::api::ApiClient;
use crate::net::types::{Property, format_price};
use crate::state::session::{Role, SessionStore};
use crate::util::browser::go_back;
use crate::util::contact::{mailto_link, tel_link, whatsapp_link};
use crate::util::guard::LOGIN_PATH;
use crate::util::task::spawn_browser;

#[component]
pub fn PropertyDetailsPage(id: String) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let property = RwSignal::new(None::<Property>);
    let load_error = RwSignal::new(None::<String>);
    let selected_image = RwSignal::new(0_usize);
    let notice = RwSignal::<NoticeState>::new(None);
    let paying = RwSignal::new(false);
    let paid = RwSignal::new(false);
    let show_payment = RwSignal::new(false);
    let needs_login = RwSignal::new(false);

    Effect::new(move || {
        if needs_login.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    {
        let api = api.clone();
        let id = id.clone();
        Effect::new(move || {
            let api = api.clone();
            let id = id.clone();
            spawn_browser(async move {
                match api.get_property(&id).await {
                    Ok(found) => property.set(Some(found)),
                    Err(e) => {
                        leptos::logging::error!("property {id} load failed: {e}");
                        load_error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    let is_buyer = {
        let session = session.clone();
        move || session.role() == Some(Role::Buyer)
    };

    let on_contact = {
        let api = api.clone();
        let session = session.clone();
        let id = id.clone();
        move |_| {
            let Some(token) = session.bearer_token() else {
                needs_login.set(true);
                return;
            };
            let api = api.clone();
            let id = id.clone();
            spawn_browser(async move {
                match api.contact_seller(&id, &token).await {
                    Ok(_) => notice.set(Some((NoticeKind::Success, "Request Sent Successfully!".to_owned()))),
                    Err(e) => {
                        leptos::logging::warn!("contact request for {id} failed: {e}");
                        notice.set(Some((NoticeKind::Error, "Failed to send request.".to_owned())));
                    }
                }
            });
        }
    };

    let on_pay = move |_| {
        let Some(token) = session.bearer_token() else {
            needs_login.set(true);
            return;
        };
        paying.set(true);
        let api = api.clone();
        let id = id.clone();
        spawn_browser(async move {
            match api.book_property(&id, &token).await {
                Ok(receipt) => {
                    paid.set(true);
                    show_payment.set(false);
                    notice.set(Some((
                        NoticeKind::Success,
                        format!("Payment Successful! Transaction ID: {}", receipt.transaction_id),
                    )));
                }
                Err(e) => {
                    leptos::logging::error!("booking {id} failed: {e}");
                    notice.set(Some((NoticeKind::Error, format!("Payment Failed. {e}"))));
                }
            }
            paying.set(false);
        });
    };

    let gallery = move |p: &Property| {
        let images = p.image_urls();
        let cover = images.first().cloned().unwrap_or_else(|| p.cover_image());
        let hero = {
            let images = images.clone();
            move || images.get(selected_image.get()).cloned().unwrap_or_else(|| cover.clone())
        };
        let thumbs = (images.len() > 1).then(|| {
            images
                .into_iter()
                .enumerate()
                .map(|(index, url)| {
                    view! {
                        <button
                            class="gallery__thumb"
                            class:gallery__thumb--active=move || selected_image.get() == index
                            on:click=move |_| selected_image.set(index)
                        >
                            <img src=url alt=""/>
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        });
        view! {
            <div class="gallery">
                <div class="gallery__hero">
                    <img src=hero alt=p.title.clone()/>
                    <span class=format!("gallery__status {}", p.status.badge_class())>{p.status.as_str()}</span>
                </div>
                {thumbs.map(|thumbs| view! { <div class="gallery__thumbs">{thumbs}</div> })}
            </div>
        }
    };

    let facts = |p: &Property| {
        let rooms = p.kind.has_rooms().then(|| {
            view! {
                <div class="fact">{format!("{} Beds", p.beds.unwrap_or_default())}</div>
                <div class="fact">{format!("{} Baths", p.baths.unwrap_or_default())}</div>
                {p.bhk.clone().map(|bhk| view! { <div class="fact">{bhk}</div> })}
            }
        });
        view! {
            <div class="facts">
                {rooms}
                <div class="fact">{p.area.clone()}</div>
                <div class="fact">{p.kind.label()}</div>
            </div>
        }
    };

    let seller_card = move |p: &Property| {
        let seller = p.seller.clone().unwrap_or_default();
        let phone = seller.phone.as_deref();
        let enquiry = format!("Hi, I'm interested in your property: {}", p.title);
        let whatsapp = whatsapp_link(phone, Some(&enquiry));
        let tel = tel_link(phone);
        let mail = mailto_link(&seller.email);
        let initial = seller.name.chars().next().map(String::from).unwrap_or_default();
        let token = format_price(p.token_amount());
        let on_contact = on_contact.clone();
        let is_buyer = is_buyer.clone();
        view! {
            <aside class="seller-card">
                <h3>"Contact Seller"</h3>
                <div class="seller-card__who">
                    <span class="avatar">{initial}</span>
                    <div>
                        <strong>{seller.name.clone()}</strong>
                        <small class="muted">{seller.email.clone()}</small>
                    </div>
                </div>
                <Show
                    when=is_buyer
                    fallback=move || view! { <p class="notice notice--info">"Login as Buyer to view contact details."</p> }
                >
                    <div class="seller-card__actions">
                        <button
                            class="btn btn--success btn--block"
                            disabled=move || paid.get()
                            on:click=move |_| show_payment.set(true)
                        >
                            {format!("Book Now (5% Token: {token})")}
                        </button>
                        <button class="btn btn--outline btn--block" on:click=on_contact.clone()>"Request Contact"</button>
                        {tel.clone().map(|href| view! { <a class="btn btn--outline btn--block" href=href>"Call Seller"</a> })}
                        <a class="btn btn--outline btn--block" href=mail.clone()>"Email Enquiry"</a>
                        {whatsapp.clone().map(|href| view! {
                            <a class="btn btn--success btn--block" href=href target="_blank" rel="noopener">"Chat on WhatsApp"</a>
                        })}
                    </div>
                </Show>
            </aside>
        }
    };

    let payment_dialog = move || {
        let amount = property.with(|p| p.as_ref().map(Property::token_amount)).unwrap_or_default();
        view! {
            <div class="dialog-backdrop" on:click=move |_| show_payment.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Secure Payment"</h2>
                    <p class="dialog__amount">{format!("Pay {}", format_price(amount))}</p>
                    <p class="muted">"Simulating payment gateway..."</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_payment.set(false)>"Cancel"</button>
                        <button class="btn btn--primary" disabled=move || paying.get() on:click=on_pay.clone()>
                            "Confirm Payment"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="property-details">
            <button class="btn btn--link" on:click=move |_| go_back()>"← Back to Listings"</button>
            <Notice state=notice/>
            {move || {
                if let Some(message) = load_error.get() {
                    return view! { <p class="notice notice--error">{message}</p> }.into_any();
                }
                let Some(p) = property.get() else {
                    return view! { <p class="muted">"Loading..."</p> }.into_any();
                };
                view! {
                    <div class="property-details__layout">
                        <section class="property-details__main">
                            {gallery(&p)}
                            <h1>{p.title.clone()}</h1>
                            <p class="muted">{p.full_address()}</p>
                            <MapPreview address=p.full_address()/>
                            <h2 class="price">{format_price(p.price)}</h2>
                            <h3>"Description"</h3>
                            <p>{p.description.clone().unwrap_or_default()}</p>
                            <h3>"Details & Amenities"</h3>
                            {facts(&p)}
                        </section>
                        {seller_card(&p)}
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || show_payment.get()>{payment_dialog.clone()}</Show>
        </div>
    }
}
