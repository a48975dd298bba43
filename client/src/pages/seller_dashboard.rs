//! Seller dashboard: own listings, interested buyers, and sales.
//!
//! Listings go through admin review, so every create or edit lands back in
//! `PENDING`. The page reloads all three panels after each change.

#[cfg(test)]
#[path = "seller_dashboard_test.rs"]
mod seller_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::{Notice, NoticeKind, NoticeState};
use crate::components::property_form_dialog::{PropertyForm, PropertyFormDialog};
use crate::net::api::ApiClient;
use crate::net::types::{Lead, Property, PropertyStatus, Transaction, format_date, format_price};
use crate::state::session::SessionStore;
use crate::util::browser::confirm;
use crate::util::contact::{mailto_link, whatsapp_link};
use crate::util::task::spawn_browser;

/// Listings still waiting for admin review.
pub fn pending_count(listings: &[Property]) -> usize {
    listings.iter().filter(|p| p.status == PropertyStatus::Pending).count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Listings,
    Leads,
    Sold,
}

#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();

    let tab = RwSignal::new(Tab::Listings);
    let listings = RwSignal::new(Vec::<Property>::new());
    let leads = RwSignal::new(Vec::<Lead>::new());
    let sales = RwSignal::new(Vec::<Transaction>::new());
    let reload = RwSignal::new(0_u32);
    let notice = RwSignal::<NoticeState>::new(None);

    let dialog_open = RwSignal::new(false);
    let form = RwSignal::new(PropertyForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            reload.track();
            let Some(token) = session.bearer_token() else {
                return;
            };
            let api = api.clone();
            spawn_browser(async move {
                match api.my_listings(&token).await {
                    Ok(list) => listings.set(list),
                    Err(e) => {
                        leptos::logging::error!("listings load failed: {e}");
                        notice.set(Some((NoticeKind::Error, e.to_string())));
                    }
                }
                match api.seller_leads(&token).await {
                    Ok(list) => leads.set(list),
                    Err(e) => leptos::logging::error!("leads load failed: {e}"),
                }
                match api.seller_transactions(&token).await {
                    Ok(list) => sales.set(list),
                    Err(e) => leptos::logging::error!("sales load failed: {e}"),
                }
            });
        });
    }

    let open_new = move |_| {
        form.set(PropertyForm::default());
        form_error.set(None);
        dialog_open.set(true);
    };
    let open_edit = move |property: &Property| {
        form.set(PropertyForm::from_property(property));
        form_error.set(None);
        dialog_open.set(true);
    };

    let on_cancel = Callback::new(move |()| dialog_open.set(false));
    let on_save = {
        let api = api.clone();
        let session = session.clone();
        Callback::new(move |()| {
            let draft = match form.with(PropertyForm::to_draft) {
                Ok(draft) => draft,
                Err(message) => {
                    form_error.set(Some(message.to_owned()));
                    return;
                }
            };
            let Some(token) = session.bearer_token() else {
                return;
            };
            saving.set(true);
            let api = api.clone();
            spawn_browser(async move {
                let result = match draft.id {
                    Some(id) => api.update_property(id, &draft, &token).await,
                    None => api.create_property(&draft, &token).await,
                };
                match result {
                    Ok(_) => {
                        let message = if draft.id.is_some() {
                            "Property updated successfully! It is pending re-approval."
                        } else {
                            "Property submitted for approval!"
                        };
                        notice.set(Some((NoticeKind::Success, message.to_owned())));
                        dialog_open.set(false);
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        leptos::logging::error!("saving property failed: {e}");
                        form_error.set(Some(format!("Error: {e}")));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = move |id: i64| {
        if !confirm("Are you sure?") {
            return;
        }
        let Some(token) = session.bearer_token() else {
            return;
        };
        let api = api.clone();
        spawn_browser(async move {
            match api.delete_property(id, &token).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => notice.set(Some((NoticeKind::Error, e.to_string()))),
            }
        });
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

    let listings_view = move || {
        let list = listings.get();
        if list.is_empty() {
            return view! { <p class="empty-state">"You have not listed any properties yet."</p> }.into_any();
        }
        let cards = list
            .into_iter()
            .map(|property| {
                let id = property.id;
                let on_delete = on_delete.clone();
                let rejection = (property.status == PropertyStatus::Rejected)
                    .then(|| property.rejection_reason.clone())
                    .flatten();
                let title = property.title.clone();
                let address = property.full_address();
                view! {
                    <article class="listing-card">
                        <img class="listing-card__image" src=property.cover_image() alt=title.clone()/>
                        <div class="listing-card__body">
                            <div class="listing-card__head">
                                <A href=format!("/property/{id}")>{title}</A>
                                <span class=property.status.badge_class()>{property.status.as_str()}</span>
                            </div>
                            <p class="muted">{address}</p>
                            <p class="listing-card__price">{format_price(property.price)}</p>
                            {rejection.map(|reason| view! {
                                <p class="notice notice--error"><strong>"Reason: "</strong>{reason}</p>
                            })}
                            <div class="listing-card__actions">
                                <button class="btn btn--outline" on:click={
                                    let property = property.clone();
                                    move |_| open_edit(&property)
                                }>"Edit"</button>
                                <button class="btn btn--danger" on:click=move |_| on_delete(id)>"Delete"</button>
                            </div>
                        </div>
                    </article>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="listing-grid">{cards}</div> }.into_any()
    };

    let leads_view = move || {
        let list = leads.get();
        if list.is_empty() {
            return view! { <p class="empty-state">"No interested buyers yet."</p> }.into_any();
        }
        let rows = list
            .into_iter()
            .map(|lead| {
                let chat = whatsapp_link(lead.user.phone.as_deref(), None);
                let mail = mailto_link(&lead.user.email);
                view! {
                    <tr>
                        <td>{lead.property.title.clone()}</td>
                        <td>{lead.user.name.clone()}</td>
                        <td>{lead.user.email.clone()}</td>
                        <td>{lead.user.phone.clone().unwrap_or_else(|| "N/A".to_owned())}</td>
                        <td class="actions">
                            <a class="btn btn--ghost" href=mail>"Email"</a>
                            {chat.map(|href| view! {
                                <a class="btn btn--success" href=href target="_blank" rel="noopener">"WhatsApp"</a>
                            })}
                        </td>
                        <td>{format_date(lead.created_at.as_deref())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Property"</th><th>"Buyer Name"</th><th>"Contact Email"</th>
                        <th>"Contact Phone"</th><th>"Message"</th><th>"Date"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
            .into_any()
    };

    let sales_view = move || {
        let list = sales.get();
        if list.is_empty() {
            return view! { <p class="empty-state">"No sold properties yet."</p> }.into_any();
        }
        let rows = list
            .into_iter()
            .map(|sale| {
                let title = sale.property.as_ref().map(|p| p.title.clone()).unwrap_or_default();
                let (buyer, phone) = sale
                    .buyer
                    .as_ref()
                    .map(|b| (b.name.clone(), b.phone.clone().unwrap_or_default()))
                    .unwrap_or_default();
                view! {
                    <tr>
                        <td class="mono">{sale.transaction_id.clone()}</td>
                        <td>{title}</td>
                        <td><div>{buyer}</div><small class="muted">{phone}</small></td>
                        <td class="amount">{format_price(sale.amount)}</td>
                        <td>{format_date(sale.payment_date.as_deref())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="data-table">
                <thead>
                    <tr><th>"Transaction ID"</th><th>"Property"</th><th>"Buyer"</th><th>"Amount (5%)"</th><th>"Date"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
            .into_any()
    };

    view! {
        <div class="dashboard seller-dashboard">
            <header class="dashboard__header">
                <div>
                    <h1>"Seller Dashboard"</h1>
                    <p class="muted">"Manage your listings and view potential leads"</p>
                </div>
                <button class="btn btn--primary" on:click=open_new>"+ Add New Property"</button>
            </header>
            <Notice state=notice/>
            <div class="stats">
                <div class="stat stat--primary">
                    <span class="stat__label">"Total Listings"</span>
                    <span class="stat__value">{move || listings.with(Vec::len)}</span>
                </div>
                <div class="stat stat--success">
                    <span class="stat__label">"Interested Buyers"</span>
                    <span class="stat__value">{move || leads.with(Vec::len)}</span>
                </div>
                <div class="stat stat--warning">
                    <span class="stat__label">"Pending Approval"</span>
                    <span class="stat__value">{move || listings.with(|l| pending_count(l))}</span>
                </div>
            </div>
            <div class="tabs">
                {tab_button(Tab::Listings, "My Listings")}
                {tab_button(Tab::Leads, "Interested Buyers")}
                {tab_button(Tab::Sold, "Sold Properties")}
            </div>
            {move || match tab.get() {
                Tab::Listings => listings_view().into_any(),
                Tab::Leads => leads_view().into_any(),
                Tab::Sold => sales_view().into_any(),
            }}
            <Show when=move || dialog_open.get()>
                <PropertyFormDialog form=form error=form_error busy=saving on_cancel=on_cancel on_save=on_save/>
            </Show>
        </div>
    }
}
