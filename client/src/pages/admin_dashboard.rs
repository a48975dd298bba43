//! Admin dashboard: listing moderation, user management, and the full
//! transaction ledger.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeKind, NoticeState};
use crate::net::api::ApiClient;
use crate::net::types::{Property, PropertyStatus, Transaction, UserAccount, format_date, format_price};
use crate::state::session::SessionStore;
use crate::util::browser::confirm;
use crate::util::task::spawn_browser;

/// A blank rejection reason is sent as no reason at all.
pub fn normalize_reason(raw: &str) -> Option<String> {
    let reason = raw.trim();
    (!reason.is_empty()).then(|| reason.to_owned())
}

/// Look a user up in the already-loaded list.
pub fn find_user(users: &[UserAccount], id: i64) -> Option<UserAccount> {
    users.iter().find(|u| u.id == id).cloned()
}

/// Total token payments collected across `transactions`.
pub fn total_collected(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Moderation,
    Users,
    Transactions,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();

    let tab = RwSignal::new(Tab::Moderation);
    let users = RwSignal::new(Vec::<UserAccount>::new());
    let pending = RwSignal::new(Vec::<Property>::new());
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let reload = RwSignal::new(0_u32);
    let notice = RwSignal::<NoticeState>::new(None);

    let rejecting = RwSignal::new(None::<i64>);
    let reason = RwSignal::new(String::new());
    let viewing_user = RwSignal::new(None::<UserAccount>);
    let viewing_property = RwSignal::new(None::<Property>);

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
                match api.admin_users(&token).await {
                    Ok(list) => users.set(list),
                    Err(e) => {
                        leptos::logging::error!("user list load failed: {e}");
                        notice.set(Some((NoticeKind::Error, e.to_string())));
                    }
                }
                match api.pending_properties(&token).await {
                    Ok(list) => pending.set(list),
                    Err(e) => leptos::logging::error!("pending listings load failed: {e}"),
                }
                match api.all_transactions(&token).await {
                    Ok(list) => transactions.set(list),
                    Err(e) => leptos::logging::error!("transactions load failed: {e}"),
                }
            });
        });
    }

    let set_status = {
        let api = api.clone();
        let session = session.clone();
        move |id: i64, status: PropertyStatus, note: Option<String>| {
            let Some(token) = session.bearer_token() else {
                return;
            };
            let api = api.clone();
            spawn_browser(async move {
                match api.set_property_status(id, status, note.as_deref(), &token).await {
                    Ok(_) => {
                        let verb = if status == PropertyStatus::Approved { "approved" } else { "rejected" };
                        notice.set(Some((NoticeKind::Success, format!("Property {verb}."))));
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => notice.set(Some((NoticeKind::Error, e.to_string()))),
                }
            });
        }
    };

    let submit_rejection = {
        let set_status = set_status.clone();
        move |_| {
            if let Some(id) = rejecting.get() {
                set_status(id, PropertyStatus::Rejected, normalize_reason(&reason.get()));
                rejecting.set(None);
            }
        }
    };

    let view_user = {
        let api = api.clone();
        let session = session.clone();
        move |id: i64| {
            if let Some(user) = users.with(|list| find_user(list, id)) {
                viewing_user.set(Some(user));
                return;
            }
            let Some(token) = session.bearer_token() else {
                return;
            };
            let api = api.clone();
            spawn_browser(async move {
                match api.user(id, &token).await {
                    Ok(user) => viewing_user.set(Some(user)),
                    Err(e) => leptos::logging::error!("user {id} lookup failed: {e}"),
                }
            });
        }
    };

    let delete_user = move |id: i64| {
        if !confirm("Is it okay to delete this user?") {
            return;
        }
        let Some(token) = session.bearer_token() else {
            return;
        };
        let api = api.clone();
        spawn_browser(async move {
            match api.delete_user(id, &token).await {
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

    let moderation_view = {
        let set_status = set_status.clone();
        let view_user = view_user.clone();
        move || {
            let list = pending.get();
            if list.is_empty() {
                return view! { <p class="empty-state">"No properties waiting for review."</p> }.into_any();
            }
            let rows = list
                .into_iter()
                .map(|property| {
                    let id = property.id;
                    let seller = property.seller.clone();
                    let approve = set_status.clone();
                    let view_user = view_user.clone();
                    view! {
                        <tr>
                            <td>
                                <button class="link" on:click={
                                    let property = property.clone();
                                    move |_| viewing_property.set(Some(property.clone()))
                                }>{property.title.clone()}</button>
                            </td>
                            <td>{property.kind.label()}</td>
                            <td>{format_price(property.price)}</td>
                            <td>{property.full_address()}</td>
                            <td>
                                {seller.map(|seller| {
                                    let seller_id = seller.id;
                                    view! {
                                        <button class="link" on:click=move |_| view_user(seller_id)>{seller.name}</button>
                                    }
                                })}
                            </td>
                            <td class="actions">
                                <button class="btn btn--success" on:click=move |_| approve(id, PropertyStatus::Approved, None)>
                                    "Approve"
                                </button>
                                <button class="btn btn--danger" on:click=move |_| {
                                    reason.set(String::new());
                                    rejecting.set(Some(id));
                                }>"Reject"</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="data-table">
                    <thead>
                        <tr><th>"Property"</th><th>"Type"</th><th>"Price"</th><th>"Location"</th><th>"Seller"</th><th>"Actions"</th></tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
                .into_any()
        }
    };

    let users_view = move || {
        let rows = users
            .get()
            .into_iter()
            .map(|user| {
                let id = user.id;
                let view_user = view_user.clone();
                let delete_user = delete_user.clone();
                view! {
                    <tr>
                        <td>{user.id}</td>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td><span class="badge">{user.role.label()}</span></td>
                        <td class="actions">
                            <button class="btn btn--ghost" on:click=move |_| view_user(id)>"View"</button>
                            <button class="btn btn--danger" on:click=move |_| delete_user(id)>"Delete"</button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="data-table">
                <thead>
                    <tr><th>"ID"</th><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Actions"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    let transactions_view = move || {
        let rows = transactions
            .get()
            .into_iter()
            .map(|t| {
                let name = |u: Option<&UserAccount>| u.map(|u| u.name.clone()).unwrap_or_else(|| "-".to_owned());
                view! {
                    <tr>
                        <td class="mono">{t.transaction_id.clone()}</td>
                        <td>{t.property.as_ref().map(|p| p.title.clone()).unwrap_or_default()}</td>
                        <td>{name(t.buyer.as_ref())}</td>
                        <td>{name(t.seller.as_ref())}</td>
                        <td class="amount">{format_price(t.amount)}</td>
                        <td>{format_date(t.payment_date.as_deref())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="data-table">
                <thead>
                    <tr><th>"Transaction ID"</th><th>"Property"</th><th>"Buyer"</th><th>"Seller"</th><th>"Amount"</th><th>"Date"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    let user_dialog = move || {
        viewing_user.get().map(|user| {
            view! {
                <div class="dialog-backdrop" on:click=move |_| viewing_user.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"User Details"</h2>
                        <dl class="details">
                            <dt>"Name"</dt><dd>{user.name.clone()}</dd>
                            <dt>"Email"</dt><dd>{user.email.clone()}</dd>
                            <dt>"Role"</dt><dd>{user.role.label()}</dd>
                            <dt>"Phone"</dt><dd>{user.phone.clone().unwrap_or_else(|| "N/A".to_owned())}</dd>
                            <dt>"Company"</dt><dd>{user.company_name.clone().unwrap_or_else(|| "N/A".to_owned())}</dd>
                            <dt>"Address"</dt><dd>{user.address.clone().unwrap_or_else(|| "N/A".to_owned())}</dd>
                        </dl>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| viewing_user.set(None)>"Close"</button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    let property_dialog = move || {
        viewing_property.get().map(|property| {
            view! {
                <div class="dialog-backdrop" on:click=move |_| viewing_property.set(None)>
                    <div class="dialog dialog--property" on:click=move |ev| ev.stop_propagation()>
                        <h2>{property.title.clone()}</h2>
                        <img class="dialog__hero" src=property.cover_image() alt=property.title.clone()/>
                        <dl class="details">
                            <dt>"Type"</dt><dd>{property.kind.label()}</dd>
                            <dt>"Price"</dt><dd>{format_price(property.price)}</dd>
                            <dt>"Area"</dt><dd>{property.area.clone()}</dd>
                            <dt>"Location"</dt><dd>{property.full_address()}</dd>
                        </dl>
                        <p>{property.description.clone().unwrap_or_default()}</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| viewing_property.set(None)>"Close"</button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    let reject_dialog = move || {
        rejecting.get().map(|_| {
            view! {
                <div class="dialog-backdrop" on:click=move |_| rejecting.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Reject Property"</h2>
                        <label class="field">
                            <span>"Reason for rejection"</span>
                            <textarea
                                rows="3"
                                prop:value=move || reason.get()
                                on:input=move |ev| reason.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| rejecting.set(None)>"Cancel"</button>
                            <button class="btn btn--danger" on:click=submit_rejection.clone()>"Reject Property"</button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="dashboard admin-dashboard">
            <header class="dashboard__header">
                <h1>"Admin Dashboard"</h1>
            </header>
            <Notice state=notice/>
            <div class="stats">
                <div class="stat stat--primary">
                    <span class="stat__label">"Total Users"</span>
                    <span class="stat__value">{move || users.with(Vec::len)}</span>
                </div>
                <div class="stat stat--warning">
                    <span class="stat__label">"Pending Approvals"</span>
                    <span class="stat__value">{move || pending.with(Vec::len)}</span>
                </div>
                <div class="stat stat--success">
                    <span class="stat__label">"Token Payments"</span>
                    <span class="stat__value">{move || transactions.with(|t| format_price(total_collected(t)))}</span>
                </div>
            </div>
            <div class="tabs">
                {tab_button(Tab::Moderation, "Property Moderation")}
                {tab_button(Tab::Users, "User Management")}
                {tab_button(Tab::Transactions, "Transactions")}
            </div>
            {move || match tab.get() {
                Tab::Moderation => moderation_view().into_any(),
                Tab::Users => users_view().into_any(),
                Tab::Transactions => transactions_view().into_any(),
            }}
            {user_dialog}
            {property_dialog}
            {reject_dialog}
        </div>
    }
}
