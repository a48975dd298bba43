//! Modal dialog for creating or editing a seller's listing.

#[cfg(test)]
#[path = "property_form_dialog_test.rs"]
mod property_form_dialog_test;

use leptos::prelude::*;

use crate::net::types::{Property, PropertyDraft, PropertyType};
use crate::util::forms::parse_optional;

/// Listing form fields as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyForm {
    pub id: Option<i64>,
    pub title: String,
    pub kind: PropertyType,
    pub price: String,
    pub area: String,
    pub beds: String,
    pub baths: String,
    pub bhk: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub images: String,
}

impl PropertyForm {
    pub fn from_property(property: &Property) -> Self {
        let draft = PropertyDraft::from_property(property);
        let number = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_default();
        Self {
            id: draft.id,
            title: draft.title,
            kind: draft.kind,
            price: draft.price.to_string(),
            area: draft.area,
            beds: number(draft.beds),
            baths: number(draft.baths),
            bhk: draft.bhk.unwrap_or_default(),
            description: draft.description,
            address: draft.address,
            city: draft.city,
            images: draft.images,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Convert to a request payload. Room counts are dropped for types
    /// without rooms.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a user-facing message.
    pub fn to_draft(&self) -> Result<PropertyDraft, &'static str> {
        let price = self.price.trim().parse::<f64>().map_err(|_| "Enter a valid price")?;
        let rooms = self.kind.has_rooms();
        let bhk = self.bhk.trim();
        let draft = PropertyDraft {
            id: self.id,
            title: self.title.trim().to_owned(),
            kind: self.kind,
            price,
            area: self.area.trim().to_owned(),
            beds: if rooms { parse_optional(&self.beds) } else { None },
            baths: if rooms { parse_optional(&self.baths) } else { None },
            bhk: (rooms && !bhk.is_empty()).then(|| bhk.to_owned()),
            description: self.description.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            images: self
                .images
                .split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        };
        draft.validate()?;
        Ok(draft)
    }
}

#[component]
pub fn PropertyFormDialog(
    form: RwSignal<PropertyForm>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let text = move |label: &'static str, get: fn(&PropertyForm) -> String, set: fn(&mut PropertyForm, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };
    let type_options = PropertyType::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <option value=kind.as_str() selected=move || form.with(|f| f.kind == kind)>
                    {kind.label()}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--property" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if form.with(PropertyForm::is_edit) { "Edit Property" } else { "Add New Property" }}</h2>
                {move || error.get().map(|message| view! { <div class="notice notice--error">{message}</div> })}
                {text("Title", |f| f.title.clone(), |f, v| f.title = v)}
                <div class="field__row">
                    <label class="field">
                        <span>"Type"</span>
                        <select on:change=move |ev| {
                            if let Some(kind) = PropertyType::parse(&event_target_value(&ev)) {
                                form.update(|f| f.kind = kind);
                            }
                        }>{type_options}</select>
                    </label>
                    {text("Price (₹)", |f| f.price.clone(), |f, v| f.price = v)}
                    {text("Area", |f| f.area.clone(), |f, v| f.area = v)}
                </div>
                <Show when=move || form.with(|f| f.kind.has_rooms())>
                    <div class="field__row">
                        {text("Beds", |f| f.beds.clone(), |f, v| f.beds = v)}
                        {text("Baths", |f| f.baths.clone(), |f, v| f.baths = v)}
                        {text("BHK", |f| f.bhk.clone(), |f, v| f.bhk = v)}
                    </div>
                </Show>
                <div class="field__row">
                    {text("Address", |f| f.address.clone(), |f, v| f.address = v)}
                    {text("City", |f| f.city.clone(), |f, v| f.city = v)}
                </div>
                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                {text("Image URLs (comma separated)", |f| f.images.clone(), |f, v| f.images = v)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| on_save.run(())>
                        "Save Property"
                    </button>
                </div>
            </div>
        </div>
    }
}
