//! Google Identity Services button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The GSI script is loaded by the page shell when a client id is configured.
//! This component asks the script to render its button into a div and
//! forwards the returned credential. Exchanging that credential for a
//! session is the caller's job.
//!
//! ERROR HANDLING
//! ==============
//! A missing script or client id hides the button. Interop failures are
//! logged and leave the password form as the only way in.

use leptos::prelude::*;

use crate::net::api::ApiClient;

#[component]
pub fn GoogleSignIn(on_credential: Callback<String>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let client_id = api.config().google_client_id.clone();
    let enabled = client_id.is_some();
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    if let Some(client_id) = client_id {
        Effect::new(move || {
            let Some(target) = container.get() else {
                return;
            };
            if let Err(e) = render_button(&client_id, &target, on_credential) {
                leptos::logging::warn!("google sign-in unavailable: {e:?}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (client_id, on_credential);

    view! {
        <Show when=move || enabled>
            <div class="google-sign-in">
                <div class="google-sign-in__divider">"or"</div>
                <div class="google-sign-in__button" node_ref=container></div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn render_button(
    client_id: &str,
    target: &web_sys::HtmlDivElement,
    on_credential: Callback<String>,
) -> Result<(), wasm_bindgen::JsValue> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let id_api = ["google", "accounts", "id"]
        .into_iter()
        .try_fold(JsValue::from(window), |obj, key| Reflect::get(&obj, &JsValue::from_str(key)))?;

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string());
        match credential {
            Some(credential) => on_credential.run(credential),
            None => leptos::logging::warn!("google sign-in returned no credential"),
        }
    });

    let config = Object::new();
    Reflect::set(&config, &"client_id".into(), &client_id.into())?;
    Reflect::set(&config, &"callback".into(), callback.as_ref())?;
    let initialize: Function = Reflect::get(&id_api, &"initialize".into())?.dyn_into()?;
    initialize.call1(&id_api, &config)?;
    // GSI keeps the callback for the page's lifetime.
    callback.forget();

    let options = Object::new();
    Reflect::set(&options, &"theme".into(), &"outline".into())?;
    Reflect::set(&options, &"size".into(), &"large".into())?;
    Reflect::set(&options, &"text".into(), &"continue_with".into())?;
    let render: Function = Reflect::get(&id_api, &"renderButton".into())?.dyn_into()?;
    render.call2(&id_api, target, &options)?;
    Ok(())
}
