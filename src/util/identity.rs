//! Bridge to the identity provider's JS SDK.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns sessions, tokens, and the sign-in/sign-up widgets.
//! This module loads its SDK script from the publishable key, mirrors the
//! session into [`AuthState`] through a listener, mounts widgets into host
//! elements, and fetches one short-lived bearer token per outgoing request.
//! Everything browser-facing is gated behind `csr` with native stubs, the
//! same split the REST layer uses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::auth::SessionUser;

#[cfg(any(test, feature = "csr"))]
use base64::Engine as _;
#[cfg(feature = "csr")]
use js_sys::{Function, Object, Promise, Reflect};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "csr")]
use wasm_bindgen_futures::JsFuture;

/// How many 100ms polls a widget mount waits for the SDK before giving up.
#[cfg(feature = "csr")]
const READY_POLL_LIMIT: usize = 100;

/// Derive the provider's frontend API host from a publishable key.
///
/// Keys look like `pk_test_<base64>` / `pk_live_<base64>`, where the
/// payload decodes to the host followed by a trailing `$`.
#[cfg(any(test, feature = "csr"))]
fn frontend_api_from_key(key: &str) -> Option<String> {
    let payload = key
        .strip_prefix("pk_test_")
        .or_else(|| key.strip_prefix("pk_live_"))?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    let host = String::from_utf8(decoded).ok()?;
    let host = host.strip_suffix('$').unwrap_or(&host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_owned())
    }
}

#[cfg(any(test, feature = "csr"))]
fn sdk_script_url(frontend_api: &str) -> String {
    format!("https://{frontend_api}/npm/@clerk/clerk-js@5/dist/clerk.browser.js")
}

/// Pick a display name from the provider's user fields, preferring the
/// first name, then the username.
#[cfg(any(test, feature = "csr"))]
fn display_name(first_name: Option<String>, username: Option<String>) -> String {
    first_name
        .filter(|s| !s.trim().is_empty())
        .or_else(|| username.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| "Member".to_owned())
}

/// Load the provider SDK and start mirroring its session into `auth`.
///
/// Called once from the composition root. With a missing or malformed key
/// the app settles into the signed-out state instead of failing.
pub fn install(config: &AppConfig, auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    {
        let Some(frontend_api) = frontend_api_from_key(&config.publishable_key) else {
            log::warn!("identity publishable key missing or malformed; staying signed out");
            auth.update(|a| a.loading = false);
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(script) = document.create_element("script") else {
            return;
        };
        let Ok(script) = script.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let _ = script.set_attribute("src", &sdk_script_url(&frontend_api));
        let _ = script.set_attribute("async", "");
        let _ = script.set_attribute("crossorigin", "anonymous");
        let _ = script.set_attribute("data-clerk-publishable-key", &config.publishable_key);

        let key = config.publishable_key.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            let key = key.clone();
            leptos::task::spawn_local(async move {
                match initialize(&key).await {
                    Ok(()) => {
                        sync_session(auth);
                        watch_session(auth);
                    }
                    Err(err) => log::warn!("identity provider failed to initialize: {err}"),
                }
                auth.update(|a| a.loading = false);
            });
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::warn!("identity provider SDK failed to load");
            auth.update(|a| a.loading = false);
        });
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        if let Some(body) = document.body() {
            let _ = body.append_child(&script);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, auth);
    }
}

/// Fetch a fresh bearer token for the active session.
///
/// Tokens are short-lived and deliberately never cached; the REST layer
/// calls this once per outgoing request.
///
/// # Errors
///
/// Returns a message when the SDK is not loaded, no session is active, or
/// the provider refuses to issue a token.
pub async fn session_token() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let clerk = clerk_ready().ok_or_else(|| "identity provider not loaded".to_owned())?;
        let session = Reflect::get(&clerk, &JsValue::from_str("session")).map_err(js_error)?;
        if session.is_null() || session.is_undefined() {
            return Err("no active session".to_owned());
        }
        let get_token = Reflect::get(&session, &JsValue::from_str("getToken"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| "getToken is not callable".to_owned())?;
        let promise = get_token
            .call0(&session)
            .map_err(js_error)?
            .dyn_into::<Promise>()
            .map_err(|_| "getToken did not return a promise".to_owned())?;
        let token = JsFuture::from(promise).await.map_err(js_error)?;
        token
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| "provider returned an empty token".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Mount the provider's sign-in widget into `host`.
#[cfg(feature = "csr")]
pub fn mount_sign_in(host: &web_sys::HtmlDivElement) {
    mount_widget(host, "mountSignIn");
}

/// Mount the provider's sign-up widget into `host`.
#[cfg(feature = "csr")]
pub fn mount_sign_up(host: &web_sys::HtmlDivElement) {
    mount_widget(host, "mountSignUp");
}

/// End the current session. The session listener observes the change and
/// clears [`AuthState`]; nothing else needs to react directly.
pub fn sign_out() {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(clerk) = clerk_ready() else {
                return;
            };
            let Ok(sign_out) = Reflect::get(&clerk, &JsValue::from_str("signOut")) else {
                return;
            };
            let Ok(sign_out) = sign_out.dyn_into::<Function>() else {
                return;
            };
            match sign_out.call0(&clerk) {
                Ok(value) => {
                    if let Ok(promise) = value.dyn_into::<Promise>() {
                        let _ = JsFuture::from(promise).await;
                    }
                }
                Err(err) => log::warn!("sign out failed: {}", js_error(err)),
            }
        });
    }
}

#[cfg(feature = "csr")]
fn clerk_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let clerk = Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    if clerk.is_undefined() || clerk.is_null() {
        None
    } else {
        Some(clerk)
    }
}

#[cfg(feature = "csr")]
fn clerk_ready() -> Option<JsValue> {
    let clerk = clerk_global()?;
    let loaded = Reflect::get(&clerk, &JsValue::from_str("loaded")).ok()?;
    if loaded.as_bool() == Some(true) {
        Some(clerk)
    } else {
        None
    }
}

#[cfg(feature = "csr")]
async fn initialize(publishable_key: &str) -> Result<(), String> {
    let clerk = clerk_global().ok_or_else(|| "SDK global missing after script load".to_owned())?;
    let load = Reflect::get(&clerk, &JsValue::from_str("load"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| "load is not callable".to_owned())?;
    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("publishableKey"),
        &JsValue::from_str(publishable_key),
    )
    .map_err(js_error)?;
    let promise = load
        .call1(&clerk, &options)
        .map_err(js_error)?
        .dyn_into::<Promise>()
        .map_err(|_| "load did not return a promise".to_owned())?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

/// Copy the provider's current user into the auth signal.
#[cfg(feature = "csr")]
fn sync_session(auth: RwSignal<AuthState>) {
    let user = clerk_global().and_then(|clerk| read_user(&clerk));
    auth.update(|a| a.user = user);
}

/// Subscribe to provider session changes for the lifetime of the page.
#[cfg(feature = "csr")]
fn watch_session(auth: RwSignal<AuthState>) {
    let Some(clerk) = clerk_global() else {
        return;
    };
    let Ok(add_listener) = Reflect::get(&clerk, &JsValue::from_str("addListener")) else {
        return;
    };
    let Ok(add_listener) = add_listener.dyn_into::<Function>() else {
        return;
    };
    let listener = Closure::<dyn FnMut(JsValue)>::new(move |_resources: JsValue| {
        sync_session(auth);
    });
    if add_listener
        .call1(&clerk, listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("identity provider rejected the session listener");
    }
    listener.forget();
}

#[cfg(feature = "csr")]
fn read_user(clerk: &JsValue) -> Option<SessionUser> {
    let user = Reflect::get(clerk, &JsValue::from_str("user")).ok()?;
    if user.is_null() || user.is_undefined() {
        return None;
    }
    let id = Reflect::get(&user, &JsValue::from_str("id"))
        .ok()?
        .as_string()?;
    let first_name = Reflect::get(&user, &JsValue::from_str("firstName"))
        .ok()
        .and_then(|v| v.as_string());
    let username = Reflect::get(&user, &JsValue::from_str("username"))
        .ok()
        .and_then(|v| v.as_string());
    Some(SessionUser {
        id,
        name: display_name(first_name, username),
    })
}

#[cfg(feature = "csr")]
fn mount_widget(host: &web_sys::HtmlDivElement, method: &'static str) {
    let host = host.clone();
    leptos::task::spawn_local(async move {
        // The SDK script loads asynchronously; poll until it is ready.
        for _ in 0..READY_POLL_LIMIT {
            if let Some(clerk) = clerk_ready() {
                let Ok(mount) = Reflect::get(&clerk, &JsValue::from_str(method)) else {
                    return;
                };
                let Ok(mount) = mount.dyn_into::<Function>() else {
                    return;
                };
                if mount.call1(&clerk, &host).is_err() {
                    log::warn!("identity widget {method} failed to mount");
                }
                return;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
        }
        log::warn!("identity provider SDK never became ready; {method} skipped");
    });
}

#[cfg(feature = "csr")]
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
