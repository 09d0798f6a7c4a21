//! External identity capability.
//!
//! The OAuth provider owns the credential lifecycle: its redirect flow and
//! token exchange are opaque to this crate. What the rest of the app sees
//! is a pair of reactive signals that change on events outside its control
//! (redirect completion, expiry, logout) plus the begin-login and
//! end-session actions. The session bridge is the only consumer that turns
//! those changes into store writes.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use base64::Engine as _;
use leptos::prelude::*;

use crate::state::session::Claims;

/// Gateway endpoint that hands the browser to the provider's hosted login.
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/auth/login";

/// Where the provider's redirect handler leaves the access token for the
/// current tab. Session-scoped on purpose: no persistence beyond the
/// current session.
#[cfg(feature = "hydrate")]
const TOKEN_STORAGE_KEY: &str = "fittrack_access_token";

/// Reactive view of the provider-owned identity.
#[derive(Clone, Copy, Debug)]
pub struct IdentityState {
    pub credential: RwSignal<Option<String>>,
    pub claims: RwSignal<Option<Claims>>,
}

impl IdentityState {
    pub fn new() -> Self {
        Self {
            credential: RwSignal::new(None),
            claims: RwSignal::new(None),
        }
    }
}

impl Default for IdentityState {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the claims segment of a JWT access token.
///
/// No signature or expiry validation happens here; that trust decision
/// belongs to the provider and the gateway. Returns `None` for anything
/// that does not carry a parseable payload segment.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Restore the token the redirect handler left in session storage and
/// populate the identity signals. Runs once on hydrate.
pub fn bootstrap(identity: IdentityState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = read_stored_token() {
            // Claims first, so the credential change is observed with its
            // claims already in place.
            identity.claims.set(decode_claims(&token));
            identity.credential.set(Some(token));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identity;
    }
}

/// Hand the browser to the identity provider's login flow.
pub fn begin_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(LOGIN_ENDPOINT).is_err() {
                leptos::logging::warn!("login redirect failed");
            }
        }
    }
}

/// End the session: drop the stored token and both identity signals.
///
/// The bridge observes the change and clears the store; route decisions
/// key on credential presence, so nothing authenticated renders after
/// this returns.
pub fn end_session(identity: IdentityState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
    identity.claims.set(None);
    identity.credential.set(None);
}

#[cfg(feature = "hydrate")]
fn read_stored_token() -> Option<String> {
    session_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}
