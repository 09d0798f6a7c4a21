//! Session store of record.
//!
//! Holds the last-committed credential and claims. The record changes only
//! through [`SessionState::commit`] and [`SessionState::clear`], both
//! invoked by the session bridge; the `ready` flag is private so it cannot
//! flip without the record moving with it in the same `&mut` critical
//! section.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Decoded identity attributes from the provider's access token.
///
/// All fields are optional: tokens carry whatever claims the realm is
/// configured to emit. `Claims::default()` doubles as the "empty claims"
/// used when a present credential arrives with an undecodable payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The committed session view: a credential and its decoded claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub credential: String,
    pub claims: Claims,
}

/// Process-wide session store, provided as `RwSignal<SessionState>`.
///
/// Invariant: `ready` is true only after a commit of a present credential,
/// so `ready` implies `record.is_some()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    record: Option<SessionRecord>,
    ready: bool,
}

impl SessionState {
    /// Replace the record wholesale, then flip the ready flag.
    ///
    /// Both writes happen under one `&mut self`, so no observer can see
    /// the flag without the record it refers to.
    pub fn commit(&mut self, credential: String, claims: Claims) {
        self.record = Some(SessionRecord { credential, claims });
        self.ready = true;
    }

    /// Empty the record and drop the ready flag. Used on logout and
    /// whenever the observed credential goes absent.
    pub fn clear(&mut self) {
        self.record = None;
        self.ready = false;
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        self.record.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.credential.as_str())
    }

    /// The `sub` claim of the committed session, used as the gateway's
    /// `X-User-ID` header.
    pub fn user_id(&self) -> Option<&str> {
        self.record
            .as_ref()
            .and_then(|r| r.claims.sub.as_deref())
    }

    /// True once the store reflects the latest known identity state.
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Render-gating state machine derived from (observed credential presence,
/// store readiness). Derived on every evaluation, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No credential observed; only the login affordance is reachable.
    Unauthenticated,
    /// A credential is observed but the store has not caught up; rendering
    /// authenticated screens now would read a stale record.
    Reconciling,
    /// Store committed and ready; authenticated routes are admissible.
    Authenticated,
}

impl SessionPhase {
    /// Keying on observed presence (not the committed record) means a
    /// logout demotes the phase before the bridge has even run, so no
    /// render decision can trail the cancelled session.
    pub fn derive(credential_observed: bool, session: &SessionState) -> Self {
        match (credential_observed, session.is_ready()) {
            (true, true) => Self::Authenticated,
            (true, false) => Self::Reconciling,
            (false, _) => Self::Unauthenticated,
        }
    }
}
