//! Session bridge: reconciles provider-owned identity state into the
//! session store.
//!
//! The provider's credential can change at any time (redirect completion,
//! expiry, logout). Each change is folded into the store exactly once via
//! [`SessionBridge::reconcile`]; the reactive wiring in
//! [`mount_session_bridge`] applies one store update per distinct change,
//! so observers see commit-then-ready as a single atomic step.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use leptos::prelude::*;

use crate::identity::IdentityState;
use crate::state::session::{Claims, SessionState};

/// The externally-observed identity value at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub credential: Option<String>,
    pub claims: Option<Claims>,
}

/// Outcome of a single reconciliation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// A present credential was committed and the store marked ready.
    Committed,
    /// The credential went absent; the store was emptied.
    Cleared,
    /// Same credential as last seen; the store was not touched.
    Unchanged,
}

/// Sole writer of the session store.
///
/// `last_seen` is the idempotence guard: re-observing an unchanged
/// credential must not re-dispatch a commit.
#[derive(Clone, Debug, Default)]
pub struct SessionBridge {
    last_seen: Option<String>,
}

impl SessionBridge {
    /// Whether a snapshot differs from the last reconciled credential.
    pub fn sees_change(&self, snapshot: &IdentitySnapshot) -> bool {
        snapshot.credential != self.last_seen
    }

    /// Fold one observed identity value into the store.
    ///
    /// Ordering: the record is written before the ready flag flips (inside
    /// `commit`), and a logout clears both before returning, so any render
    /// decision made after this call sees a consistent store. Last writer
    /// wins by change order.
    pub fn reconcile(
        &mut self,
        snapshot: IdentitySnapshot,
        session: &mut SessionState,
    ) -> Reconciliation {
        if snapshot.credential == self.last_seen {
            return Reconciliation::Unchanged;
        }
        match snapshot.credential {
            Some(credential) => {
                self.last_seen = Some(credential.clone());
                // A present credential with undecodable claims still opens
                // the session; the trust decision belongs to the provider.
                session.commit(credential, snapshot.claims.unwrap_or_default());
                Reconciliation::Committed
            }
            None => {
                self.last_seen = None;
                session.clear();
                Reconciliation::Cleared
            }
        }
    }
}

/// Subscribe the bridge to the identity signals.
///
/// Runs once per identity change on the single-threaded reactive scheduler;
/// reconciliations for successive changes never interleave.
pub fn mount_session_bridge(identity: IdentityState, session: RwSignal<SessionState>) {
    let mut bridge = SessionBridge::default();
    Effect::new(move || {
        let snapshot = IdentitySnapshot {
            credential: identity.credential.get(),
            claims: identity.claims.get(),
        };
        // Unchanged identities never touch the store, so observers are not
        // re-notified for a no-op.
        if bridge.sees_change(&snapshot) {
            session.update(|s| {
                bridge.reconcile(snapshot, s);
            });
        }
    });
}
