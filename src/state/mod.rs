//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store ([`session`]) is owned process-wide and mutated only
//! by the bridge ([`bridge`]); every other component is a read-only
//! observer. Keeping the writer singular is what makes the ready-flag
//! invariant checkable.

pub mod bridge;
pub mod session;
