use super::*;

fn alice() -> Claims {
    Claims {
        sub: Some("user-1".to_owned()),
        name: Some("Alice".to_owned()),
        ..Claims::default()
    }
}

// =============================================================
// SessionState defaults and invariants
// =============================================================

#[test]
fn session_default_is_empty_and_not_ready() {
    let s = SessionState::default();
    assert!(s.record().is_none());
    assert!(!s.is_ready());
}

#[test]
fn commit_sets_record_then_ready() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());

    let record = s.record().expect("committed record");
    assert_eq!(record.credential, "tok1");
    assert_eq!(record.claims.name.as_deref(), Some("Alice"));
    assert!(s.is_ready());
}

#[test]
fn ready_implies_record_present() {
    let mut s = SessionState::default();
    assert!(!s.is_ready());

    s.commit("tok1".to_owned(), alice());
    assert!(s.is_ready() && s.record().is_some());

    s.clear();
    assert!(!s.is_ready() && s.record().is_none());
}

#[test]
fn commit_replaces_the_whole_record() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());
    s.commit("tok2".to_owned(), Claims::default());

    let record = s.record().expect("record");
    assert_eq!(record.credential, "tok2");
    // No merge semantics: the prior claims are gone.
    assert_eq!(record.claims, Claims::default());
}

#[test]
fn clear_empties_record_and_drops_ready() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());
    s.clear();

    assert!(s.record().is_none());
    assert!(!s.is_ready());
    assert!(s.credential().is_none());
    assert!(s.user_id().is_none());
}

#[test]
fn user_id_reads_the_sub_claim() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());
    assert_eq!(s.user_id(), Some("user-1"));

    s.commit("tok2".to_owned(), Claims::default());
    assert_eq!(s.user_id(), None);
}

// =============================================================
// SessionPhase derivation
// =============================================================

#[test]
fn phase_unauthenticated_without_observed_credential() {
    let s = SessionState::default();
    assert_eq!(
        SessionPhase::derive(false, &s),
        SessionPhase::Unauthenticated
    );
}

#[test]
fn phase_reconciling_while_store_lags() {
    let s = SessionState::default();
    assert_eq!(SessionPhase::derive(true, &s), SessionPhase::Reconciling);
}

#[test]
fn phase_authenticated_once_ready() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());
    assert_eq!(SessionPhase::derive(true, &s), SessionPhase::Authenticated);
}

#[test]
fn phase_demotes_immediately_when_credential_disappears() {
    let mut s = SessionState::default();
    s.commit("tok1".to_owned(), alice());
    // Logout observed but the bridge has not cleared the store yet.
    assert_eq!(
        SessionPhase::derive(false, &s),
        SessionPhase::Unauthenticated
    );
}
