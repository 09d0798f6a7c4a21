use super::*;
use crate::state::session::Claims;

#[test]
fn auth_headers_carry_bearer_and_user_id() {
    let mut session = SessionState::default();
    session.commit(
        "tok1".to_owned(),
        Claims {
            sub: Some("user-1".to_owned()),
            ..Claims::default()
        },
    );

    let (bearer, user_id) = auth_headers(&session).expect("headers");
    assert_eq!(bearer, "Bearer tok1");
    assert_eq!(user_id, "user-1");
}

#[test]
fn auth_headers_tolerate_missing_sub() {
    let mut session = SessionState::default();
    session.commit("tok1".to_owned(), Claims::default());

    let (bearer, user_id) = auth_headers(&session).expect("headers");
    assert_eq!(bearer, "Bearer tok1");
    // The gateway resolves the user from the token when the header is empty.
    assert_eq!(user_id, "");
}

#[test]
fn no_headers_without_a_session() {
    let session = SessionState::default();
    assert!(auth_headers(&session).is_none());
}
