use super::*;

fn settled_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

#[test]
fn default_session_starts_loading_without_user() {
    let session = AuthSession::default();
    assert!(session.loading);
    assert!(session.user.is_none());
}

#[test]
fn session_status_is_unsettled_while_loading() {
    assert_eq!(session_status(&AuthSession::default()), None);
}

#[test]
fn session_status_reports_authenticated_user() {
    let session = AuthSession {
        user: Some(settled_user()),
        loading: false,
    };
    assert_eq!(session_status(&session), Some(true));
}

#[test]
fn session_status_reports_guest_after_settle() {
    let session = AuthSession {
        user: None,
        loading: false,
    };
    assert_eq!(session_status(&session), Some(false));
}
