use super::*;
use crate::net::types::User;

#[test]
fn identity_label_uses_user_name() {
    let state = AuthSession {
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(identity_label(&state), "Alice");
}

#[test]
fn identity_label_falls_back_to_guest() {
    let state = AuthSession {
        user: None,
        loading: false,
    };
    assert_eq!(identity_label(&state), "guest");
}
