use super::*;

#[test]
fn user_decodes_session_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":"5e3c0d2a-8f74-4f2b-9f0e-0f6f4a4f9a11","name":"Alice","email":"alice@example.com"}"#,
    )
    .expect("valid session payload");
    assert_eq!(user.id, "5e3c0d2a-8f74-4f2b-9f0e-0f6f4a4f9a11");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn user_rejects_payload_missing_email() {
    let result: Result<User, _> = serde_json::from_str(r#"{"id":"u-1","name":"Alice"}"#);
    assert!(result.is_err());
}
