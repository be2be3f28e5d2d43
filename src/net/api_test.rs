use super::*;

#[test]
fn sign_in_failed_message_names_bad_credentials() {
    assert_eq!(sign_in_failed_message(401), "invalid email or password");
}

#[test]
fn sign_in_failed_message_formats_other_statuses() {
    assert_eq!(sign_in_failed_message(503), "sign-in failed: 503");
}
