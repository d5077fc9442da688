use super::*;

#[test]
fn from_code_maps_known_provider_codes() {
    assert_eq!(AuthError::from_code("auth/popup-closed-by-user", "closed"), AuthError::PopupClosedByUser);
    assert_eq!(AuthError::from_code("auth/popup-blocked", "blocked"), AuthError::PopupBlocked);
    assert_eq!(AuthError::from_code("auth/network-request-failed", "offline"), AuthError::NetworkError);
}

#[test]
fn from_code_keeps_message_for_unknown_codes() {
    assert_eq!(
        AuthError::from_code("auth/internal-error", "Firebase: internal error."),
        AuthError::Other("Firebase: internal error.".to_owned())
    );
}

#[test]
fn from_code_falls_back_to_code_when_message_missing() {
    assert_eq!(
        AuthError::from_code("auth/operation-not-allowed", ""),
        AuthError::Other("auth/operation-not-allowed".to_owned())
    );
}

#[test]
fn only_popup_closed_is_benign() {
    assert!(AuthError::PopupClosedByUser.is_benign());
    assert!(!AuthError::PopupBlocked.is_benign());
    assert!(!AuthError::NetworkError.is_benign());
    assert!(!AuthError::Other("x".to_owned()).is_benign());
}

#[test]
fn other_displays_provider_message_verbatim() {
    assert_eq!(AuthError::Other("quota exceeded".to_owned()).to_string(), "quota exceeded");
}

#[test]
fn profile_write_error_display_includes_cause() {
    let err = ProfileWriteError("status 401".to_owned());
    assert_eq!(err.to_string(), "profile write failed: status 401");
}
