use super::*;

#[test]
fn paths_match_router_segments() {
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::SignIn.path(), "/signin");
    assert_eq!(Route::SignUp.path(), "/signup");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
}

#[test]
fn only_dashboard_is_gated() {
    assert!(Route::Dashboard.is_gated());
    assert!(!Route::Home.is_gated());
    assert!(!Route::SignIn.is_gated());
    assert!(!Route::SignUp.is_gated());
}

#[test]
fn sign_in_and_sign_up_are_auth_entries() {
    assert!(Route::SignIn.is_auth_entry());
    assert!(Route::SignUp.is_auth_entry());
    assert!(!Route::Home.is_auth_entry());
    assert!(!Route::Dashboard.is_auth_entry());
}
