use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::test_helpers::{FakeIdentityProvider, credential_for};

fn context() -> (Rc<FakeIdentityProvider>, SessionContext) {
    let provider = FakeIdentityProvider::new();
    let session = SessionContext::new(provider.clone());
    (provider, session)
}

fn alice() -> Identity {
    Identity::with_email("u1", "a@b.com")
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_context_is_loading_without_user() {
    let (_, session) = context();
    assert_eq!(session.state(), SessionState { user: None, loading: true });
    assert!(!session.is_active());
}

#[test]
fn init_opens_exactly_one_subscription() {
    let (provider, session) = context();
    session.init();
    session.init();
    assert_eq!(provider.active_subscriptions(), 1);
    assert!(session.is_active());
}

#[test]
fn dispose_releases_subscription() {
    let (provider, session) = context();
    session.init();
    session.dispose();
    assert_eq!(provider.active_subscriptions(), 0);
    assert!(!session.is_active());
}

#[test]
fn dispose_is_idempotent() {
    let (provider, session) = context();
    session.init();
    session.dispose();
    session.dispose();
    assert_eq!(provider.active_subscriptions(), 0);
}

#[test]
fn dropping_last_handle_releases_subscription() {
    let (provider, session) = context();
    let clone = session.clone();
    session.init();
    drop(session);
    assert_eq!(provider.active_subscriptions(), 1);
    drop(clone);
    assert_eq!(provider.active_subscriptions(), 0);
}

#[test]
fn reinit_after_dispose_resubscribes_once() {
    let (provider, session) = context();
    session.init();
    session.dispose();
    session.init();
    assert_eq!(provider.active_subscriptions(), 1);
}

// =============================================================
// Auth-state reports
// =============================================================

#[test]
fn report_sets_user_and_clears_loading() {
    let (provider, session) = context();
    session.init();
    provider.emit(Some(alice()));
    assert_eq!(session.state(), SessionState { user: Some(alice()), loading: false });
}

#[test]
fn loading_flips_exactly_once_across_reports() {
    let (provider, session) = context();
    let transitions = Rc::new(Cell::new(0));
    let last_loading = Rc::new(Cell::new(true));
    {
        let transitions = transitions.clone();
        let last_loading = last_loading.clone();
        session.watch(move |state| {
            if last_loading.get() && !state.loading {
                transitions.set(transitions.get() + 1);
            }
            assert!(!state.loading, "loading must never revert to true");
            last_loading.set(state.loading);
        });
    }
    session.init();
    for report in [None, Some(alice()), None, Some(alice()), None] {
        provider.emit(report);
    }
    assert_eq!(transitions.get(), 1);
    assert!(!session.state().loading);
}

#[test]
fn reports_before_init_are_not_observed() {
    let (provider, session) = context();
    provider.emit(Some(alice()));
    assert!(session.state().loading);
}

#[test]
fn reports_after_dispose_are_ignored() {
    let (provider, session) = context();
    session.init();
    provider.emit(None);
    session.dispose();
    provider.emit(Some(alice()));
    assert!(session.state().user.is_none());
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn listeners_receive_every_change_in_order() {
    let (provider, session) = context();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    session.watch(move |state| sink.borrow_mut().push(state.user.as_ref().map(|u| u.uid.clone())));
    session.init();
    provider.emit(None);
    provider.emit(Some(alice()));
    provider.emit(None);
    assert_eq!(*seen.borrow(), vec![None, Some("u1".to_owned()), None]);
}

#[test]
fn unchanged_report_does_not_notify() {
    let (provider, session) = context();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    session.watch(move |_| counter.set(counter.get() + 1));
    session.init();
    provider.emit(Some(alice()));
    provider.emit(Some(alice()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn unwatch_stops_notifications() {
    let (provider, session) = context();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let id = session.watch(move |_| counter.set(counter.get() + 1));
    session.init();
    provider.emit(None);
    session.unwatch(id);
    provider.emit(Some(alice()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn listener_may_read_session_while_notified() {
    let (provider, session) = context();
    let observed = Rc::new(RefCell::new(None));
    let sink = observed.clone();
    let reader = session.clone();
    session.watch(move |_| *sink.borrow_mut() = Some(reader.state()));
    session.init();
    provider.emit(Some(alice()));
    assert_eq!(observed.borrow().as_ref().and_then(|s| s.user.clone()), Some(alice()));
}

// =============================================================
// Sign-in / sign-out
// =============================================================

#[test]
fn sign_in_returns_credential_without_touching_state() {
    let (provider, session) = context();
    session.init();
    provider.queue_sign_in(Ok(credential_for("u1", "a@b.com")));
    let credential = block_on(session.sign_in()).unwrap();
    assert_eq!(credential.user.uid, "u1");
    assert!(session.state().loading);
    assert!(session.state().user.is_none());
    provider.emit(Some(credential.user));
    assert_eq!(session.state().user.map(|u| u.uid), Some("u1".to_owned()));
}

#[test]
fn sign_in_propagates_errors_without_retry() {
    let (provider, session) = context();
    provider.queue_sign_in(Err(AuthError::NetworkError));
    assert_eq!(block_on(session.sign_in()), Err(AuthError::NetworkError));
    assert_eq!(provider.sign_in_calls.get(), 1);
}

#[test]
fn sign_out_calls_provider_and_leaves_state_to_report() {
    let (provider, session) = context();
    session.init();
    provider.emit(Some(alice()));
    session.sign_out();
    assert_eq!(provider.sign_out_calls.get(), 1);
    assert!(session.state().is_signed_in());
    provider.emit(None);
    assert!(!session.state().is_signed_in());
}

#[test]
fn sign_out_swallows_provider_errors() {
    let (provider, session) = context();
    provider.fail_sign_out(AuthError::NetworkError);
    session.sign_out();
    assert_eq!(provider.sign_out_calls.get(), 1);
}
