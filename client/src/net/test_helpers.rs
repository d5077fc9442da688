//! In-memory provider and store used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::{AuthError, ProfileWriteError};
use super::identity::{AuthStateCallback, IdentityProvider, Subscription};
use super::profile::ProfileStore;
use super::types::{Credential, Identity, ProfileRecord, profile_path};

type Observers = Rc<RefCell<Vec<(u64, Rc<dyn Fn(Option<Identity>)>)>>>;

/// Identity provider driven by the test: auth-state events are pushed with
/// [`FakeIdentityProvider::emit`] and sign-in results are queued up front.
#[derive(Default)]
pub struct FakeIdentityProvider {
    observers: Observers,
    next_observer: Cell<u64>,
    sign_in_results: RefCell<VecDeque<Result<Credential, AuthError>>>,
    sign_out_result: RefCell<Option<AuthError>>,
    pub sign_in_calls: Cell<usize>,
    pub sign_out_calls: Cell<usize>,
}

impl FakeIdentityProvider {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn queue_sign_in(&self, result: Result<Credential, AuthError>) {
        self.sign_in_results.borrow_mut().push_back(result);
    }

    pub fn fail_sign_out(&self, err: AuthError) {
        *self.sign_out_result.borrow_mut() = Some(err);
    }

    /// Deliver an auth-state change to every open subscription.
    pub fn emit(&self, user: Option<Identity>) {
        let observers: Vec<_> = self.observers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for observer in observers {
            observer(user.clone());
        }
    }

    pub fn active_subscriptions(&self) -> usize {
        self.observers.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FakeIdentityProvider {
    fn subscribe(&self, callback: AuthStateCallback) -> Subscription {
        let id = self.next_observer.get();
        self.next_observer.set(id + 1);
        self.observers.borrow_mut().push((id, Rc::from(callback)));
        let observers = self.observers.clone();
        Subscription::new(move || observers.borrow_mut().retain(|(other, _)| *other != id))
    }

    async fn sign_in(&self) -> Result<Credential, AuthError> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        self.sign_in_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(AuthError::Other("no sign-in result queued".to_owned())))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        match self.sign_out_result.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Profile store recording every attempted write.
#[derive(Default)]
pub struct FakeProfileStore {
    pub writes: RefCell<Vec<(String, ProfileRecord)>>,
    failure: RefCell<Option<ProfileWriteError>>,
}

impl FakeProfileStore {
    pub fn failing(message: &str) -> Self {
        Self { writes: RefCell::default(), failure: RefCell::new(Some(ProfileWriteError(message.to_owned()))) }
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileStore for FakeProfileStore {
    async fn write(&self, credential: &Credential, record: &ProfileRecord) -> Result<(), ProfileWriteError> {
        self.writes.borrow_mut().push((profile_path(&credential.user.uid), record.clone()));
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn credential_for(uid: &str, email: &str) -> Credential {
    Credential { user: Identity::with_email(uid, email), id_token: Some(format!("token-{uid}")) }
}
