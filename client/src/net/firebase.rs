//! Firebase Authentication client for the browser build.
//!
//! Binds the modular Firebase web SDK straight from the gstatic CDN and
//! adapts it to [`IdentityProvider`]: `onAuthStateChanged` feeds the session
//! context, `signInWithPopup` runs the Google flow, and `signOut` ends the
//! provider session. Only compiled with the `hydrate` feature.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::error::AuthError;
use super::identity::{AuthStateCallback, IdentityProvider, Subscription};
use super::types::{Credential, Identity};
use crate::config::FirebaseConfig;

#[wasm_bindgen(raw_module = "https://www.gstatic.com/firebasejs/10.12.2/firebase-app.js")]
extern "C" {
    #[wasm_bindgen(js_name = initializeApp, catch)]
    fn initialize_app(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(raw_module = "https://www.gstatic.com/firebasejs/10.12.2/firebase-auth.js")]
extern "C" {
    #[wasm_bindgen(js_name = getAuth)]
    fn get_auth(app: &JsValue) -> JsValue;

    type GoogleAuthProvider;

    #[wasm_bindgen(constructor)]
    fn new() -> GoogleAuthProvider;

    #[wasm_bindgen(js_name = signInWithPopup)]
    fn sign_in_with_popup(auth: &JsValue, provider: &GoogleAuthProvider) -> js_sys::Promise;

    #[wasm_bindgen(js_name = signOut)]
    fn firebase_sign_out(auth: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = onAuthStateChanged)]
    fn on_auth_state_changed(auth: &JsValue, observer: &Closure<dyn Fn(JsValue)>) -> js_sys::Function;
}

#[wasm_bindgen]
extern "C" {
    type FirebaseUser;

    #[wasm_bindgen(method, getter)]
    fn uid(this: &FirebaseUser) -> String;

    #[wasm_bindgen(method, getter)]
    fn email(this: &FirebaseUser) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    fn display_name(this: &FirebaseUser) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = photoURL)]
    fn photo_url(this: &FirebaseUser) -> Option<String>;

    #[wasm_bindgen(method, js_name = getIdToken)]
    fn get_id_token(this: &FirebaseUser) -> js_sys::Promise;

    type UserCredential;

    #[wasm_bindgen(method, getter)]
    fn user(this: &UserCredential) -> FirebaseUser;

    type FirebaseError;

    #[wasm_bindgen(method, getter)]
    fn code(this: &FirebaseError) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    fn message(this: &FirebaseError) -> Option<String>;
}

fn to_identity(user: &FirebaseUser) -> Identity {
    Identity { uid: user.uid(), email: user.email(), display_name: user.display_name(), photo_url: user.photo_url() }
}

/// Convert a rejected SDK promise into an [`AuthError`].
fn auth_error(err: &JsValue) -> AuthError {
    if !err.is_object() {
        return AuthError::Other(err.as_string().unwrap_or_else(|| "unknown identity provider error".to_owned()));
    }
    let err = err.unchecked_ref::<FirebaseError>();
    AuthError::from_code(&err.code().unwrap_or_default(), &err.message().unwrap_or_default())
}

/// Firebase Authentication with the Google popup provider.
pub struct FirebaseIdentityProvider {
    auth: JsValue,
}

impl FirebaseIdentityProvider {
    /// Initialize the Firebase app and bind its auth instance.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the SDK rejects the configuration.
    pub fn connect(config: &FirebaseConfig) -> Result<Self, AuthError> {
        let json = serde_json::to_string(config).map_err(|e| AuthError::Other(e.to_string()))?;
        let options = js_sys::JSON::parse(&json).map_err(|e| auth_error(&e))?;
        let app = initialize_app(&options).map_err(|e| auth_error(&e))?;
        Ok(Self { auth: get_auth(&app) })
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FirebaseIdentityProvider {
    fn subscribe(&self, callback: AuthStateCallback) -> Subscription {
        let observer = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            let user = if value.is_null() || value.is_undefined() {
                None
            } else {
                Some(to_identity(value.unchecked_ref::<FirebaseUser>()))
            };
            callback(user);
        });
        let unsubscribe = on_auth_state_changed(&self.auth, &observer);
        Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(observer);
        })
    }

    async fn sign_in(&self) -> Result<Credential, AuthError> {
        let provider = GoogleAuthProvider::new();
        let result = JsFuture::from(sign_in_with_popup(&self.auth, &provider))
            .await
            .map_err(|e| auth_error(&e))?;
        let user = result.unchecked_into::<UserCredential>().user();
        let id_token = JsFuture::from(user.get_id_token())
            .await
            .ok()
            .and_then(|token| token.as_string());
        Ok(Credential { user: to_identity(&user), id_token })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        JsFuture::from(firebase_sign_out(&self.auth))
            .await
            .map(|_| ())
            .map_err(|e| auth_error(&e))
    }
}
