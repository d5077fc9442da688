//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, home::HomePage, signin::SignInPage, signup::SignUpPage};
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
pub use browser::AppServices;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal (and, in the browser, the services behind it)
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts out loading; only the browser's identity provider ever settles it.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    provide_context(AppServices::connect(session));

    view! {
        <Title text="The Coordinate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use leptos::logging::{error, warn};
    use leptos::prelude::*;

    use crate::config::FirebaseConfig;
    use crate::net::firebase::FirebaseIdentityProvider;
    use crate::net::identity::{IdentityProvider, UnavailableIdentityProvider};
    use crate::net::profile::{ProfileStore, RealtimeDbProfileStore, UnavailableProfileStore};
    use crate::services::session::SessionContext;
    use crate::state::session::SessionState;

    /// Browser-only services shared through context.
    #[derive(Clone, Copy)]
    pub struct AppServices {
        session: StoredValue<SessionContext, LocalStorage>,
        profiles: StoredValue<Rc<dyn ProfileStore>, LocalStorage>,
    }

    impl AppServices {
        /// Open the session against the configured platform and mirror every
        /// change into `state`.
        pub fn connect(state: RwSignal<SessionState>) -> Self {
            let (provider, profiles) = platform();
            let session = SessionContext::new(provider);
            session.watch(move |snapshot| state.set(snapshot.clone()));
            session.init();

            let handle = StoredValue::new_local(session);
            on_cleanup(move || {
                handle.try_with_value(SessionContext::dispose);
            });

            Self { session: handle, profiles: StoredValue::new_local(profiles) }
        }

        pub fn session(&self) -> SessionContext {
            self.session.get_value()
        }

        pub fn profiles(&self) -> Rc<dyn ProfileStore> {
            self.profiles.get_value()
        }
    }

    fn unavailable() -> (Rc<dyn IdentityProvider>, Rc<dyn ProfileStore>) {
        (Rc::new(UnavailableIdentityProvider), Rc::new(UnavailableProfileStore))
    }

    fn platform() -> (Rc<dyn IdentityProvider>, Rc<dyn ProfileStore>) {
        let config = match FirebaseConfig::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; sign-in disabled");
                return unavailable();
            }
        };
        match FirebaseIdentityProvider::connect(&config) {
            Ok(provider) => (Rc::new(provider), Rc::new(RealtimeDbProfileStore::new(&config.database_url))),
            Err(e) => {
                error!("firebase initialization failed: {e}");
                unavailable()
            }
        }
    }
}
