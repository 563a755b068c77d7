//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::route_guard::RouteGuard;
use crate::net::api::ApiClient;
use crate::pages::{login::LoginPage, signup::SignupPage, todos::TodosPage};
use crate::routes::LOGIN_PATH;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Provides the session and UI contexts, applies the persisted theme, and
/// sets up client-side routing with the guard wrapped around every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark_mode = theme::read_preference();
    theme::apply(dark_mode);

    let session_state = RwSignal::new(SessionState {
        user: None,
        token: session::stored_token(),
    });
    let ui = RwSignal::new(UiState { dark_mode });

    provide_context(session_state);
    provide_context(ui);
    provide_context(ApiClient::from_env());

    view! {
        <Title text="Todos"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path=LOGIN_PATH/> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <RouteGuard><SignupPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("todos")
                    view=|| view! { <RouteGuard><TodosPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
