//! Login page: posts credentials and stores the issued session token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::{ApiEnvelope, AuthData, LoginRequest};
use crate::routes::{SIGNUP_PATH, TODOS_PATH};
use crate::state::session::{self, SessionState};

/// Login page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let navigate = navigate.clone();
        let credentials = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            match login_flow(&api, &credentials).await {
                Ok(auth) => {
                    session::store_token(&auth.token);
                    session_state.set(SessionState {
                        user: Some(auth.user),
                        token: Some(auth.token),
                    });
                    navigate(TODOS_PATH, NavigateOptions::default());
                }
                Err(message) => {
                    leptos::logging::warn!("login failed: {message}");
                    error.set(Some(message));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__card" on:submit=on_submit>
                <h1>"Log in"</h1>
                <label class="auth-page__field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log in" }}
                </button>
                <p class="auth-page__switch">
                    "No account? "
                    <A href=SIGNUP_PATH>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}

/// Run the login call and decode the auth payload.
async fn login_flow(api: &ApiClient, credentials: &LoginRequest) -> Result<AuthData, String> {
    let response = api.login(credentials).await.map_err(|e| e.to_string())?;
    let envelope: ApiEnvelope<AuthData> = response.json().await.map_err(|e| e.to_string())?;
    envelope.data.ok_or(envelope.message)
}
