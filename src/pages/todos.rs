//! Todos page: verifies the session on mount, then lists and edits todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::todo_item::TodoItem;
use crate::net::api::ApiClient;
use crate::net::types::{ApiEnvelope, CreateTodoRequest, Todo, UpdateTodoRequest, User};
use crate::routes::LOGIN_PATH;
use crate::state::session::{self, SessionState};

/// Todos page.
///
/// The guard has already checked token presence; this page asks the server
/// to verify the session once on mount. A failed verify is shown as an
/// error and leaves the stored token untouched.
#[component]
pub fn TodosPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let todos = RwSignal::new(Vec::<Todo>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let new_title = RwSignal::new(String::new());
    let new_content = RwSignal::new(String::new());

    // Verify the session and load the list once on mount.
    {
        let api = api.clone();
        Effect::new(move || {
            let api = api.clone();
            spawn_local(async move {
                let Some(token) = session::stored_token() else {
                    loading.set(false);
                    return;
                };
                match verify_session(&api, &token).await {
                    Ok(user) => {
                        session_state.update(|s| {
                            s.user = Some(user);
                            s.token = Some(token.clone());
                        });
                    }
                    Err(message) => {
                        leptos::logging::warn!("session verify failed: {message}");
                        error.set(Some(message));
                        loading.set(false);
                        return;
                    }
                }
                match fetch_todos(&api, &token).await {
                    Ok(list) => todos.set(list),
                    Err(message) => {
                        leptos::logging::warn!("loading todos failed: {message}");
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let title = new_title.get_untracked();
            if title.trim().is_empty() {
                return;
            }
            let api = api.clone();
            let request = CreateTodoRequest {
                title,
                content: new_content.get_untracked(),
            };
            spawn_local(async move {
                let Some(token) = session::stored_token() else {
                    return;
                };
                match push_todo(&api, &request, &token).await {
                    Ok(todo) => {
                        todos.update(|list| list.push(todo));
                        new_title.set(String::new());
                        new_content.set(String::new());
                    }
                    Err(message) => {
                        leptos::logging::warn!("creating todo failed: {message}");
                        error.set(Some(message));
                    }
                }
            });
        }
    };

    let on_toggle = {
        let api = api.clone();
        Callback::new(move |todo: Todo| {
            let api = api.clone();
            spawn_local(async move {
                let Some(token) = session::stored_token() else {
                    return;
                };
                match save_toggled(&api, &todo, &token).await {
                    Ok(updated) => todos.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                            *slot = updated;
                        }
                    }),
                    Err(message) => {
                        leptos::logging::warn!("updating todo failed: {message}");
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let Some(token) = session::stored_token() else {
                    return;
                };
                match remove_todo(&api, id, &token).await {
                    Ok(()) => todos.update(|list| list.retain(|t| t.id != id)),
                    Err(message) => {
                        leptos::logging::warn!("deleting todo failed: {message}");
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let on_logout = move |_| {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Some(token) = session::stored_token() {
                if let Err(e) = api.logout(&token).await {
                    // Local invalidation still happens below.
                    leptos::logging::warn!("logout request failed: {e}");
                }
            }
            session::clear_token();
            session_state.set(SessionState::default());
            navigate(LOGIN_PATH, NavigateOptions::default());
        });
    };

    let username = move || {
        session_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <div class="todos-page">
            <header class="todos-page__header">
                <h1>"Todos"</h1>
                <span class="todos-page__user">{username}</span>
                <span class="todos-page__spacer"></span>
                <ThemeToggle/>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            {move || error.get().map(|msg| view! { <p class="todos-page__error">{msg}</p> })}

            <form class="todos-page__form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || new_title.get()
                    on:input=move |ev| new_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Details"
                    prop:value=move || new_content.get()
                    on:input=move |ev| new_content.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add"
                </button>
            </form>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="todos-page__loading">"Loading todos..."</p> }
            >
                <Show
                    when=move || !todos.get().is_empty()
                    fallback=|| view! { <p class="todos-page__empty">"Nothing to do yet."</p> }
                >
                    <ul class="todos-page__list">
                        {move || {
                            todos
                                .get()
                                .into_iter()
                                .map(|todo| view! { <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

/// Ask the server whether the stored token still names a session.
async fn verify_session(api: &ApiClient, token: &str) -> Result<User, String> {
    let response = api.verify_token(token).await.map_err(|e| e.to_string())?;
    let envelope: ApiEnvelope<User> = response.json().await.map_err(|e| e.to_string())?;
    envelope.data.ok_or(envelope.message)
}

async fn fetch_todos(api: &ApiClient, token: &str) -> Result<Vec<Todo>, String> {
    let response = api.list_todos(token).await.map_err(|e| e.to_string())?;
    let envelope: ApiEnvelope<Vec<Todo>> = response.json().await.map_err(|e| e.to_string())?;
    envelope.data.ok_or(envelope.message)
}

async fn push_todo(
    api: &ApiClient,
    request: &CreateTodoRequest,
    token: &str,
) -> Result<Todo, String> {
    let response = api.create_todo(request, token).await.map_err(|e| e.to_string())?;
    let envelope: ApiEnvelope<Todo> = response.json().await.map_err(|e| e.to_string())?;
    envelope.data.ok_or(envelope.message)
}

/// Persist `todo` with its completion flag flipped.
async fn save_toggled(api: &ApiClient, todo: &Todo, token: &str) -> Result<Todo, String> {
    let request = UpdateTodoRequest {
        title: todo.title.clone(),
        content: todo.content.clone(),
        completed: !todo.completed,
    };
    let response = api
        .update_todo(todo.id, &request, token)
        .await
        .map_err(|e| e.to_string())?;
    let envelope: ApiEnvelope<Todo> = response.json().await.map_err(|e| e.to_string())?;
    envelope.data.ok_or(envelope.message)
}

async fn remove_todo(api: &ApiClient, id: i64, token: &str) -> Result<(), String> {
    api.delete_todo(id, token).await.map_err(|e| e.to_string())?;
    Ok(())
}
