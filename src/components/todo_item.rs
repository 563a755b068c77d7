use leptos::prelude::*;

use crate::net::types::Todo;

/// One row of the todo list with completion toggle and delete controls.
#[component]
pub fn TodoItem(todo: Todo, on_toggle: Callback<Todo>, on_delete: Callback<i64>) -> impl IntoView {
    let row_class = if todo.completed {
        "todo-item todo-item--done"
    } else {
        "todo-item"
    };
    let id = todo.id;
    let completed = todo.completed;
    let toggled = todo.clone();

    view! {
        <li class=row_class>
            <input
                class="todo-item__check"
                type="checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run(toggled.clone())
            />
            <div class="todo-item__body">
                <span class="todo-item__title">{todo.title.clone()}</span>
                <span class="todo-item__content">{todo.content.clone()}</span>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </li>
    }
}
