use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Header button flipping between light and dark themes.
///
/// The new preference is persisted so the next visit starts in the same
/// theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };

    let label = move || {
        if ui.get().dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        }
    };

    view! {
        <button class="btn btn--ghost theme-toggle" on:click=on_toggle>
            {label}
        </button>
    }
}
