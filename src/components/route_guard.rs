//! Session-gated navigation guard.
//!
//! Wraps every routed page. On each navigation it reads the stored token
//! and the route table's policy for the target path, then either renders
//! the page or issues a client-side redirect. The check is synchronous and
//! local; token validity is a server concern that surfaces later through
//! authenticated API calls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{GuardDecision, check_navigation};
use crate::state::session;

/// Guard wrapper applied to every route.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    // Re-evaluated whenever the path changes; storage is read fresh each
    // time so a login or logout in this tab is picked up immediately.
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        check_navigation(&path, session::stored_token().as_deref())
    });

    Effect::new(move || {
        if let GuardDecision::RedirectTo(target) = decision.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
