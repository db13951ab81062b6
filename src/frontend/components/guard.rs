use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::frontend::use_app;
use crate::routing::Route;
use crate::services::guard::{GuardDecision, decide};

#[component]
pub fn Loading() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="flex items-center justify-center py-32 text-slate-400">
            <span class="w-6 h-6 mr-3 border-2 border-slate-600 border-t-emerald-400 rounded-full animate-spin"></span>
            {move || ctx.t().common.loading}
        </div>
    }
}

/// Navigates to `path`, replacing the current history entry.
#[component]
pub fn Replace(#[prop(into)] path: String) -> impl IntoView {
    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };
    view! { <Redirect path=path options=options /> }
}

/// Renders `children` only when the session satisfies the policy the route
/// table assigns to the current location.
///
/// The decision is recomputed on every session change.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app();
    let location = use_location();
    let policy = Route::parse(
        &location.pathname.get_untracked(),
        &location.search.get_untracked(),
    )
    .guard();

    let decision = Memo::new(move |_| match policy {
        Some(policy) => ctx.session.with(|s| decide(s, policy)),
        None => GuardDecision::Render,
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <Loading /> }.into_any(),
        GuardDecision::Redirect { to, .. } => {
            view! { <Replace path=to /> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
