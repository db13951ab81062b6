use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::LanguageToggle;
use crate::frontend::use_app;
use crate::i18n::LocalizedText;
use crate::routing::{AuthMode, is_active};

#[component]
fn NavLink(href: &'static str, label: LocalizedText) -> impl IntoView {
    let ctx = use_app();
    let pathname = use_location().pathname;

    let class = move || {
        if is_active(&pathname.get(), href) {
            "text-emerald-400 font-medium"
        } else {
            "text-slate-400 hover:text-white transition-colors"
        }
    };

    view! {
        <a href=href class=class>
            {move || label(ctx.t())}
        </a>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_app();
    let navigate = StoredValue::new_local(use_navigate());
    let signed_in = move || ctx.session.with(|s| s.is_authenticated());

    let sign_out = move |_| {
        let session = ctx.services().session;
        spawn_local(async move {
            session.sign_out().await;
            ctx.sync_session();
            navigate.with_value(|go| go("/", NavigateOptions::default()));
        });
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-slate-950/80 border-b border-slate-800">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3 group">
                    <span class="text-3xl group-hover:animate-bounce">"🤖"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-emerald-400 to-teal-400 bg-clip-text text-transparent">
                        {move || ctx.t().common.brand}
                    </span>
                </a>
                <div class="flex items-center gap-6">
                    <NavLink href="/learn" label=|t| t.nav.learn />
                    <NavLink href="/blog" label=|t| t.nav.blog />
                    <NavLink href="/support" label=|t| t.nav.support />
                    <Show when=signed_in>
                        <NavLink href="/dashboard" label=|t| t.nav.dashboard />
                        <NavLink href="/builder" label=|t| t.nav.robot_builder />
                    </Show>
                    <LanguageToggle />
                    <Show
                        when=signed_in
                        fallback=move || {
                            view! {
                                <a href=AuthMode::SignIn.href() class="btn-ghost text-sm px-4 py-2">
                                    {move || ctx.t().nav.login}
                                </a>
                                <a href=AuthMode::SignUp.href() class="btn-primary text-sm px-4 py-2">
                                    {move || ctx.t().nav.signup}
                                </a>
                            }
                        }
                    >
                        <button type="button" class="btn-ghost text-sm px-4 py-2" on:click=sign_out>
                            {move || ctx.t().nav.logout}
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
