use leptos::prelude::*;

use crate::frontend::use_app;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app();

    move || {
        let t = &ctx.t().not_found;
        view! {
            <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
                <div class="text-center">
                    <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-emerald-400 to-teal-400 bg-clip-text text-transparent mb-4">
                        {t.title}
                    </h1>
                    <p class="text-2xl font-semibold text-white mb-8">{t.message}</p>
                    <a href="/" class="btn-primary">{t.return_home}</a>
                </div>
            </div>
        }
    }
}
