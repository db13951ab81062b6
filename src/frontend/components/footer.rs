use leptos::prelude::*;

use crate::frontend::use_app;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app();

    move || {
        let t = ctx.t();
        view! {
            <footer class="border-t border-slate-800 bg-slate-900/50">
                <div class="max-w-6xl mx-auto px-6 py-12 grid gap-8 md:grid-cols-2">
                    <div>
                        <p class="text-2xl font-bold mb-2">"🤖 " {t.common.brand}</p>
                        <p class="text-slate-400 text-sm">{t.footer.disclaimer}</p>
                    </div>
                    <div class="md:text-right">
                        <p class="text-sm font-semibold text-slate-300 mb-3">{t.footer.links_title}</p>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/learn" class="text-slate-400 hover:text-white">{t.nav.learn}</a></li>
                            <li><a href="/blog" class="text-slate-400 hover:text-white">{t.nav.blog}</a></li>
                            <li><a href="/support" class="text-slate-400 hover:text-white">{t.nav.support}</a></li>
                        </ul>
                    </div>
                </div>
            </footer>
        }
    }
}
