use leptos::prelude::*;

use crate::frontend::use_app;
use crate::i18n::Language;

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="flex rounded-lg border border-slate-700 overflow-hidden text-xs font-semibold">
            {Language::ALL
                .into_iter()
                .map(|language| {
                    let class = move || {
                        if ctx.language.get() == language {
                            "px-3 py-1 bg-emerald-500 text-white"
                        } else {
                            "px-3 py-1 text-slate-400 hover:text-white"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-pressed=move || (ctx.language.get() == language).to_string()
                            on:click=move |_| ctx.set_language(language)
                        >
                            {language.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
