use leptos::prelude::*;

#[component]
pub fn StepCard(
    number: u8,
    title: &'static str,
    desc: &'static str,
) -> impl IntoView {
    view! {
        <div class="group p-6 rounded-xl bg-slate-900/50 border border-slate-800
                    hover:border-emerald-500/50 hover:bg-slate-800/50
                    transition-all duration-300 hover:-translate-y-1">
            <span class="w-10 h-10 mb-4 flex items-center justify-center rounded-full
                         bg-emerald-500/10 text-emerald-400 font-bold">
                {number}
            </span>
            <h3 class="text-xl font-semibold text-white mb-2">{title}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{desc}</p>
        </div>
    }
}
