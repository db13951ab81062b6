use leptos::prelude::*;

use crate::frontend::components::{ButtonVariant, LinkButton, StepCard};
use crate::frontend::use_app;
use crate::routing::AuthMode;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app();
    // Signed-in visitors go straight to the builder.
    let start_href = move || {
        if ctx.identity().is_some() {
            "/builder"
        } else {
            AuthMode::SignUp.href()
        }
    };

    move || {
        let t = ctx.t();
        let l = &t.landing;

        view! {
            <section class="pt-32 pb-20 px-6 flex flex-col items-center text-center">
                <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight max-w-4xl">
                    <span class="bg-gradient-to-r from-emerald-400 via-teal-400 to-emerald-500 bg-clip-text text-transparent">
                        {l.hero_title}
                    </span>
                </h1>
                <p class="text-xl text-slate-400 max-w-2xl mb-10">{l.hero_subtitle}</p>

                <div class="flex flex-wrap gap-4 justify-center">
                    <LinkButton href=start_href()>{l.cta_start}</LinkButton>
                    <LinkButton href="/learn" variant=ButtonVariant::Ghost>{l.cta_learn}</LinkButton>
                </div>
            </section>

            <section class="py-20 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">{l.how_it_works}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StepCard number=1 title=l.step1_title desc=l.step1_desc />
                        <StepCard number=2 title=l.step2_title desc=l.step2_desc />
                        <StepCard number=3 title=l.step3_title desc=l.step3_desc />
                    </div>
                </div>
            </section>

            <section class="py-20 px-6">
                <div class="max-w-5xl mx-auto grid gap-12 md:grid-cols-2">
                    <div>
                        <h2 class="text-2xl font-bold mb-6">{l.what_you_learn}</h2>
                        <ul class="space-y-3 text-slate-300">
                            {[l.learn1, l.learn2, l.learn3, l.learn4]
                                .into_iter()
                                .map(|item| view! { <li class="flex gap-2"><span class="text-emerald-400">"✓"</span>{item}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold mb-6">{l.who_is_for}</h2>
                        <ul class="space-y-3 text-slate-300">
                            {[l.for_traders, l.for_beginners, l.for_curious]
                                .into_iter()
                                .map(|item| view! { <li class="flex gap-2"><span class="text-emerald-400">"→"</span>{item}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </section>

            <section class="pb-20 px-6">
                <div class="max-w-3xl mx-auto p-6 rounded-xl border border-amber-500/30 bg-amber-500/5">
                    <h3 class="font-semibold text-amber-400 mb-2">{l.disclaimer}</h3>
                    <p class="text-sm text-slate-400">{l.disclaimer_text}</p>
                </div>
            </section>
        }
    }
}
