use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::content::{adjacent_lessons, lesson_by_slug, lessons_at};
use crate::frontend::components::{ButtonVariant, LinkButton, Replace};
use crate::frontend::use_app;
use crate::models::LessonLevel;
use crate::routing::Route;

#[component]
pub fn LearnPage() -> impl IntoView {
    let ctx = use_app();

    move || {
        let language = ctx.language.get();
        let l = &ctx.t().learn;

        view! {
            <div class="max-w-5xl mx-auto px-6 pt-28 pb-20">
                <h1 class="text-4xl font-bold mb-2">{l.title}</h1>
                <p class="text-slate-400 mb-12">{l.subtitle}</p>

                {LessonLevel::ALL
                    .into_iter()
                    .map(|level| {
                        view! {
                            <section class="mb-12">
                                <h2 class="text-xl font-semibold mb-4">
                                    {l.level} " " {level.number()} ": " {level.label(language)}
                                </h2>
                                <div class="grid gap-4 md:grid-cols-3">
                                    {lessons_at(level)
                                        .map(|lesson| {
                                            view! {
                                                <a
                                                    href=lesson.href()
                                                    class="block p-5 rounded-xl bg-slate-900/50 border border-slate-800 hover:border-emerald-500/50 transition-colors"
                                                >
                                                    <h3 class="font-semibold text-white mb-2">{lesson.title(language)}</h3>
                                                    <p class="text-sm text-slate-400 mb-3">{lesson.summary(language)}</p>
                                                    <span class="text-sm text-emerald-400">{l.read_lesson} " →"</span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        }
    }
}

/// A single lesson; unknown slugs go back to the index.
#[component]
pub fn LessonPage() -> impl IntoView {
    let ctx = use_app();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug")).unwrap_or_default();

    move || {
        let slug = slug();
        if let Some(target) = Route::Lesson(slug.clone()).fallback() {
            return view! { <Replace path=target.href() /> }.into_any();
        }
        let Some(lesson) = lesson_by_slug(&slug) else {
            return ().into_any();
        };

        let language = ctx.language.get();
        let l = &ctx.t().learn;
        let (previous, next) = adjacent_lessons(lesson.slug);

        view! {
            <article class="max-w-3xl mx-auto px-6 pt-28 pb-20">
                <a href="/learn" class="text-sm text-slate-400 hover:text-white">"← " {l.back_to_lessons}</a>
                <p class="mt-6 text-sm text-emerald-400">
                    {l.level} " " {lesson.level.number()} ": " {lesson.level.label(language)}
                </p>
                <h1 class="text-4xl font-bold mt-2 mb-4">{lesson.title(language)}</h1>
                <p class="text-lg text-slate-300 mb-10">{lesson.summary(language)}</p>

                {lesson.related_step.map(|step| {
                    view! {
                        <div class="p-5 mb-10 rounded-xl border border-emerald-500/30 bg-emerald-500/5 flex items-center justify-between">
                            <span class="text-slate-300">{l.related_step} " " {step}</span>
                            <LinkButton href="/builder">{l.start_builder}</LinkButton>
                        </div>
                    }
                })}

                <nav class="flex justify-between gap-4">
                    {previous.map(|p| view! {
                        <LinkButton href=p.href() variant=ButtonVariant::Ghost>
                            "← " {l.previous_lesson}
                        </LinkButton>
                    })}
                    <span></span>
                    {next.map(|n| view! {
                        <LinkButton href=n.href() variant=ButtonVariant::Ghost>
                            {l.next_lesson} " →"
                        </LinkButton>
                    })}
                </nav>
            </article>
        }
        .into_any()
    }
}
