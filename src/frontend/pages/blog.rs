use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::content::{BLOG_POSTS, blog_post_by_slug};
use crate::frontend::components::Replace;
use crate::frontend::use_app;
use crate::models::BlogPost;
use crate::routing::Route;

fn published_label(post: &BlogPost) -> String {
    post.published_on()
        .map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let ctx = use_app();

    move || {
        let language = ctx.language.get();
        let b = &ctx.t().blog;

        view! {
            <div class="max-w-5xl mx-auto px-6 pt-28 pb-20">
                <h1 class="text-4xl font-bold mb-2">{b.title}</h1>
                <p class="text-slate-400 mb-12">{b.subtitle}</p>

                <div class="grid gap-6 md:grid-cols-2">
                    {BLOG_POSTS
                        .iter()
                        .map(|post| {
                            view! {
                                <a
                                    href=post.href()
                                    class="block p-6 rounded-xl bg-slate-900/50 border border-slate-800 hover:border-emerald-500/50 transition-colors"
                                >
                                    <p class="text-xs text-slate-500 mb-2">
                                        {post.category.label(language)} " · " {published_label(post)}
                                    </p>
                                    <h2 class="text-xl font-semibold text-white mb-2">{post.title(language)}</h2>
                                    <p class="text-sm text-slate-400 mb-4">{post.excerpt(language)}</p>
                                    <span class="text-sm text-emerald-400">{b.read_more} " →"</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    }
}

/// A single article; unknown slugs go back to the index.
#[component]
pub fn BlogArticlePage() -> impl IntoView {
    let ctx = use_app();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug")).unwrap_or_default();

    move || {
        let slug = slug();
        if let Some(target) = Route::BlogPost(slug.clone()).fallback() {
            return view! { <Replace path=target.href() /> }.into_any();
        }
        let Some(post) = blog_post_by_slug(&slug) else {
            return ().into_any();
        };

        let language = ctx.language.get();
        let b = &ctx.t().blog;

        view! {
            <article class="max-w-3xl mx-auto px-6 pt-28 pb-20">
                <a href="/blog" class="text-sm text-slate-400 hover:text-white">"← " {b.back_to_blog}</a>
                <p class="mt-6 text-sm text-emerald-400">
                    {post.category.label(language)} " · " {published_label(post)}
                </p>
                <h1 class="text-4xl font-bold mt-2 mb-6">{post.title(language)}</h1>
                <p class="text-lg text-slate-300">{post.excerpt(language)}</p>
            </article>
        }
        .into_any()
    }
}
