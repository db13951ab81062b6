pub mod components;
mod context;
pub mod pages;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

pub use context::{AppContext, LeptosSpawner, Services, use_app};

use components::{Footer, Guarded, Nav};
use pages::{
    AuthPage, BlogArticlePage, BlogPage, BuilderPage, DashboardPage,
    LandingPage, LearnPage, LessonPage, NotFound, SupportPage,
};

/// Main application component with routing
#[component]
pub fn App(services: Services) -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(services.clone());
    provide_context(ctx);

    // Reconcile parks on the session channel until initialize resolves it.
    let Services {
        session, language, ..
    } = services;
    spawn_local(async move { session.initialize().await });
    spawn_local(async move { language.reconcile().await });

    let html_lang = move || ctx.language.get().as_str();

    view! {
        <Html attr:lang=html_lang />
        <Stylesheet id="leptos" href="/pkg/robottrader.css"/>
        <Title text=move || ctx.t().common.brand />

        <Router>
            <Nav/>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/learn") view=LearnPage/>
                    <Route path=path!("/learn/:slug") view=LessonPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:slug") view=BlogArticlePage/>
                    <Route path=path!("/support") view=SupportPage/>
                    <Route
                        path=path!("/auth")
                        view=|| view! {
                            <Guarded>
                                <AuthPage/>
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! {
                            <Guarded>
                                <DashboardPage/>
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/builder")
                        view=|| view! {
                            <Guarded>
                                <BuilderPage/>
                            </Guarded>
                        }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
