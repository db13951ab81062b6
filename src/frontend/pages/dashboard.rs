use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::common::BackendError;
use crate::frontend::components::{
    Button, ButtonVariant, LinkButton, Loading, Notice, NoticeAlert,
};
use crate::frontend::{AppContext, use_app};
use crate::i18n::LocalizedText;
use crate::models::Robot;

/// Shows a record-call failure, or expires the session when the backend no
/// longer accepts the credential.
pub(crate) fn report_failure(
    ctx: AppContext,
    set_notice: WriteSignal<Option<Notice>>,
    error: &BackendError,
    message: LocalizedText,
) {
    if error.is_unauthorized() {
        ctx.expire_session();
    } else {
        log::warn!("Backend call failed: {}", error);
        set_notice.set(Some(Notice::error(message)));
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let (robots, set_robots) = signal(Vec::<Robot>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(None::<Notice>);

    if let Some(identity) = ctx.identity_untracked() {
        let api = ctx.services().robots;
        spawn_local(async move {
            match api.list_robots(identity.id).await {
                Ok(list) => set_robots.set(list),
                Err(e) => {
                    report_failure(ctx, set_notice, &e, |t| t.dashboard.load_failed)
                }
            }
            set_loading.set(false);
        });
    }

    let delete = move |id: Uuid| {
        let api = ctx.services().robots;
        spawn_local(async move {
            match api.delete_robot(id).await {
                Ok(()) => {
                    set_robots.update(|list| list.retain(|r| r.id != id));
                    set_notice.set(Some(Notice::success(|t| t.dashboard.deleted)));
                }
                Err(e) => {
                    report_failure(ctx, set_notice, &e, |t| t.dashboard.delete_failed)
                }
            }
        });
    };

    move || {
        let t = ctx.t();
        let d = &t.dashboard;
        let email = ctx.identity().map(|i| i.email).unwrap_or_default();

        view! {
            <div class="max-w-5xl mx-auto px-6 pt-28 pb-20">
                <h1 class="text-3xl font-bold mb-2">{d.welcome}</h1>
                <p class="text-slate-400 mb-10">{email}</p>

                <div class="grid gap-4 md:grid-cols-3 mb-12">
                    <LinkButton href="/builder">{d.start_new_robot}</LinkButton>
                    <LinkButton href="/learn" variant=ButtonVariant::Ghost>{d.go_to_learn}</LinkButton>
                    <LinkButton href="/support" variant=ButtonVariant::Ghost>{d.go_to_support}</LinkButton>
                </div>

                <NoticeAlert notice=notice />

                <h2 class="text-xl font-semibold mb-4">{d.recent_robots}</h2>
                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_any();
                    }
                    let list = robots.get();
                    if list.is_empty() {
                        return view! {
                            <div class="p-8 rounded-xl border border-dashed border-slate-700 text-center">
                                <p class="text-slate-400 mb-4">{d.no_robots}</p>
                                <LinkButton href="/builder">{d.create_first}</LinkButton>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <ul class="space-y-3">
                            {list
                                .into_iter()
                                .map(|robot| {
                                    let id = robot.id;
                                    view! {
                                        <li class="flex items-center justify-between p-4 rounded-xl bg-slate-900/50 border border-slate-800">
                                            <div>
                                                <p class="font-semibold text-white">{robot.name}</p>
                                                <p class="text-sm text-slate-400">
                                                    {robot.platform.as_str()} " · "
                                                    {robot.strategy.label(t)} " · "
                                                    {robot.created_at.format("%d-%m-%Y").to_string()}
                                                </p>
                                            </div>
                                            <form on:submit=move |ev| {
                                                ev.prevent_default();
                                                delete(id);
                                            }>
                                                <Button variant=ButtonVariant::Danger>{d.delete_robot}</Button>
                                            </form>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        }
    }
}
