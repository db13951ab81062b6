use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::dashboard::report_failure;
use crate::frontend::components::{
    Button, Notice, NoticeAlert, SelectInput, TextInput,
};
use crate::frontend::use_app;
use crate::models::{Platform, RobotCreate, Strategy};
use crate::services::validation::validate_robot_name;

#[component]
pub fn BuilderPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = StoredValue::new_local(use_navigate());

    let (name, set_name) = signal(String::new());
    let (platform, set_platform) = signal(Platform::default().as_str().to_string());
    let (strategy, set_strategy) = signal(Strategy::default().as_str().to_string());
    let (notice, set_notice) = signal(None::<Notice>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(identity) = ctx.identity_untracked() else {
            return;
        };

        let name = match validate_robot_name(&name.get_untracked()) {
            Ok(name) => name,
            Err(e) => {
                set_notice.set(Some(Notice::error(e.message())));
                return;
            }
        };
        // Both selects only offer known values.
        let platform = platform.get_untracked().parse().unwrap_or_default();
        let strategy = strategy.get_untracked().parse().unwrap_or_default();
        let draft = RobotCreate {
            user_id: identity.id,
            name,
            platform,
            strategy,
        };

        set_notice.set(None);
        set_pending.set(true);
        let api = ctx.services().robots;
        spawn_local(async move {
            let result = api.create_robot(&draft).await;
            set_pending.set(false);
            match result {
                Ok(robot) => {
                    log::debug!("Created robot {}", robot.id);
                    navigate.with_value(|go| go("/dashboard", NavigateOptions::default()));
                }
                Err(e) => {
                    report_failure(ctx, set_notice, &e, |t| t.builder.create_failed)
                }
            }
        });
    };

    move || {
        let t = ctx.t();
        let b = &t.builder;
        let platforms = Platform::ALL
            .iter()
            .map(|p| (p.as_str(), p.as_str()))
            .collect::<Vec<_>>();
        let strategies = Strategy::ALL
            .iter()
            .map(|s| (s.as_str(), s.label(t)))
            .collect::<Vec<_>>();

        view! {
            <div class="max-w-xl mx-auto px-6 pt-28 pb-20">
                <h1 class="text-3xl font-bold mb-2">{b.title}</h1>
                <p class="text-slate-400 mb-8">{b.subtitle}</p>

                <NoticeAlert notice=notice />

                <form class="space-y-5" on:submit=on_submit>
                    <TextInput
                        label=b.name
                        name="name"
                        placeholder=b.name_placeholder
                        input_type="text"
                        required=true
                        value=name
                        set_value=set_name
                    />
                    <SelectInput
                        label=b.platform
                        name="platform"
                        options=platforms
                        value=platform
                        set_value=set_platform
                    />
                    <SelectInput
                        label=b.strategy
                        name="strategy"
                        options=strategies
                        value=strategy
                        set_value=set_strategy
                    />
                    <Button loading=pending loading_text=t.common.loading>
                        {b.create}
                    </Button>
                </form>
            </div>
        }
    }
}
