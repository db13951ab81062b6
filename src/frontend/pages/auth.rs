use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::common::AuthError;
use crate::frontend::components::{Button, Notice, NoticeAlert, TextInput};
use crate::frontend::use_app;
use crate::routing::AuthMode;
use crate::services::validation::validate_credentials;

/// Sign-in and sign-up on one page; `?mode=signup` opens the latter.
///
/// On success the session guard around this page redirects to the dashboard.
#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app();
    let search = use_location().search;
    let mode = RwSignal::new(AuthMode::from_query(&search.get_untracked()));

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let auth_mode = mode.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(e) =
            validate_credentials(auth_mode, &email, &password, &confirm.get_untracked())
        {
            set_notice.set(Some(Notice::error(e.message())));
            return;
        }

        set_notice.set(None);
        set_pending.set(true);
        let services = ctx.services();
        spawn_local(async move {
            let result = match auth_mode {
                AuthMode::SignIn => services.session.sign_in(&email, &password).await,
                AuthMode::SignUp => services.session.sign_up(&email, &password).await,
            };
            set_pending.set(false);

            match result {
                Ok(identity) => {
                    ctx.sync_session();
                    if auth_mode == AuthMode::SignIn {
                        services.language.adopt_profile_language(&identity).await;
                    }
                }
                Err(AuthError::ConfirmationPending) => {
                    mode.set(AuthMode::SignIn);
                    set_notice.set(Some(Notice::success(
                        AuthError::ConfirmationPending.message(),
                    )));
                }
                Err(e) => {
                    log::debug!("Authentication failed: {}", e);
                    set_notice.set(Some(Notice::error(e.message())));
                }
            }
        });
    };

    let toggle_mode = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        set_notice.set(None);
    };

    move || {
        let t = ctx.t();
        let a = &t.auth;
        let signing_up = mode.get() == AuthMode::SignUp;

        let (title, submit, switch_prompt, switch_label) = if signing_up {
            (a.signup_title, a.signup_button, a.has_account, t.nav.login)
        } else {
            (a.login_title, a.login_button, a.no_account, t.nav.signup)
        };

        view! {
            <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
                <div class="w-full max-w-md">
                    <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                        <div class="text-center mb-8">
                            <a href="/" class="inline-block text-4xl mb-4 hover:animate-bounce">"🤖"</a>
                            <h1 class="text-2xl font-bold text-white">{title}</h1>
                        </div>

                        <NoticeAlert notice=notice />

                        <form class="space-y-5" on:submit=on_submit novalidate=true>
                            <TextInput
                                label=a.email
                                name="email"
                                placeholder=a.email_placeholder
                                input_type="email"
                                required=true
                                value=email
                                set_value=set_email
                            />
                            <TextInput
                                label=a.password
                                name="password"
                                placeholder=a.password_placeholder
                                input_type="password"
                                required=true
                                hint=if signing_up { a.password_hint } else { "" }
                                value=password
                                set_value=set_password
                            />
                            {signing_up.then(|| view! {
                                <TextInput
                                    label=a.confirm_password
                                    name="confirm_password"
                                    placeholder=a.password_placeholder
                                    input_type="password"
                                    required=true
                                    value=confirm
                                    set_value=set_confirm
                                />
                            })}
                            <div class="pt-2">
                                <Button loading=pending loading_text=t.common.loading>
                                    {submit}
                                </Button>
                            </div>
                        </form>

                        <p class="mt-6 text-center text-sm text-slate-400">
                            {switch_prompt} " "
                            <a
                                href=mode.get().toggled().href()
                                class="text-emerald-400 hover:text-emerald-300 font-medium"
                                on:click=toggle_mode
                            >
                                {switch_label}
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        }
    }
}
