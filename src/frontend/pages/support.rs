use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    Button, Notice, NoticeAlert, SelectInput, TextArea, TextInput,
};
use crate::frontend::use_app;
use crate::models::{SupportForm, TicketCategory};
use crate::services::validation::validate_support_form;

#[component]
pub fn SupportPage() -> impl IntoView {
    let ctx = use_app();
    let signed_in_email =
        ctx.identity_untracked().map(|i| i.email).unwrap_or_default();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(signed_in_email);
    let (subject, set_subject) = signal(String::new());
    let (category, set_category) =
        signal(TicketCategory::Question.as_str().to_string());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = SupportForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            category: category.get_untracked(),
            message: message.get_untracked(),
        };
        let user_id = ctx.identity_untracked().map(|i| i.id);
        let ticket = match validate_support_form(&form, user_id) {
            Ok(ticket) => ticket,
            Err(e) => {
                set_notice.set(Some(Notice::error(e.message())));
                return;
            }
        };

        set_notice.set(None);
        set_pending.set(true);
        let api = ctx.services().support;
        spawn_local(async move {
            let result = api.submit_ticket(&ticket).await;
            set_pending.set(false);
            match result {
                Ok(()) => {
                    set_name.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_category.set(TicketCategory::Question.as_str().to_string());
                    set_notice.set(Some(Notice::success(|t| t.support.message_sent)));
                }
                Err(e) => {
                    log::warn!("Support ticket failed: {}", e);
                    set_notice.set(Some(Notice::error(|t| t.support.send_failed)));
                }
            }
        });
    };

    move || {
        let t = ctx.t();
        let s = &t.support;
        let faq = [
            (s.faq_q1, s.faq_a1),
            (s.faq_q2, s.faq_a2),
            (s.faq_q3, s.faq_a3),
            (s.faq_q4, s.faq_a4),
            (s.faq_q5, s.faq_a5),
        ];
        let categories = TicketCategory::ALL
            .iter()
            .map(|c| (c.as_str(), c.label(t)))
            .collect::<Vec<_>>();

        view! {
            <div class="max-w-5xl mx-auto px-6 pt-28 pb-20">
                <h1 class="text-4xl font-bold mb-2">{s.title}</h1>
                <p class="text-slate-400 mb-12">{s.subtitle}</p>

                <div class="grid gap-12 md:grid-cols-2">
                    <section>
                        <h2 class="text-xl font-semibold mb-6">{s.faq_title}</h2>
                        <dl class="space-y-6">
                            {faq
                                .into_iter()
                                .map(|(q, a)| view! {
                                    <div>
                                        <dt class="font-medium text-white mb-1">{q}</dt>
                                        <dd class="text-sm text-slate-400">{a}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                    </section>

                    <section>
                        <h2 class="text-xl font-semibold mb-6">{s.contact_title}</h2>
                        <NoticeAlert notice=notice />
                        <form class="space-y-5" on:submit=on_submit novalidate=true>
                            <TextInput label=s.name name="name" input_type="text" required=true value=name set_value=set_name />
                            <TextInput label=s.email name="email" input_type="email" required=true value=email set_value=set_email />
                            <TextInput label=s.subject name="subject" input_type="text" required=true value=subject set_value=set_subject />
                            <SelectInput
                                label=s.category
                                name="category"
                                options=categories
                                value=category
                                set_value=set_category
                            />
                            <TextArea label=s.message name="message" value=message set_value=set_message />
                            <Button loading=pending loading_text=t.common.loading>
                                {s.send}
                            </Button>
                        </form>
                    </section>
                </div>
            </div>
        }
    }
}
