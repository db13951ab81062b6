use leptos::prelude::*;

use crate::frontend::use_app;
use crate::i18n::LocalizedText;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

/// A status line kept as a table accessor so it follows language switches.
#[derive(Clone, Copy)]
pub struct Notice {
    pub variant: AlertVariant,
    pub message: LocalizedText,
}

impl Notice {
    pub fn success(message: LocalizedText) -> Self {
        Self {
            variant: AlertVariant::Success,
            message,
        }
    }

    pub fn error(message: LocalizedText) -> Self {
        Self {
            variant: AlertVariant::Error,
            message,
        }
    }
}

#[component]
pub fn Alert(
    #[prop(into)] message: Signal<&'static str>,
    #[prop(optional)] variant: AlertVariant,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => (
            "✓",
            "bg-emerald-500/10 border-emerald-500/30 text-emerald-400",
        ),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-400"),
    };

    view! {
        <div role="alert" class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes)>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{move || message.get()}</span>
            </p>
        </div>
    }
}

/// Renders the current notice, if any.
#[component]
pub fn NoticeAlert(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    let ctx = use_app();

    move || {
        notice.get().map(|n| {
            let message = Signal::derive(move || (n.message)(ctx.t()));
            view! { <Alert message=message variant=n.variant /> }
        })
    }
}
