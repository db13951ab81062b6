use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-emerald-500 to-teal-500 text-white hover:from-emerald-600 hover:to-teal-600 hover:shadow-lg hover:shadow-emerald-500/25 focus:ring-emerald-500",
            Self::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
            Self::Danger => "border border-red-500/40 text-red-400 hover:bg-red-500/10 focus:ring-red-500",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950 disabled:opacity-50 disabled:cursor-not-allowed";

/// Submit button that swaps to a spinner while `loading` is set.
#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: Signal<&'static str>,
) -> impl IntoView {
    let classes = format!("{} {}", BASE_CLASSES, variant.classes());

    view! {
        <button type="submit" class=classes disabled=move || loading.get()>
            {move || {
                if loading.get() {
                    view! {
                        <span class="flex items-center justify-center gap-2">
                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                            {loading_text.get()}
                        </span>
                    }
                    .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}

/// A link styled like [`Button`].
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <a href=href class=format!("{} {}", BASE_CLASSES, variant.classes())>
            {children()}
        </a>
    }
}
