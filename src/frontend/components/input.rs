use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-transparent
                       transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional)] rows: Option<u32>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows=rows.unwrap_or(5)
                required=true
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
        </div>
    }
}

/// Dropdown over `(value, label)` pairs.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    options: Vec<(&'static str, &'static str)>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <select
                id=name.clone()
                name=name
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            >
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
