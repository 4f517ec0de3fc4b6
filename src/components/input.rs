use crate::form::{Field, FormVariant};
use leptos::*;

#[component]
pub fn Input(
    field: Field,
    variant: FormVariant,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get());
    let has_error = move || error.with(Option::is_some);

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium leading-6 text-gray-900">
                {field.label()}
            </label>
            <div class="mt-2">
                <input
                    id=field.id()
                    name=field.id()
                    type=field.input_type()
                    autocomplete=field.autocomplete(variant)
                    class="form-input block w-full rounded-md border-0 py-1.5 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-inset focus:ring-sky-600 sm:text-sm sm:leading-6"
                    class:ring-rose-500=has_error
                    class:opacity-50=move || disabled.get()
                    aria-invalid=move || has_error().to_string()
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
            <Show when=has_error fallback=|| ()>
                <p class="mt-1 text-sm text-rose-500">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
