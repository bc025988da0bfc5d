use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button.
///
/// Keystrokes update a local signal immediately; `on_change` fires only
/// after the input has been quiet for the debounce window. A generation
/// counter discards callbacks superseded by later keystrokes.
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_gen = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let gen = debounce_gen.get_value() + 1;
        debounce_gen.set_value(gen);

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_gen.get_value() == gen {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounce_gen.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=clear_filter
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
