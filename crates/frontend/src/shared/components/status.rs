use leptos::prelude::*;

/// Slice-level error banner. Each data slice renders its own box so one
/// failed fetch never takes the rest of the page down.
#[component]
pub fn ErrorBox(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{msg}</span>
            </div>
        })}
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading-indicator">
                <span>"Loading..."</span>
            </div>
        </Show>
    }
}
