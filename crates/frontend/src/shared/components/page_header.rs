use leptos::prelude::*;

use crate::shared::icons::icon;

/// Standard page header: icon + title on the left, action buttons (the
/// children) on the right.
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: String,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {(!icon_name.is_empty()).then(|| icon(icon_name))}
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
