use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::session::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
