use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="page page--system">
            <div class="unauthorized-box">
                <h1>"Access denied"</h1>
                <p>"This area is limited to administrators."</p>
                <A href="/home">"Back to the roster"</A>
            </div>
        </div>
    }
}
