use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::session::context::{do_logout, use_session};
use crate::system::session::guard::can_manage;

/// Top navigation. Rendered only for signed-in users; the privileged
/// entries (Manage Users, Assign Assessment) are visible to admins only.
#[component]
pub fn AppHeader() -> impl IntoView {
    let (session, set_session) = use_session();

    view! {
        <Show when=move || session.get().is_signed_in()>
            <header class="app-header">
                <div class="app-header__brand">
                    {icon("users")}
                    <span>"Bench Management"</span>
                </div>
                <nav class="app-header__nav">
                    <A href="/home">"Roster"</A>
                    <A href="/reports/bench">"Bench report"</A>
                    <A href="/reports/analytics">"Analytics"</A>
                    <A href="/assessmentcomp">"Assessments"</A>
                    <Show when=move || can_manage(session.get().role)>
                        <A href="/assign-assessment">"Assign assessment"</A>
                        <A href="/manage-users">"Manage users"</A>
                    </Show>
                </nav>
                <div class="app-header__right">
                    {move || session.get().role.map(|role| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {role.as_str()}
                        </Badge>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| do_logout(set_session)
                    >
                        {icon("logout")}
                        " Sign out"
                    </Button>
                </div>
            </header>
        </Show>
    }
}
