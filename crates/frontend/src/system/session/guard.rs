use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Whether a role may see the privileged admin surfaces (Manage Users,
/// Assign Assessment, Register).
pub fn can_manage(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

/// Route guard: redirects unauthenticated visitors to sign-in
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_signed_in()
            fallback=|| view! { <Redirect path="/signin" /> }
        >
            {children()}
        </Show>
    }
}

/// Route guard: redirects signed-in non-admins to the unauthorized page
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_signed_in()
            fallback=|| view! { <Redirect path="/signin" /> }
        >
            {
                let children = children.clone();
                view! {
                    <Show
                        when=move || session.get().is_admin()
                        fallback=|| view! { <Redirect path="/unauthorized" /> }
                    >
                        {children()}
                    </Show>
                }
            }
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_privileged_links() {
        assert!(can_manage(Some(Role::Admin)));
    }

    #[test]
    fn test_trainer_and_anonymous_do_not() {
        assert!(!can_manage(Some(Role::Trainer)));
        assert!(!can_manage(None));
    }
}
