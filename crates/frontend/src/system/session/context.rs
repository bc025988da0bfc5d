use contracts::system::auth::Role;
use leptos::prelude::*;

use super::{api, storage};

/// The one session object visible to the application. Token and role are
/// only ever written through `do_login`/`do_logout`; everything else reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Rebuild the session from persisted storage at startup. Both token and
/// role must be present, otherwise the session is absent.
fn initial_session() -> SessionState {
    match (storage::get_token(), storage::get_role()) {
        (Some(token), Some(role)) => SessionState {
            token: Some(token),
            role: Some(role),
        },
        _ => SessionState::default(),
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(initial_session());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Perform login against the endpoint matching the chosen role, persist the
/// session keys and publish the new state.
pub async fn do_login(
    email: String,
    password: String,
    role: Role,
    set_session: WriteSignal<SessionState>,
) -> Result<(), String> {
    let response = match role {
        Role::Admin => api::admin_login(email, password).await?,
        Role::Trainer => api::trainer_login(email, password).await?,
    };

    storage::save_session(&response.token, &response.refresh_token, response.role);

    set_session.set(SessionState {
        token: Some(response.token),
        role: Some(response.role),
    });

    Ok(())
}

/// Clear the session and return to the sign-in entry point. The hard
/// navigation also resets all per-page state.
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());

    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/signin");
    }
}
