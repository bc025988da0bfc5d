use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::session::context::{do_login, use_session};

#[component]
pub fn SignInPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Admin);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let role_val = role.get();

        if email_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(email_val, password_val, role_val, set_session).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate("/home", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Bench Management"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group form-group--inline">
                        <label>
                            <input
                                type="radio"
                                name="role"
                                checked=move || role.get() == Role::Admin
                                on:change=move |_| set_role.set(Role::Admin)
                            />
                            "Admin"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                checked=move || role.get() == Role::Trainer
                                on:change=move |_| set_role.set(Role::Trainer)
                            />
                            "Trainer"
                        </label>
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href="/register">"Register an admin account"</A>
                </div>
            </div>
        </div>
    }
}
