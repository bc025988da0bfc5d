use contracts::system::auth::TrainerEmail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::system::session::api;

/// Admin-only management of the trainer email whitelist. Trainers can only
/// sign in when their email is on this list; the backend enforces that, we
/// just maintain the list.
#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let (emails, set_emails) = signal(Vec::<TrainerEmail>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let new_email = RwSignal::new(String::new());
    let (is_saving, set_is_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (form_notice, set_form_notice) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_trainer_emails().await {
                Ok(list) => {
                    set_emails.set(list);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    let add_email = move |_| {
        let email_val = new_email.get();
        let trimmed = email_val.trim().to_string();

        if trimmed.is_empty() || !trimmed.contains('@') {
            set_form_error.set(Some("Enter a valid email address".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_form_error.set(None);
        set_form_notice.set(None);

        spawn_local(async move {
            match api::add_trainer_email(&trimmed).await {
                Ok(confirmation) => {
                    new_email.set(String::new());
                    set_form_notice.set(Some(confirmation));
                    set_is_saving.set(false);
                    load();
                }
                Err(e) => {
                    set_form_error.set(Some(e.to_string()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--system">
            <PageHeader title="Manage trainers" icon_name="users" />

            <div class="form-row">
                <Input value=new_email placeholder="trainer@company.com" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=add_email
                    disabled=Signal::derive(move || is_saving.get())
                >
                    "Add trainer email"
                </Button>
            </div>
            <ErrorBox message=Signal::derive(move || form_error.get()) />
            {move || form_notice.get().map(|msg| view! {
                <div class="notice-box">{msg}</div>
            })}

            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Trainer email"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || emails.get()
                        key=|e| e.id
                        children=move |e| {
                            view! {
                                <tr>
                                    <td>{e.id}</td>
                                    <td>{e.email.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
