use chrono::NaiveDate;
use contracts::domain::mentor_feedback::{MentorFeedback, MentorFeedbackCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::mentor_feedback::api;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;

/// Training tab: mentor feedback entries, newest first.
#[component]
pub fn TrainingTab(emp_id: i64) -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<MentorFeedback>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_for_employee(emp_id).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.date.cmp(&a.date));
                    set_entries.set(list);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let trainer_name = RwSignal::new(String::new());
    let (date_text, set_date_text) = signal(String::new());
    let text = RwSignal::new(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let add = move |_| {
        let trainer_val = trainer_name.get().trim().to_string();
        let text_val = text.get().trim().to_string();
        if trainer_val.is_empty() || text_val.is_empty() {
            set_form_error.set(Some("Trainer name and feedback are required".to_string()));
            return;
        }
        let date = match NaiveDate::parse_from_str(date_text.get().trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_form_error.set(Some("Select the feedback date".to_string()));
                return;
            }
        };

        set_form_error.set(None);
        spawn_local(async move {
            let request = MentorFeedbackCreate {
                emp_id,
                mentor_feedback: text_val,
                date,
                trainer_name: trainer_val,
            };
            match api::create(&request).await {
                Ok(_) => {
                    trainer_name.set(String::new());
                    text.set(String::new());
                    load();
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
        });
    };

    let remove = move |feedback_id: i64| {
        spawn_local(async move {
            match api::delete(feedback_id).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="tab-panel">
            <h3>"Mentor feedback"</h3>
            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <div class="form-grid">
                <div class="form-group">
                    <Label>"Trainer"</Label>
                    <Input value=trainer_name />
                </div>
                <div class="form-group">
                    <Label>"Date"</Label>
                    <input
                        type="date"
                        prop:value=move || date_text.get()
                        on:input=move |ev| set_date_text.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group--wide">
                    <Label>"Feedback"</Label>
                    <Textarea value=text />
                </div>
            </div>
            <ErrorBox message=Signal::derive(move || form_error.get()) />
            <Button appearance=ButtonAppearance::Primary on_click=add>
                "Add feedback"
            </Button>

            <ul class="feedback-list">
                <For
                    each=move || entries.get()
                    key=|f| f.mentor_feedback_id
                    children=move |f| {
                        let feedback_id = f.mentor_feedback_id;
                        view! {
                            <li class="feedback-list__item">
                                <div class="feedback-list__meta">
                                    <strong>{f.trainer_name.clone()}</strong>
                                    <span>{format_naive_date(&f.date)}</span>
                                    <button
                                        class="icon-button"
                                        title="Delete feedback"
                                        on:click=move |_| remove(feedback_id)
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                                <p>{f.mentor_feedback.clone()}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
