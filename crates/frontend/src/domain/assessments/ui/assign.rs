use std::collections::BTreeSet;

use contracts::domain::assessment::AssignAssessmentRequest;
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::assessments::api;
use crate::domain::roster;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};

/// Admin-only: assign an assessment topic to selected bench employees.
#[component]
pub fn AssignAssessmentPage() -> impl IntoView {
    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let topic = RwSignal::new(String::new());
    let (selected, set_selected) = signal(BTreeSet::<i64>::new());
    let (is_saving, set_is_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    Effect::new(move |_| {
        set_is_loading.set(true);
        spawn_local(async move {
            match roster::api::fetch_bench_details().await {
                Ok(list) => set_employees.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    });

    let toggle = move |emp_id: i64| {
        set_selected.update(|set| {
            if !set.remove(&emp_id) {
                set.insert(emp_id);
            }
        });
    };

    let submit = move |_| {
        let topic_val = topic.get().trim().to_string();
        let emp_ids: Vec<i64> = selected.get().iter().copied().collect();

        if topic_val.is_empty() {
            set_form_error.set(Some("Enter an assessment topic".to_string()));
            return;
        }
        if emp_ids.is_empty() {
            set_form_error.set(Some("Select at least one employee".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_form_error.set(None);
        set_notice.set(None);

        spawn_local(async move {
            let request = AssignAssessmentRequest {
                topic: topic_val,
                emp_ids,
            };
            match api::assign_assessment(&request).await {
                Ok(confirmation) => {
                    set_notice.set(Some(confirmation));
                    set_selected.set(BTreeSet::new());
                    topic.set(String::new());
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page page--wide">
            <PageHeader title="Assign assessment" icon_name="report" />

            <div class="form-row">
                <Input value=topic placeholder="Assessment topic" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || is_saving.get())
                >
                    {move || {
                        let count = selected.get().len();
                        if is_saving.get() {
                            "Assigning...".to_string()
                        } else if count > 0 {
                            format!("Assign to {} selected", count)
                        } else {
                            "Assign".to_string()
                        }
                    }}
                </Button>
            </div>

            <ErrorBox message=Signal::derive(move || form_error.get()) />
            {move || notice.get().map(|msg| view! {
                <div class="notice-box">{msg}</div>
            })}

            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Emp ID"</th>
                        <th>"Name"</th>
                        <th>"Primary skill"</th>
                        <th>"Level"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || employees.get()
                        key=|e| e.emp_id
                        children=move |e| {
                            let emp_id = e.emp_id;
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.get().contains(&emp_id)
                                            on:change=move |_| toggle(emp_id)
                                        />
                                    </td>
                                    <td>{e.emp_id}</td>
                                    <td>{e.name.clone()}</td>
                                    <td>{e.primary_skill.clone()}</td>
                                    <td>{e.level.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
