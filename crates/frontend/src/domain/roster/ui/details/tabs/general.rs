use chrono::NaiveDate;
use contracts::domain::employee::{CandidateUpdate, EmployeeDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::roster::api;
use crate::shared::components::status::ErrorBox;
use crate::shared::date_utils::{format_naive_date, format_opt_date};
use crate::shared::icons::icon;

/// General tab: profile fields, a partial-update form and the remarks list.
#[component]
pub fn GeneralTab(
    #[prop(into)] detail: Signal<Option<EmployeeDetail>>,
    /// Asks the parent page to refetch the profile after a mutation
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let level = RwSignal::new(String::new());
    let base_location = RwSignal::new(String::new());
    let (bench_end_text, set_bench_end_text) = signal(String::new());
    let (is_deployable, set_is_deployable) = signal(false);
    let (show_edit, set_show_edit) = signal(false);

    let open_edit = move |_| {
        if let Some(d) = detail.get() {
            level.set(d.employee.level.clone());
            base_location.set(d.employee.base_location.clone());
            set_bench_end_text.set(
                d.employee
                    .bench_end_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            );
            set_is_deployable.set(d.employee.is_deployable);
            set_show_edit.set(true);
        }
    };

    let save = move |_| {
        let Some(d) = detail.get() else {
            return;
        };
        let emp_id = d.employee.emp_id;

        let bench_end = {
            let raw = bench_end_text.get();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => {
                        set_error.set(Some("Bench end date must be a valid date".to_string()));
                        return;
                    }
                }
            }
        };

        let update = CandidateUpdate {
            level: Some(level.get().trim().to_string()).filter(|s| !s.is_empty()),
            base_location: Some(base_location.get().trim().to_string()).filter(|s| !s.is_empty()),
            is_deployable: Some(is_deployable.get()),
            bench_end_date: bench_end,
            ..Default::default()
        };

        set_is_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_candidate(emp_id, &update).await {
                Ok(_) => {
                    set_show_edit.set(false);
                    on_refresh.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    let remark_text = RwSignal::new(String::new());
    let (remark_error, set_remark_error) = signal(Option::<String>::None);

    let add_remark = move |_| {
        let Some(d) = detail.get() else {
            return;
        };
        let emp_id = d.employee.emp_id;
        let text = remark_text.get().trim().to_string();
        if text.is_empty() {
            set_remark_error.set(Some("Remark text is required".to_string()));
            return;
        }

        set_remark_error.set(None);
        spawn_local(async move {
            match api::post_remark(emp_id, text).await {
                Ok(_) => {
                    remark_text.set(String::new());
                    on_refresh.run(());
                }
                Err(e) => set_remark_error.set(Some(e.to_string())),
            }
        });
    };

    let delete_remark = move |remark_id: i64| {
        spawn_local(async move {
            match api::delete_remark(remark_id).await {
                Ok(()) => on_refresh.run(()),
                Err(e) => set_remark_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="tab-panel">
            <ErrorBox message=Signal::derive(move || error.get()) />

            {move || detail.get().map(|d| {
                let e = d.employee.clone();
                view! {
                    <div class="field-grid">
                        <div class="field"><span class="field__label">"Email"</span>{e.email.clone().unwrap_or_default()}</div>
                        <div class="field"><span class="field__label">"Department"</span>{e.department_name.clone()}</div>
                        <div class="field"><span class="field__label">"Primary skill"</span>{e.primary_skill.clone()}</div>
                        <div class="field"><span class="field__label">"Secondary skill"</span>{e.secondary_skill.clone().unwrap_or_default()}</div>
                        <div class="field"><span class="field__label">"Bench start"</span>{format_naive_date(&e.bench_start_date)}</div>
                        <div class="field"><span class="field__label">"Bench end"</span>{format_opt_date(&e.bench_end_date)}</div>
                        <div class="field"><span class="field__label">"Aging"</span>{format!("{} days", e.aging_days)}</div>
                        <div class="field"><span class="field__label">"Deployable"</span>{if e.is_deployable { "Yes" } else { "No" }}</div>
                    </div>
                }
            })}

            <Show
                when=move || show_edit.get()
                fallback=move || view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=open_edit>
                        "Edit"
                    </Button>
                }
            >
                <div class="edit-form">
                    <div class="form-grid">
                        <div class="form-group">
                            <Label>"Level"</Label>
                            <Input value=level />
                        </div>
                        <div class="form-group">
                            <Label>"Location"</Label>
                            <Input value=base_location />
                        </div>
                        <div class="form-group">
                            <Label>"Bench end date"</Label>
                            <input
                                type="date"
                                prop:value=move || bench_end_text.get()
                                on:input=move |ev| set_bench_end_text.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_deployable.get()
                                    on:change=move |ev| set_is_deployable.set(event_target_checked(&ev))
                                />
                                "Deployable"
                            </label>
                        </div>
                    </div>
                    <div class="form-row">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || is_saving.get())
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| set_show_edit.set(false)
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>

            <h3>"Remarks"</h3>
            <ErrorBox message=Signal::derive(move || remark_error.get()) />
            <div class="form-row">
                <Input value=remark_text placeholder="Add a remark..." />
                <Button appearance=ButtonAppearance::Primary on_click=add_remark>
                    "Add"
                </Button>
            </div>
            <ul class="remark-list">
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            d.remarks
                                .iter()
                                .map(|r| {
                                    let remark_id = r.remark_id;
                                    view! {
                                        <li class="remark-list__item">
                                            <span>{r.text.clone()}</span>
                                            <button
                                                class="icon-button"
                                                title="Delete remark"
                                                on:click=move |_| delete_remark(remark_id)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </ul>
        </div>
    }
}
