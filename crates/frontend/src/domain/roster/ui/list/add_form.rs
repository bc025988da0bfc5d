use chrono::NaiveDate;
use contracts::domain::employee::{CandidateCreate, Employee};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::roster::api;
use crate::shared::components::status::ErrorBox;

/// Manual-add candidate form. Validation happens before the network call;
/// the backend error message is shown verbatim when the create fails.
#[component]
pub fn AddCandidateForm(
    /// Called with the created employee so the parent can patch its list
    on_created: Callback<Employee>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let primary_skill = RwSignal::new(String::new());
    let secondary_skill = RwSignal::new(String::new());
    let level = RwSignal::new(String::new());
    let base_location = RwSignal::new(String::new());
    let department_name = RwSignal::new(String::new());
    let (bench_start_date, set_bench_start_date) = signal(String::new());
    let (is_deployable, set_is_deployable) = signal(false);

    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let missing_required = move || {
        name.get().trim().is_empty()
            || primary_skill.get().trim().is_empty()
            || level.get().trim().is_empty()
            || base_location.get().trim().is_empty()
            || department_name.get().trim().is_empty()
            || bench_start_date.get().trim().is_empty()
    };

    let submit = move |_| {
        let start = match NaiveDate::parse_from_str(bench_start_date.get().trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_error.set(Some("Bench start date must be a valid date".to_string()));
                return;
            }
        };

        let candidate = CandidateCreate {
            name: name.get().trim().to_string(),
            email: Some(email.get().trim().to_string()).filter(|s| !s.is_empty()),
            primary_skill: primary_skill.get().trim().to_string(),
            secondary_skill: Some(secondary_skill.get().trim().to_string())
                .filter(|s| !s.is_empty()),
            level: level.get().trim().to_string(),
            base_location: base_location.get().trim().to_string(),
            department_name: department_name.get().trim().to_string(),
            bench_start_date: start,
            is_deployable: is_deployable.get(),
        };

        set_is_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_candidate(&candidate).await {
                Ok(created) => {
                    set_is_saving.set(false);
                    on_created.run(created);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="add-candidate-form">
            <h3>"Add candidate"</h3>
            <ErrorBox message=Signal::derive(move || error.get()) />

            <div class="form-grid">
                <div class="form-group">
                    <Label>"Name *"</Label>
                    <Input value=name />
                </div>
                <div class="form-group">
                    <Label>"Email"</Label>
                    <Input value=email />
                </div>
                <div class="form-group">
                    <Label>"Primary skill *"</Label>
                    <Input value=primary_skill />
                </div>
                <div class="form-group">
                    <Label>"Secondary skill"</Label>
                    <Input value=secondary_skill />
                </div>
                <div class="form-group">
                    <Label>"Level *"</Label>
                    <Input value=level placeholder="L1..L5" />
                </div>
                <div class="form-group">
                    <Label>"Location *"</Label>
                    <Input value=base_location />
                </div>
                <div class="form-group">
                    <Label>"Department *"</Label>
                    <Input value=department_name />
                </div>
                <div class="form-group">
                    <Label>"Bench start date *"</Label>
                    <input
                        type="date"
                        prop:value=move || bench_start_date.get()
                        on:input=move |ev| set_bench_start_date.set(event_target_value(&ev))
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
                    on_click=submit
                    disabled=Signal::derive(move || is_saving.get() || missing_required())
                >
                    {move || if is_saving.get() { "Saving..." } else { "Create" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
