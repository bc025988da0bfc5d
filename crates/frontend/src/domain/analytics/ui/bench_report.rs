use chrono::NaiveDate;
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::roster::api;
use crate::domain::roster::report::report_filename;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::date_utils::{format_naive_date, format_opt_date};
use crate::shared::export::download_csv;
use crate::shared::icons::icon;

/// Bench-end report: employees leaving the bench inside a date range, with
/// client-generated CSV export.
#[component]
pub fn BenchReportPage() -> impl IntoView {
    let (start_text, set_start_text) = signal(String::new());
    let (end_text, set_end_text) = signal(String::new());

    let (rows, set_rows) = signal(Vec::<Employee>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    // the range the current rows were fetched for, used in the filename
    let fetched_range = StoredValue::new(Option::<(NaiveDate, NaiveDate)>::None);

    let parse_range = move || -> Result<(NaiveDate, NaiveDate), String> {
        let start = NaiveDate::parse_from_str(start_text.get().trim(), "%Y-%m-%d")
            .map_err(|_| "Select a start date".to_string())?;
        let end = NaiveDate::parse_from_str(end_text.get().trim(), "%Y-%m-%d")
            .map_err(|_| "Select an end date".to_string())?;
        if end < start {
            return Err("End date must not be before the start date".to_string());
        }
        Ok((start, end))
    };

    let load_gen = StoredValue::new(0u64);
    let run_report = move |_| {
        let (start, end) = match parse_range() {
            Ok(range) => range,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        let gen = load_gen.get_value() + 1;
        load_gen.set_value(gen);

        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_by_bench_end_range(start, end).await;
            if load_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(list) => {
                    set_rows.set(list);
                    fetched_range.set_value(Some((start, end)));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let export = move |_| {
        let Some((start, end)) = fetched_range.get_value() else {
            set_error.set(Some("Run the report before exporting".to_string()));
            return;
        };
        let list = rows.get();
        if let Err(msg) = download_csv(&list, &report_filename(start, end)) {
            set_error.set(Some(msg));
        }
    };

    view! {
        <div class="page page--wide">
            <PageHeader title="Bench report" icon_name="report">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=export
                    disabled=Signal::derive(move || rows.get().is_empty())
                >
                    {icon("download")}
                    " Export CSV"
                </Button>
            </PageHeader>

            <div class="form-row">
                <div class="form-group">
                    <Label>"Bench end from"</Label>
                    <input
                        type="date"
                        prop:value=move || start_text.get()
                        on:input=move |ev| set_start_text.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <Label>"Bench end to"</Label>
                    <input
                        type="date"
                        prop:value=move || end_text.get()
                        on:input=move |ev| set_end_text.set(event_target_value(&ev))
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=run_report
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {move || if is_loading.get() { "Running..." } else { "Run report" }}
                </Button>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Emp ID"</th>
                        <th>"Name"</th>
                        <th>"Department"</th>
                        <th>"Email"</th>
                        <th>"Bench start"</th>
                        <th>"Bench end"</th>
                        <th>"Location"</th>
                        <th>"Primary skill"</th>
                        <th>"Level"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|e| e.emp_id
                        children=move |e| view! {
                            <tr>
                                <td>{e.emp_id}</td>
                                <td>{e.name.clone()}</td>
                                <td>{e.department_name.clone()}</td>
                                <td>{e.email.clone().unwrap_or_default()}</td>
                                <td>{format_naive_date(&e.bench_start_date)}</td>
                                <td>{format_opt_date(&e.bench_end_date)}</td>
                                <td>{e.base_location.clone()}</td>
                                <td>{e.primary_skill.clone()}</td>
                                <td>{e.level.clone()}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
