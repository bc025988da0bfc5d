use contracts::analytics::{AgingBucket, BenchSeriesPoint, StatusCount, TopPerformer};
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::analytics::api::{self, SeriesGranularity};
use crate::domain::analytics::buckets;
use crate::domain::roster;
use crate::shared::components::bar_chart::{BarChart, BarDatum};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::icons::icon;

/// Analytics dashboard: status distribution, aging buckets with drill-down,
/// bench headcount series, skill-gap view and the assessment leaderboard.
///
/// Five independent slices are fetched in parallel on mount; each keeps its
/// own loading/error state so one failure never blanks the page.
#[component]
pub fn AnalyticsDashboardPage() -> impl IntoView {
    // status distribution slice
    let (status_counts, set_status_counts) = signal(Vec::<StatusCount>::new());
    let (status_loading, set_status_loading) = signal(false);
    let (status_error, set_status_error) = signal(Option::<String>::None);

    // aging buckets slice
    let (aging_buckets, set_aging_buckets) = signal(Vec::<AgingBucket>::new());
    let (aging_loading, set_aging_loading) = signal(false);
    let (aging_error, set_aging_error) = signal(Option::<String>::None);

    // roster slice, for skill-gap and aging drill-down
    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (employees_error, set_employees_error) = signal(Option::<String>::None);

    // leaderboard slice
    let (top_performers, set_top_performers) = signal(Vec::<TopPerformer>::new());
    let (top_error, set_top_error) = signal(Option::<String>::None);

    // bench series slice, refetched when granularity changes
    let (series, set_series) = signal(Vec::<BenchSeriesPoint>::new());
    let (series_loading, set_series_loading) = signal(false);
    let (series_error, set_series_error) = signal(Option::<String>::None);
    let (granularity, set_granularity) = signal(SeriesGranularity::Monthly);

    let (selected_bucket, set_selected_bucket) = signal(Option::<String>::None);

    Effect::new(move |_| {
        set_status_loading.set(true);
        spawn_local(async move {
            match api::fetch_status_distribution().await {
                Ok(data) => set_status_counts.set(data),
                Err(e) => set_status_error.set(Some(e.to_string())),
            }
            set_status_loading.set(false);
        });

        set_aging_loading.set(true);
        spawn_local(async move {
            match api::fetch_aging_analysis().await {
                Ok(data) => set_aging_buckets.set(data),
                Err(e) => set_aging_error.set(Some(e.to_string())),
            }
            set_aging_loading.set(false);
        });

        spawn_local(async move {
            match roster::api::fetch_bench_details().await {
                Ok(data) => set_employees.set(data),
                Err(e) => set_employees_error.set(Some(e.to_string())),
            }
        });

        spawn_local(async move {
            match api::fetch_top_performers().await {
                Ok(data) => set_top_performers.set(data),
                Err(e) => set_top_error.set(Some(e.to_string())),
            }
        });
    });

    // the previous in-flight series request is not cancelled when the
    // granularity flips, so stale responses are dropped by generation
    let series_gen = StoredValue::new(0u64);
    Effect::new(move |_| {
        let current = granularity.get();
        let gen = series_gen.get_value() + 1;
        series_gen.set_value(gen);

        set_series_loading.set(true);
        set_series_error.set(None);

        spawn_local(async move {
            let result = api::fetch_bench_series(current).await;
            if series_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(data) => {
                    set_series.set(data);
                    set_series_loading.set(false);
                }
                Err(e) => {
                    set_series_error.set(Some(e.to_string()));
                    set_series_loading.set(false);
                }
            }
        });
    });

    let status_data = Memo::new(move |_| {
        status_counts
            .get()
            .iter()
            .map(|s| BarDatum::new(s.status.clone(), s.count))
            .collect::<Vec<_>>()
    });

    let aging_data = Memo::new(move |_| {
        aging_buckets
            .get()
            .iter()
            .map(|b| BarDatum::new(b.label.clone(), b.count))
            .collect::<Vec<_>>()
    });

    let series_data = Memo::new(move |_| {
        series
            .get()
            .iter()
            .map(|p| BarDatum::new(p.period.clone(), p.count))
            .collect::<Vec<_>>()
    });

    // skill gap: client-side group-by over the roster snapshot
    let skill_data = Memo::new(move |_| {
        let list = employees.get();
        buckets::group_by_count(&list, |e| e.primary_skill.as_str())
            .into_iter()
            .map(|(label, count)| BarDatum::new(label, count))
            .collect::<Vec<_>>()
    });

    // aging drill-down re-derives numeric bounds from the bucket label
    let drilldown = Memo::new(move |_| {
        let Some(label) = selected_bucket.get() else {
            return Vec::new();
        };
        if buckets::AgingRange::parse(&label).is_none() {
            log::warn!("unrecognized aging bucket label: {}", label);
            return Vec::new();
        }
        let list = employees.get();
        buckets::employees_in_bucket(&list, &label)
            .into_iter()
            .cloned()
            .collect::<Vec<Employee>>()
    });

    let on_bucket_select = Callback::new(move |label: String| {
        set_selected_bucket.update(|current| {
            if current.as_deref() == Some(label.as_str()) {
                *current = None;
            } else {
                *current = Some(label);
            }
        });
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Bench analytics" icon_name="chart" />

            <div class="dashboard-grid">
                <section class="dashboard-card">
                    <h2>"Status distribution"</h2>
                    <ErrorBox message=Signal::derive(move || status_error.get()) />
                    <LoadingIndicator loading=Signal::derive(move || status_loading.get()) />
                    <BarChart data=Signal::derive(move || status_data.get()) />
                </section>

                <section class="dashboard-card">
                    <h2>"Bench aging"</h2>
                    <ErrorBox message=Signal::derive(move || aging_error.get()) />
                    <LoadingIndicator loading=Signal::derive(move || aging_loading.get()) />
                    <BarChart
                        data=Signal::derive(move || aging_data.get())
                        on_select=on_bucket_select
                        selected=Signal::derive(move || selected_bucket.get())
                    />
                    <Show when=move || selected_bucket.get().is_some()>
                        <h3>
                            {move || format!(
                                "Employees in bucket {}",
                                selected_bucket.get().unwrap_or_default()
                            )}
                        </h3>
                        <ErrorBox message=Signal::derive(move || employees_error.get()) />
                        <table class="data-table data-table--compact">
                            <thead>
                                <tr>
                                    <th>"Emp ID"</th>
                                    <th>"Name"</th>
                                    <th>"Primary skill"</th>
                                    <th>"Aging (days)"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || drilldown.get()
                                    key=|e| e.emp_id
                                    children=move |e| view! {
                                        <tr>
                                            <td>{e.emp_id}</td>
                                            <td>{e.name.clone()}</td>
                                            <td>{e.primary_skill.clone()}</td>
                                            <td>{e.aging_days}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </section>

                <section class="dashboard-card">
                    <h2>"Bench headcount"</h2>
                    <div class="form-row">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || {
                                granularity.get() == SeriesGranularity::Daily
                            })
                            on_click=move |_| set_granularity.set(SeriesGranularity::Daily)
                        >
                            "Daily"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || {
                                granularity.get() == SeriesGranularity::Monthly
                            })
                            on_click=move |_| set_granularity.set(SeriesGranularity::Monthly)
                        >
                            "Monthly"
                        </Button>
                    </div>
                    <ErrorBox message=Signal::derive(move || series_error.get()) />
                    <LoadingIndicator loading=Signal::derive(move || series_loading.get()) />
                    <BarChart data=Signal::derive(move || series_data.get()) />
                </section>

                <section class="dashboard-card">
                    <h2>"Primary skills on bench"</h2>
                    <ErrorBox message=Signal::derive(move || employees_error.get()) />
                    <BarChart data=Signal::derive(move || skill_data.get()) />
                </section>

                <section class="dashboard-card">
                    <h2>{icon("award")}" Top performers"</h2>
                    <ErrorBox message=Signal::derive(move || top_error.get()) />
                    <table class="data-table data-table--compact">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Emp ID"</th>
                                <th>"Name"</th>
                                <th>"Primary skill"</th>
                                <th>"Total score"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                top_performers
                                    .get()
                                    .iter()
                                    .enumerate()
                                    .map(|(i, p)| view! {
                                        <tr>
                                            <td>{i + 1}</td>
                                            <td>{p.emp_id}</td>
                                            <td>{p.name.clone()}</td>
                                            <td>{p.primary_skill.clone()}</td>
                                            <td>{format!("{:.1}", p.total_score)}</td>
                                        </tr>
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
