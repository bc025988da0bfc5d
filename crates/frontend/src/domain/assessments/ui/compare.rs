use contracts::domain::assessment::{AssessmentScore, TopicReportRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::analytics::api as analytics_api;
use crate::domain::assessments::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};

/// Assessment comparison. Two levels: the main-topic report lists the
/// topics with cohort aggregates; selecting a topic clears the previous
/// selection and triggers the dependent per-employee score fetch. Stale
/// responses from an abandoned selection are dropped by generation.
#[component]
pub fn AssessmentComparePage() -> impl IntoView {
    let main_topic = RwSignal::new(String::new());

    let (report_rows, set_report_rows) = signal(Vec::<TopicReportRow>::new());
    let (report_loading, set_report_loading) = signal(false);
    let (report_error, set_report_error) = signal(Option::<String>::None);

    let (selected_topic, set_selected_topic) = signal(Option::<String>::None);

    let (topic_summary, set_topic_summary) = signal(Option::<TopicReportRow>::None);
    let (scores, set_scores) = signal(Vec::<AssessmentScore>::new());
    let (scores_loading, set_scores_loading) = signal(false);
    let (scores_error, set_scores_error) = signal(Option::<String>::None);

    let report_gen = StoredValue::new(0u64);
    let load_report = move |_| {
        let main_val = main_topic.get().trim().to_string();
        if main_val.is_empty() {
            set_report_error.set(Some("Enter a main topic, e.g. Backend".to_string()));
            return;
        }

        let gen = report_gen.get_value() + 1;
        report_gen.set_value(gen);

        set_report_loading.set(true);
        set_report_error.set(None);
        set_selected_topic.set(None);

        spawn_local(async move {
            let result = analytics_api::fetch_main_topic_report(&main_val).await;
            if report_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(rows) => {
                    set_report_rows.set(rows);
                    set_report_loading.set(false);
                }
                Err(e) => {
                    set_report_error.set(Some(e.to_string()));
                    set_report_loading.set(false);
                }
            }
        });
    };

    // dependent fetch: per-employee scores plus the topic aggregate, issued
    // in parallel when the selection changes
    let scores_gen = StoredValue::new(0u64);
    Effect::new(move |_| {
        let topic = selected_topic.get();

        let gen = scores_gen.get_value() + 1;
        scores_gen.set_value(gen);

        set_scores.set(Vec::new());
        set_topic_summary.set(None);
        set_scores_error.set(None);
        set_scores_loading.set(false);

        let Some(topic) = topic else {
            return;
        };

        set_scores_loading.set(true);

        let topic_for_scores = topic.clone();
        spawn_local(async move {
            let result = api::fetch_scores_by_topic(topic_for_scores).await;
            if scores_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(list) => {
                    set_scores.set(list);
                    set_scores_loading.set(false);
                }
                Err(e) => {
                    set_scores_error.set(Some(e.to_string()));
                    set_scores_loading.set(false);
                }
            }
        });

        spawn_local(async move {
            let result = analytics_api::fetch_topic_report(&topic).await;
            if scores_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(rows) => set_topic_summary.set(rows.into_iter().next()),
                Err(e) => log::warn!("topic summary unavailable: {}", e),
            }
        });
    });

    view! {
        <div class="page page--wide">
            <PageHeader title="Assessment comparison" icon_name="chart" />

            <div class="form-row">
                <Input value=main_topic placeholder="Main topic, e.g. Backend" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=load_report
                    disabled=Signal::derive(move || report_loading.get())
                >
                    "Load report"
                </Button>
            </div>

            <ErrorBox message=Signal::derive(move || report_error.get()) />
            <LoadingIndicator loading=Signal::derive(move || report_loading.get()) />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Topic"</th>
                        <th>"Assessed employees"</th>
                        <th>"Average score"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || report_rows.get()
                        key=|r| r.topic.clone()
                        children=move |r| {
                            let topic_for_select = r.topic.clone();
                            let topic_for_class = r.topic.clone();
                            view! {
                                <tr
                                    class=move || {
                                        if selected_topic.get().as_deref()
                                            == Some(topic_for_class.as_str())
                                        {
                                            "data-table__row data-table__row--clickable \
                                             data-table__row--selected"
                                        } else {
                                            "data-table__row data-table__row--clickable"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_selected_topic.set(Some(topic_for_select.clone()))
                                    }
                                >
                                    <td>{r.topic.clone()}</td>
                                    <td>{r.emp_count}</td>
                                    <td>{format!("{:.1}", r.average_score)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || selected_topic.get().is_some()>
                <h3>
                    {move || format!(
                        "Scores for {}",
                        selected_topic.get().unwrap_or_default()
                    )}
                </h3>
                {move || topic_summary.get().map(|summary| view! {
                    <p class="muted">
                        {format!(
                            "{} employees assessed, cohort average {:.1}",
                            summary.emp_count,
                            summary.average_score
                        )}
                    </p>
                })}

                <ErrorBox message=Signal::derive(move || scores_error.get()) />
                <LoadingIndicator loading=Signal::derive(move || scores_loading.get()) />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Emp ID"</th>
                            <th>"Name"</th>
                            <th>"Subtopic"</th>
                            <th>"Marks"</th>
                            <th>"Cohort average"</th>
                            <th>"vs average"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || scores.get()
                            key=|s| (s.assessment_id, s.emp_id)
                            children=move |s| {
                                let delta = s.marks - s.average_marks;
                                let delta_class = if delta >= 0.0 {
                                    "score-delta score-delta--up"
                                } else {
                                    "score-delta score-delta--down"
                                };
                                view! {
                                    <tr>
                                        <td>{s.emp_id}</td>
                                        <td>{s.name.clone()}</td>
                                        <td>{s.subtopic_name.clone().unwrap_or_default()}</td>
                                        <td>{format!("{:.1}", s.marks)}</td>
                                        <td>{format!("{:.1}", s.average_marks)}</td>
                                        <td class=delta_class>{format!("{:+.1}", delta)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
