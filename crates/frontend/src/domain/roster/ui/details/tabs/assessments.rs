use contracts::domain::assessment::AssessmentScore;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::assessments::api;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};

/// Assessments tab: read-only score table with a marks-vs-average bar per
/// row.
#[component]
pub fn AssessmentsTab(emp_id: i64) -> impl IntoView {
    let (scores, set_scores) = signal(Vec::<AssessmentScore>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_scores_by_emp(emp_id).await {
                Ok(list) => set_scores.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="tab-panel">
            <h3>"Assessment scores"</h3>
            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <Show when=move || !is_loading.get() && scores.get().is_empty() && error.get().is_none()>
                <p class="muted">"No assessments recorded yet."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Topic"</th>
                        <th>"Subtopic"</th>
                        <th>"Marks"</th>
                        <th>"Cohort average"</th>
                        <th>"Total score"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || scores.get()
                        key=|s| s.assessment_id
                        children=move |s| {
                            // bar proportioned against the total, capped at 100%
                            let percent = if s.total_score > 0.0 {
                                (s.marks / s.total_score * 100.0).min(100.0)
                            } else {
                                0.0
                            };
                            let avg_percent = if s.total_score > 0.0 {
                                (s.average_marks / s.total_score * 100.0).min(100.0)
                            } else {
                                0.0
                            };
                            view! {
                                <tr>
                                    <td>{s.topic.clone()}</td>
                                    <td>{s.subtopic_name.clone().unwrap_or_default()}</td>
                                    <td>{format!("{:.1}", s.marks)}</td>
                                    <td>{format!("{:.1}", s.average_marks)}</td>
                                    <td>{format!("{:.1}", s.total_score)}</td>
                                    <td class="score-cell">
                                        <div class="score-cell__track">
                                            <div
                                                class="score-cell__bar"
                                                style=format!("width: {:.0}%;", percent)
                                            ></div>
                                            <div
                                                class="score-cell__avg"
                                                style=format!("left: {:.0}%;", avg_percent)
                                            ></div>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
