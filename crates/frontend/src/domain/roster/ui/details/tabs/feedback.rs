use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::interviews;
use crate::domain::mentor_feedback::api as mentor_api;
use crate::domain::mentor_feedback::parse::{parse_feedback, ParsedFeedback};
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::date_utils::format_date;

/// Feedback tab: one timeline of everything that was said about the
/// candidate. Mentor feedback and interview round notes are fetched as two
/// independent slices; each free-text entry goes through the legacy
/// `parse_feedback` adapter to recover a date where one is embedded.
#[component]
pub fn FeedbackTab(emp_id: i64) -> impl IntoView {
    let (mentor_entries, set_mentor_entries) = signal(Vec::<ParsedFeedback>::new());
    let (mentor_loading, set_mentor_loading) = signal(false);
    let (mentor_error, set_mentor_error) = signal(Option::<String>::None);

    let (interview_entries, set_interview_entries) = signal(Vec::<ParsedFeedback>::new());
    let (interview_loading, set_interview_loading) = signal(false);
    let (interview_error, set_interview_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        set_mentor_loading.set(true);
        spawn_local(async move {
            match mentor_api::fetch_for_employee(emp_id).await {
                Ok(list) => {
                    let parsed = list
                        .iter()
                        .map(|f| parse_feedback(&f.mentor_feedback))
                        .collect();
                    set_mentor_entries.set(parsed);
                }
                Err(e) => set_mentor_error.set(Some(e.to_string())),
            }
            set_mentor_loading.set(false);
        });

        set_interview_loading.set(true);
        spawn_local(async move {
            let cycles = match interviews::api::fetch_cycles(emp_id).await {
                Ok(cycles) => cycles,
                Err(e) => {
                    set_interview_error.set(Some(e.to_string()));
                    set_interview_loading.set(false);
                    return;
                }
            };

            let mut parsed = Vec::new();
            for cycle in &cycles {
                match interviews::api::fetch_cycle_rounds(cycle.cycle_id).await {
                    Ok(rounds) => {
                        parsed.extend(
                            rounds
                                .iter()
                                .filter_map(|r| r.detailed_feedback.as_deref())
                                .map(parse_feedback),
                        );
                    }
                    Err(e) => {
                        set_interview_error.set(Some(e.to_string()));
                        break;
                    }
                }
            }
            set_interview_entries.set(parsed);
            set_interview_loading.set(false);
        });
    });

    // dated entries first, newest on top; undated entries keep their order
    let timeline = Memo::new(move |_| {
        let mut all: Vec<ParsedFeedback> = mentor_entries.get();
        all.extend(interview_entries.get());
        all.sort_by(|a, b| match (&b.date, &a.date) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        all
    });

    view! {
        <div class="tab-panel">
            <h3>"Feedback timeline"</h3>
            <ErrorBox message=Signal::derive(move || mentor_error.get()) />
            <ErrorBox message=Signal::derive(move || interview_error.get()) />
            <LoadingIndicator loading=Signal::derive(move || {
                mentor_loading.get() || interview_loading.get()
            }) />

            <ul class="feedback-list">
                {move || {
                    timeline
                        .get()
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="feedback-list__item">
                                    <div class="feedback-list__meta">
                                        <span>
                                            {entry
                                                .date
                                                .as_deref()
                                                .map(format_date)
                                                .unwrap_or_else(|| "undated".to_string())}
                                        </span>
                                    </div>
                                    <p>{entry.text.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
