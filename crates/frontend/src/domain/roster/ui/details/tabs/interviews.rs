use chrono::NaiveDate;
use contracts::domain::interview::{
    CycleCreate, InterviewCycle, InterviewRound, RoundCreate, RoundStatus, RoundVerdict,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::interviews::api;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::date_utils::format_naive_date;

/// Interviews tab: cycles on the left, rounds of the selected cycle on the
/// right. Selecting a cycle clears the previous rounds and triggers the
/// dependent fetch; responses for a cycle that is no longer selected are
/// dropped by generation.
#[component]
pub fn InterviewsTab(emp_id: i64) -> impl IntoView {
    let (cycles, set_cycles) = signal(Vec::<InterviewCycle>::new());
    let (cycles_loading, set_cycles_loading) = signal(false);
    let (cycles_error, set_cycles_error) = signal(Option::<String>::None);

    let (selected_cycle, set_selected_cycle) = signal(Option::<i64>::None);

    let (rounds, set_rounds) = signal(Vec::<InterviewRound>::new());
    let (rounds_loading, set_rounds_loading) = signal(false);
    let (rounds_error, set_rounds_error) = signal(Option::<String>::None);

    let load_cycles = move || {
        set_cycles_loading.set(true);
        set_cycles_error.set(None);
        spawn_local(async move {
            match api::fetch_cycles(emp_id).await {
                Ok(list) => set_cycles.set(list),
                Err(e) => set_cycles_error.set(Some(e.to_string())),
            }
            set_cycles_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_cycles();
    });

    let rounds_gen = StoredValue::new(0u64);
    Effect::new(move |_| {
        let cycle_id = selected_cycle.get();

        let gen = rounds_gen.get_value() + 1;
        rounds_gen.set_value(gen);

        set_rounds.set(Vec::new());
        set_rounds_error.set(None);
        set_rounds_loading.set(false);

        let Some(cycle_id) = cycle_id else {
            return;
        };

        set_rounds_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_cycle_rounds(cycle_id).await;
            if rounds_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(list) => {
                    set_rounds.set(list);
                    set_rounds_loading.set(false);
                }
                Err(e) => {
                    set_rounds_error.set(Some(e.to_string()));
                    set_rounds_loading.set(false);
                }
            }
        });
    });

    // --- create cycle form ---
    let client = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let (cycle_form_error, set_cycle_form_error) = signal(Option::<String>::None);

    let create_cycle = move |_| {
        let client_val = client.get().trim().to_string();
        let title_val = title.get().trim().to_string();
        if client_val.is_empty() || title_val.is_empty() {
            set_cycle_form_error.set(Some("Client and title are required".to_string()));
            return;
        }

        set_cycle_form_error.set(None);
        spawn_local(async move {
            let request = CycleCreate {
                client: client_val,
                title: title_val,
            };
            match api::create_cycle(emp_id, &request).await {
                Ok(created) => {
                    client.set(String::new());
                    title.set(String::new());
                    set_selected_cycle.set(Some(created.cycle_id));
                    set_cycles.update(|list| list.push(created));
                }
                Err(e) => set_cycle_form_error.set(Some(e.to_string())),
            }
        });
    };

    // --- create round form, requires a selected cycle ---
    let round_number = RwSignal::new(String::new());
    let (round_date, set_round_date) = signal(String::new());
    let panel = RwSignal::new(String::new());
    let (status, set_status) = signal(RoundStatus::Pending);
    let (verdict, set_verdict) = signal(RoundVerdict::Positive);
    let detailed = RwSignal::new(String::new());
    let (round_form_error, set_round_form_error) = signal(Option::<String>::None);

    let create_round = move |_| {
        let Some(cycle_id) = selected_cycle.get() else {
            set_round_form_error.set(Some("Select a cycle first".to_string()));
            return;
        };
        let number: u32 = match round_number.get().trim().parse() {
            Ok(n) => n,
            Err(_) => {
                set_round_form_error.set(Some("Round must be a number".to_string()));
                return;
            }
        };
        let date = match NaiveDate::parse_from_str(round_date.get().trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_round_form_error.set(Some("Select the round date".to_string()));
                return;
            }
        };
        let panel_val = panel.get().trim().to_string();
        if panel_val.is_empty() {
            set_round_form_error.set(Some("Panel is required".to_string()));
            return;
        }

        set_round_form_error.set(None);
        spawn_local(async move {
            let request = RoundCreate {
                round: number,
                date,
                panel: panel_val,
                status: status.get_untracked(),
                feedback: verdict.get_untracked(),
                detailed_feedback: Some(detailed.get_untracked().trim().to_string())
                    .filter(|s| !s.is_empty()),
            };
            match api::create_round(cycle_id, &request).await {
                Ok(created) => {
                    round_number.set(String::new());
                    panel.set(String::new());
                    detailed.set(String::new());
                    set_rounds.update(|list| list.push(created));
                }
                Err(e) => set_round_form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="tab-panel tab-panel--split">
            <div class="tab-panel__left">
                <h3>"Interview cycles"</h3>
                <ErrorBox message=Signal::derive(move || cycles_error.get()) />
                <LoadingIndicator loading=Signal::derive(move || cycles_loading.get()) />

                <ul class="cycle-list">
                    <For
                        each=move || cycles.get()
                        key=|c| c.cycle_id
                        children=move |c| {
                            let cycle_id = c.cycle_id;
                            view! {
                                <li
                                    class=move || {
                                        if selected_cycle.get() == Some(cycle_id) {
                                            "cycle-list__item cycle-list__item--selected"
                                        } else {
                                            "cycle-list__item"
                                        }
                                    }
                                    on:click=move |_| set_selected_cycle.set(Some(cycle_id))
                                >
                                    <strong>{c.client.clone()}</strong>
                                    <span>{c.title.clone()}</span>
                                </li>
                            }
                        }
                    />
                </ul>

                <h4>"New cycle"</h4>
                <ErrorBox message=Signal::derive(move || cycle_form_error.get()) />
                <div class="form-group">
                    <Label>"Client"</Label>
                    <Input value=client />
                </div>
                <div class="form-group">
                    <Label>"Title"</Label>
                    <Input value=title placeholder="e.g. Senior Java Developer" />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=create_cycle>
                    "Create cycle"
                </Button>
            </div>

            <div class="tab-panel__right">
                <h3>"Rounds"</h3>
                <Show
                    when=move || selected_cycle.get().is_some()
                    fallback=|| view! { <p class="muted">"Select a cycle to see its rounds."</p> }
                >
                    <ErrorBox message=Signal::derive(move || rounds_error.get()) />
                    <LoadingIndicator loading=Signal::derive(move || rounds_loading.get()) />

                    <table class="data-table data-table--compact">
                        <thead>
                            <tr>
                                <th>"Round"</th>
                                <th>"Date"</th>
                                <th>"Panel"</th>
                                <th>"Status"</th>
                                <th>"Verdict"</th>
                                <th>"Notes"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rounds.get()
                                key=|r| r.round
                                children=move |r| view! {
                                    <tr>
                                        <td>{r.round}</td>
                                        <td>{format_naive_date(&r.date)}</td>
                                        <td>{r.panel.clone()}</td>
                                        <td>{r.status.as_str()}</td>
                                        <td>{match r.feedback {
                                            RoundVerdict::Positive => "POSITIVE",
                                            RoundVerdict::Negative => "NEGATIVE",
                                        }}</td>
                                        <td>{r.detailed_feedback.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>

                    <h4>"Add round"</h4>
                    <ErrorBox message=Signal::derive(move || round_form_error.get()) />
                    <div class="form-grid">
                        <div class="form-group">
                            <Label>"Round #"</Label>
                            <Input value=round_number />
                        </div>
                        <div class="form-group">
                            <Label>"Date"</Label>
                            <input
                                type="date"
                                prop:value=move || round_date.get()
                                on:input=move |ev| set_round_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <Label>"Panel"</Label>
                            <Input value=panel />
                        </div>
                        <div class="form-group">
                            <Label>"Status"</Label>
                            <select on:change=move |ev| {
                                set_status.set(match event_target_value(&ev).as_str() {
                                    "PASSED" => RoundStatus::Passed,
                                    "FAILED" => RoundStatus::Failed,
                                    "SUCCESS" => RoundStatus::Success,
                                    _ => RoundStatus::Pending,
                                })
                            }>
                                <option value="PENDING">"PENDING"</option>
                                <option value="PASSED">"PASSED"</option>
                                <option value="FAILED">"FAILED"</option>
                                <option value="SUCCESS">"SUCCESS"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <Label>"Verdict"</Label>
                            <select on:change=move |ev| {
                                set_verdict.set(match event_target_value(&ev).as_str() {
                                    "NEGATIVE" => RoundVerdict::Negative,
                                    _ => RoundVerdict::Positive,
                                })
                            }>
                                <option value="POSITIVE">"POSITIVE"</option>
                                <option value="NEGATIVE">"NEGATIVE"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <Label>"Detailed feedback"</Label>
                            <Textarea value=detailed />
                        </div>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=create_round>
                        "Submit round"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
