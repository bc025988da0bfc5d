use contracts::domain::employee::EmployeeDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::tabs::{
    AssessmentsTab, FeedbackTab, GeneralTab, InterviewsTab, ProfileTab, TrainingTab,
};
use crate::domain::roster::api;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};

/// Employee profile: header card plus the tab strip. The profile record is
/// fetched here and shared with the General tab; the other tabs own their
/// slices keyed by the employee id.
#[component]
pub fn EmployeeProfilePage() -> impl IntoView {
    let params = use_params_map();
    let emp_id = Memo::new(move |_| {
        params
            .with(|p| p.get("emp_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let (detail, set_detail) = signal(Option::<EmployeeDetail>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_tab, set_active_tab) = signal(ProfileTab::General);

    // profile refetches when the route param changes; a response for the
    // previously shown employee must never overwrite the current one
    let load_gen = StoredValue::new(0u64);
    let load = move || {
        let Some(id) = emp_id.get_untracked() else {
            set_error.set(Some("Invalid employee id".to_string()));
            return;
        };

        let gen = load_gen.get_value() + 1;
        load_gen.set_value(gen);

        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_employee(id).await;
            if load_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(fetched) => {
                    set_detail.set(Some(fetched));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        // track the param so navigation between profiles refetches
        let _ = emp_id.get();
        load();
    });

    let on_refresh = Callback::new(move |_: ()| load());

    view! {
        <div class="page page--detail">
            <ErrorBox message=Signal::derive(move || error.get()) />
            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            {move || detail.get().map(|d| {
                let employee = d.employee.clone();
                view! {
                    <div class="profile-header">
                        <h1 class="page__title">{employee.name.clone()}</h1>
                        <span class="profile-header__meta">
                            {format!(
                                "#{} · {} · {} · {}",
                                employee.emp_id,
                                employee.primary_skill,
                                employee.level,
                                employee.base_location
                            )}
                        </span>
                        <span class="profile-header__status">{employee.person_status.clone()}</span>
                    </div>
                }
            })}

            <div class="tab-strip">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab {
                                        "tab-strip__tab tab-strip__tab--active"
                                    } else {
                                        "tab-strip__tab"
                                    }
                                }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let id = emp_id.get();
                match (id, active_tab.get()) {
                    (Some(_), ProfileTab::General) => view! {
                        <GeneralTab
                            detail=Signal::derive(move || detail.get())
                            on_refresh=on_refresh
                        />
                    }
                    .into_any(),
                    (Some(id), ProfileTab::Interviews) => {
                        view! { <InterviewsTab emp_id=id /> }.into_any()
                    }
                    (Some(id), ProfileTab::Training) => {
                        view! { <TrainingTab emp_id=id /> }.into_any()
                    }
                    (Some(id), ProfileTab::Assessments) => {
                        view! { <AssessmentsTab emp_id=id /> }.into_any()
                    }
                    (Some(id), ProfileTab::Feedback) => {
                        view! { <FeedbackTab emp_id=id /> }.into_any()
                    }
                    (None, _) => view! { <div>"Invalid employee id"</div> }.into_any(),
                }
            }}
        </div>
    }
}
