use std::collections::BTreeSet;

use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::add_form::AddCandidateForm;
use crate::domain::roster::{api, filter};
use crate::domain::roster::filter::RosterFilter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status::{ErrorBox, LoadingIndicator};
use crate::shared::date_utils::{format_naive_date, format_opt_date};
use crate::shared::icons::icon;

/// One multi-select category of the filter panel
#[component]
fn CategoryFilter(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<BTreeSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            <span class="category-filter__label">{label}</span>
            <For
                each=move || options.get()
                key=|value| value.clone()
                children=move |value| {
                    let value_for_check = value.clone();
                    let value_for_toggle = value.clone();
                    view! {
                        <label class="category-filter__option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.get().contains(&value_for_check)
                                on:change=move |_| on_toggle.run(value_for_toggle.clone())
                            />
                            {value}
                        </label>
                    }
                }
            />
        </div>
    }
}

/// Bench roster: search, category filters, aging sort, manual add.
///
/// The raw list is fetched once per visit; all filtering and sorting is a
/// pure derivation memoized over (raw list, filter state).
#[component]
pub fn RosterListPage() -> impl IntoView {
    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let roster_filter = RwSignal::new(RosterFilter::default());
    let (show_add_form, set_show_add_form) = signal(false);

    let load_gen = StoredValue::new(0u64);
    let load = move || {
        let gen = load_gen.get_value() + 1;
        load_gen.set_value(gen);

        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_bench_details().await;
            if load_gen.get_value() != gen {
                // superseded by a newer request
                return;
            }
            match result {
                Ok(list) => {
                    set_employees.set(list);
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
        load();
    });

    let visible = Memo::new(move |_| filter::apply(&employees.get(), &roster_filter.get()));

    let levels = Memo::new(move |_| {
        filter::distinct_values(&employees.get(), |e| e.level.as_str())
    });
    let locations = Memo::new(move |_| {
        filter::distinct_values(&employees.get(), |e| e.base_location.as_str())
    });
    let skills = Memo::new(move |_| {
        filter::distinct_values(&employees.get(), |e| e.primary_skill.as_str())
    });

    let toggle_level = Callback::new(move |value: String| {
        roster_filter.update(|f| toggle_member(&mut f.levels, value));
    });
    let toggle_location = Callback::new(move |value: String| {
        roster_filter.update(|f| toggle_member(&mut f.locations, value));
    });
    let toggle_skill = Callback::new(move |value: String| {
        roster_filter.update(|f| toggle_member(&mut f.skills, value));
    });

    let on_search = Callback::new(move |text: String| {
        roster_filter.update(|f| f.search_text = text);
    });

    let navigate = use_navigate();
    let open_profile = move |emp_id: i64| {
        navigate(&format!("/dashboard/{}", emp_id), Default::default());
    };

    let on_created = Callback::new(move |created: Employee| {
        // patch the local snapshot; the backend stays source of truth
        set_employees.update(|list| list.insert(0, created));
        set_show_add_form.set(false);
    });

    view! {
        <div class="page page--wide">
            <PageHeader title="Bench roster" icon_name="users">
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || visible.get().len().to_string()}
                </Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon("refresh")}
                    {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| set_show_add_form.update(|v| *v = !*v)
                >
                    {icon("plus")}
                    " Add candidate"
                </Button>
            </PageHeader>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show when=move || show_add_form.get()>
                <AddCandidateForm
                    on_created=on_created
                    on_cancel=Callback::new(move |_| set_show_add_form.set(false))
                />
            </Show>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        {icon("filter")}
                        <span class="filter-panel__title">"Filters"</span>
                        {move || {
                            let count = roster_filter.get().active_count();
                            (count > 0).then(|| view! {
                                <span class="badge badge--primary">{count}</span>
                            })
                        }}
                    </div>
                    <div class="filter-panel-header__right">
                        <SearchInput
                            value=Signal::derive(move || roster_filter.get().search_text)
                            on_change=on_search
                            placeholder="Name or employee id..."
                        />
                        <label class="category-filter__option">
                            <input
                                type="checkbox"
                                prop:checked=move || roster_filter.get().only_deployable
                                on:change=move |_| {
                                    roster_filter.update(|f| f.only_deployable = !f.only_deployable)
                                }
                            />
                            "Deployable only"
                        </label>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                roster_filter.update(|f| {
                                    f.sort_ascending_by_aging = !f.sort_ascending_by_aging
                                })
                            }
                        >
                            {move || {
                                if roster_filter.get().sort_ascending_by_aging {
                                    "Aging ▲"
                                } else {
                                    "Aging ▼"
                                }
                            }}
                        </Button>
                    </div>
                </div>
                <div class="filter-panel-content">
                    <CategoryFilter
                        label="Level"
                        options=levels
                        selected=Signal::derive(move || roster_filter.get().levels)
                        on_toggle=toggle_level
                    />
                    <CategoryFilter
                        label="Location"
                        options=locations
                        selected=Signal::derive(move || roster_filter.get().locations)
                        on_toggle=toggle_location
                    />
                    <CategoryFilter
                        label="Primary skill"
                        options=skills
                        selected=Signal::derive(move || roster_filter.get().skills)
                        on_toggle=toggle_skill
                    />
                </div>
            </div>

            <LoadingIndicator loading=Signal::derive(move || is_loading.get()) />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Emp ID"</th>
                        <th>"Name"</th>
                        <th>"Primary skill"</th>
                        <th>"Level"</th>
                        <th>"Location"</th>
                        <th>"Department"</th>
                        <th>"Bench start"</th>
                        <th>"Bench end"</th>
                        <th>"Aging (days)"</th>
                        <th>"Deployable"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|e| e.emp_id
                        children=move |e| {
                            let emp_id = e.emp_id;
                            let open_profile = open_profile.clone();
                            view! {
                                <tr
                                    class="data-table__row data-table__row--clickable"
                                    on:click=move |_| open_profile(emp_id)
                                >
                                    <td>{e.emp_id}</td>
                                    <td>{e.name.clone()}</td>
                                    <td>{e.primary_skill.clone()}</td>
                                    <td>{e.level.clone()}</td>
                                    <td>{e.base_location.clone()}</td>
                                    <td>{e.department_name.clone()}</td>
                                    <td>{format_naive_date(&e.bench_start_date)}</td>
                                    <td>{format_opt_date(&e.bench_end_date)}</td>
                                    <td>{e.aging_days}</td>
                                    <td>{if e.is_deployable { "Yes" } else { "No" }}</td>
                                    <td>{e.person_status.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

fn toggle_member(set: &mut BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
