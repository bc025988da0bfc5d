use leptos::prelude::*;

/// One bar of a `BarChart`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub count: u64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Horizontal bar chart for count buckets. Bars are proportioned against
/// the largest bucket; order of the input is preserved.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<BarDatum>>,
    /// Called with the bucket label when a bar is clicked
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    /// Currently selected bucket label, highlighted when set
    #[prop(optional, into)]
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let max = Memo::new(move |_| data.get().iter().map(|d| d.count).max().unwrap_or(0));

    view! {
        <div class="bar-chart">
            <For
                each=move || data.get()
                key=|d| d.label.clone()
                children=move |d| {
                    let count = d.count;
                    let label = d.label.clone();
                    let label_for_click = d.label.clone();
                    let label_for_class = d.label;
                    let width = move || {
                        let m = max.get();
                        if m == 0 { 0.0 } else { count as f64 * 100.0 / m as f64 }
                    };
                    let row_class = move || {
                        if selected.get().as_deref() == Some(label_for_class.as_str()) {
                            "bar-chart__row bar-chart__row--selected"
                        } else {
                            "bar-chart__row"
                        }
                    };
                    view! {
                        <div
                            class=row_class
                            on:click=move |_| {
                                if let Some(cb) = on_select {
                                    cb.run(label_for_click.clone());
                                }
                            }
                        >
                            <span class="bar-chart__label">{label}</span>
                            <div class="bar-chart__track">
                                <div
                                    class="bar-chart__bar"
                                    style=move || format!("width: {:.1}%;", width())
                                ></div>
                            </div>
                            <span class="bar-chart__count">{count}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
