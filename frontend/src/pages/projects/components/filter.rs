use crate::models::{ActivityFilter, ProjectFilter, PROJECT_TYPES};
use crate::pages::projects::utils::ProjectFilterMsg;
use crate::utils::time::format_date;
use leptos::*;

const INPUT: &str = "border rounded px-2 py-1 text-sm";
const LABEL: &str = "flex flex-col text-xs text-gray-600 gap-1";

#[component]
pub fn ProjectsFilter(
    filter: Signal<ProjectFilter>,
    on_change: Callback<ProjectFilterMsg>,
) -> impl IntoView {
    let date_value = move |pick: fn(&ProjectFilter) -> Option<chrono::NaiveDate>| {
        move || filter.with(|f| pick(f).map(format_date).unwrap_or_default())
    };

    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class=LABEL>
                "Project type"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.project_type.clone())
                    on:change=move |ev| on_change.call(ProjectFilterMsg::ProjectType(event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {PROJECT_TYPES
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class=LABEL>
                "Start from"
                <input
                    type="date"
                    class=INPUT
                    prop:value=date_value(|f| f.start_date_from)
                    on:change=move |ev| on_change.call(ProjectFilterMsg::StartFrom(event_target_value(&ev)))
                />
            </label>
            <label class=LABEL>
                "Start to"
                <input
                    type="date"
                    class=INPUT
                    prop:value=date_value(|f| f.start_date_to)
                    on:change=move |ev| on_change.call(ProjectFilterMsg::StartTo(event_target_value(&ev)))
                />
            </label>
            <label class=LABEL>
                "Status"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.activity.value())
                    on:change=move |ev| {
                        on_change.call(ProjectFilterMsg::Activity(ActivityFilter::from_value(&event_target_value(&ev))))
                    }
                >
                    {ActivityFilter::ALL
                        .iter()
                        .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class=LABEL>
                "Project #"
                <input
                    type="number"
                    min="1"
                    class=INPUT
                    prop:value=move || filter.with(|f| f.project_number.map(|n| n.to_string()).unwrap_or_default())
                    on:change=move |ev| on_change.call(ProjectFilterMsg::ProjectNumber(event_target_value(&ev)))
                />
            </label>
            <button
                type="button"
                class="text-sm text-gray-700 underline"
                on:click=move |_| on_change.call(ProjectFilterMsg::Reset)
            >
                "Reset"
            </button>
        </div>
    }
}
