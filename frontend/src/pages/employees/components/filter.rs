use crate::models::{ActivityFilter, EmployeeFilter, SUBDIVISIONS};
use crate::pages::employees::utils::EmployeeFilterMsg;
use leptos::*;

const INPUT: &str = "border rounded px-2 py-1 text-sm";

#[component]
pub fn EmployeesFilter(
    filter: Signal<EmployeeFilter>,
    on_change: Callback<EmployeeFilterMsg>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Search by name"
                <input
                    type="search"
                    class=INPUT
                    placeholder="Full name"
                    prop:value=move || filter.with(|f| f.search_by_name.clone())
                    on:input=move |ev| on_change.call(EmployeeFilterMsg::Search(event_target_value(&ev)))
                />
            </label>
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Subdivision"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.subdivision.clone())
                    on:change=move |ev| on_change.call(EmployeeFilterMsg::Subdivision(event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {SUBDIVISIONS
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Status"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.activity.value())
                    on:change=move |ev| {
                        on_change.call(EmployeeFilterMsg::Activity(ActivityFilter::from_value(&event_target_value(&ev))))
                    }
                >
                    {ActivityFilter::ALL
                        .iter()
                        .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Balance from"
                <input
                    type="number"
                    min="0"
                    class=INPUT
                    prop:value=move || filter.with(|f| f.balance_min.to_string())
                    on:change=move |ev| on_change.call(EmployeeFilterMsg::BalanceMin(event_target_value(&ev)))
                />
            </label>
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Balance to"
                <input
                    type="number"
                    min="0"
                    class=INPUT
                    prop:value=move || filter.with(|f| f.balance_max.to_string())
                    on:change=move |ev| on_change.call(EmployeeFilterMsg::BalanceMax(event_target_value(&ev)))
                />
            </label>
            <button
                type="button"
                class="text-sm text-gray-700 underline"
                on:click=move |_| on_change.call(EmployeeFilterMsg::Reset)
            >
                "Reset"
            </button>
        </div>
    }
}
