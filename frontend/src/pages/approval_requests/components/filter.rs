use crate::models::{ApprovalRequestFilter, ApprovalStatus};
use crate::pages::approval_requests::utils::ApprovalFilterMsg;
use leptos::*;

const INPUT: &str = "border rounded px-2 py-1 text-sm";
const LABEL: &str = "flex flex-col text-xs text-gray-600 gap-1";

#[component]
pub fn ApprovalRequestsFilter(
    filter: Signal<ApprovalRequestFilter>,
    on_change: Callback<ApprovalFilterMsg>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class=LABEL>
                "Employee"
                <input
                    type="search"
                    class=INPUT
                    placeholder="Full name"
                    prop:value=move || filter.with(|f| f.search_by_full_name.clone())
                    on:input=move |ev| on_change.call(ApprovalFilterMsg::Search(event_target_value(&ev)))
                />
            </label>
            <label class=LABEL>
                "Status"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.status.as_ref().map(|s| s.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| on_change.call(ApprovalFilterMsg::Status(event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {ApprovalStatus::KNOWN
                        .iter()
                        .map(|status| {
                            let value = status.as_str().to_string();
                            view! { <option value=value.clone()>{value}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class=LABEL>
                "Request #"
                <input
                    type="number"
                    min="1"
                    class=INPUT
                    prop:value=move || filter.with(|f| f.request_number.map(|n| n.to_string()).unwrap_or_default())
                    on:change=move |ev| on_change.call(ApprovalFilterMsg::RequestNumber(event_target_value(&ev)))
                />
            </label>
            <button
                type="button"
                class="text-sm text-gray-700 underline"
                on:click=move |_| on_change.call(ApprovalFilterMsg::Reset)
            >
                "Reset"
            </button>
        </div>
    }
}
