use crate::models::{LeaveRequestFilter, LeaveStatus, ABSENCE_REASONS};
use crate::pages::leave_requests::utils::LeaveRequestFilterMsg;
use crate::utils::time::format_date;
use leptos::*;

const INPUT: &str = "border rounded px-2 py-1 text-sm";
const LABEL: &str = "flex flex-col text-xs text-gray-600 gap-1";

#[component]
pub fn LeaveRequestsFilter(
    filter: Signal<LeaveRequestFilter>,
    on_change: Callback<LeaveRequestFilterMsg>,
) -> impl IntoView {
    let start = move || filter.with(|f| f.start_date.map(format_date).unwrap_or_default());
    let end = move || filter.with(|f| f.end_date.map(format_date).unwrap_or_default());
    let status = move || {
        filter.with(|f| {
            f.status
                .as_ref()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class=LABEL>
                "Absence reason"
                <select
                    class=INPUT
                    prop:value=move || filter.with(|f| f.absence_reason.clone())
                    on:change=move |ev| on_change.call(LeaveRequestFilterMsg::AbsenceReason(event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {ABSENCE_REASONS
                        .iter()
                        .map(|reason| view! { <option value=*reason>{*reason}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class=LABEL>
                "Start date"
                <input
                    type="date"
                    class=INPUT
                    prop:value=start
                    on:change=move |ev| on_change.call(LeaveRequestFilterMsg::StartDate(event_target_value(&ev)))
                />
            </label>
            <label class=LABEL>
                "End date"
                <input
                    type="date"
                    class=INPUT
                    prop:value=end
                    on:change=move |ev| on_change.call(LeaveRequestFilterMsg::EndDate(event_target_value(&ev)))
                />
            </label>
            <label class=LABEL>
                "Status"
                <select
                    class=INPUT
                    prop:value=status
                    on:change=move |ev| on_change.call(LeaveRequestFilterMsg::Status(event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {LeaveStatus::KNOWN
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
                    on:change=move |ev| on_change.call(LeaveRequestFilterMsg::RequestNumber(event_target_value(&ev)))
                />
            </label>
            <button
                type="button"
                class="text-sm text-gray-700 underline"
                on:click=move |_| on_change.call(LeaveRequestFilterMsg::Reset)
            >
                "Reset"
            </button>
        </div>
    }
}
