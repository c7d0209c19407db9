use crate::api::ApiError;
use crate::components::{
    common::display_value,
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
    sort_header::SortableHeader,
};
use crate::models::{LeaveRequest, LeaveRequestSortKey, Role, SortOrder};
use crate::pages::leave_requests::utils::{row_actions, LeaveRequestAction};
use crate::utils::time::format_date;
use leptos::*;

const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn LeaveRequestsTable(
    rows: Signal<Vec<LeaveRequest>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    sort: Signal<SortOrder<LeaveRequestSortKey>>,
    role: Signal<Option<Role>>,
    on_sort: Callback<LeaveRequestSortKey>,
    on_select: Callback<LeaveRequest>,
    on_action: Callback<(LeaveRequestAction, LeaveRequest)>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <Show when=move || error.get().is_some()>
                <div class="px-4 pt-4">
                    <ErrorMessage message=error.get().map(|e| e.error).unwrap_or_default() />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && rows.with(Vec::is_empty)>
                <EmptyState title="No leave requests found" />
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <SortableHeader label="ID" column=LeaveRequestSortKey::Id sort=sort on_sort=on_sort />
                                <SortableHeader label="Employee" column=LeaveRequestSortKey::EmployeeName sort=sort on_sort=on_sort />
                                <SortableHeader label="Reason" column=LeaveRequestSortKey::AbsenceReason sort=sort on_sort=on_sort />
                                <SortableHeader label="Start" column=LeaveRequestSortKey::StartDate sort=sort on_sort=on_sort />
                                <SortableHeader label="End" column=LeaveRequestSortKey::EndDate sort=sort on_sort=on_sort />
                                <SortableHeader label="Status" column=LeaveRequestSortKey::Status sort=sort on_sort=on_sort />
                                <SortableHeader label="Approval" column=LeaveRequestSortKey::ApprovalStatus sort=sort on_sort=on_sort />
                                <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                let role = role.get();
                                rows.get()
                                    .into_iter()
                                    .map(|request| request_row(request, role, on_select, on_action))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn request_row(
    request: LeaveRequest,
    role: Option<Role>,
    on_select: Callback<LeaveRequest>,
    on_action: Callback<(LeaveRequestAction, LeaveRequest)>,
) -> impl IntoView {
    let buttons = role
        .map(|role| row_actions(role, &request))
        .unwrap_or_default()
        .into_iter()
        .map(|action| {
            let target = request.clone();
            view! {
                <button
                    type="button"
                    class="text-blue-600 hover:underline"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_action.call((action, target.clone()));
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();
    let selected = request.clone();
    let employee = display_value(request.employee_name.as_deref().unwrap_or_default());
    let approval = display_value(request.approval_status.as_deref().unwrap_or_default());

    view! {
        <tr class="hover:bg-gray-50 cursor-pointer" on:click=move |_| on_select.call(selected.clone())>
            <td class=CELL>{request.id}</td>
            <td class=CELL>{employee}</td>
            <td class=CELL>{request.absence_reason.clone()}</td>
            <td class=CELL>{format_date(request.start_date)}</td>
            <td class=CELL>{format_date(request.end_date)}</td>
            <td class=CELL>{request.status.to_string()}</td>
            <td class=CELL>{approval}</td>
            <td class=CELL>
                <div class="flex gap-3">{buttons}</div>
            </td>
        </tr>
    }
}
