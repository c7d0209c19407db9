use crate::api::ApiError;
use crate::components::{
    common::display_value,
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
    sort_header::SortableHeader,
};
use crate::models::{ApprovalRequest, ApprovalRequestSortKey, Role, SortOrder};
use crate::pages::approval_requests::utils::{row_actions, ApprovalAction};
use leptos::*;

const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn ApprovalRequestsTable(
    rows: Signal<Vec<ApprovalRequest>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    sort: Signal<SortOrder<ApprovalRequestSortKey>>,
    role: Signal<Option<Role>>,
    on_sort: Callback<ApprovalRequestSortKey>,
    on_select: Callback<ApprovalRequest>,
    on_action: Callback<(ApprovalAction, ApprovalRequest)>,
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
                <EmptyState title="No approval requests" description="Requests appear here once employees submit leave." />
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <SortableHeader label="ID" column=ApprovalRequestSortKey::Id sort=sort on_sort=on_sort />
                                <SortableHeader label="Leave request" column=ApprovalRequestSortKey::LeaveRequestId sort=sort on_sort=on_sort />
                                <SortableHeader label="Employee" column=ApprovalRequestSortKey::EmployeeName sort=sort on_sort=on_sort />
                                <SortableHeader label="Approver" column=ApprovalRequestSortKey::ApproverName sort=sort on_sort=on_sort />
                                <SortableHeader label="Status" column=ApprovalRequestSortKey::Status sort=sort on_sort=on_sort />
                                <SortableHeader label="Comment" column=ApprovalRequestSortKey::Comment sort=sort on_sort=on_sort />
                                <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                let role = role.get();
                                rows.get()
                                    .into_iter()
                                    .map(|request| approval_row(request, role, on_select, on_action))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn approval_row(
    request: ApprovalRequest,
    role: Option<Role>,
    on_select: Callback<ApprovalRequest>,
    on_action: Callback<(ApprovalAction, ApprovalRequest)>,
) -> impl IntoView {
    let buttons = role
        .map(|role| row_actions(role, &request))
        .unwrap_or_default()
        .into_iter()
        .map(|action| {
            let target = request.clone();
            let class = match action {
                ApprovalAction::Approve => "text-green-700 hover:underline",
                ApprovalAction::Reject => "text-red-600 hover:underline",
            };
            view! {
                <button
                    type="button"
                    class=class
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
    let text = |value: &Option<String>| display_value(value.as_deref().unwrap_or_default());

    view! {
        <tr class="hover:bg-gray-50 cursor-pointer" on:click=move |_| on_select.call(selected.clone())>
            <td class=CELL>{request.id}</td>
            <td class=CELL>{format!("#{}", request.leave_request_id)}</td>
            <td class=CELL>{text(&request.employee_name)}</td>
            <td class=CELL>{text(&request.approver_name)}</td>
            <td class=CELL>{request.status.to_string()}</td>
            <td class=CELL>{text(&request.comment)}</td>
            <td class=CELL>
                <div class="flex gap-3">{buttons}</div>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::models::ApprovalStatus;
    use crate::test_support::helpers::approval_request;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn decided_rows_have_no_buttons() {
        let html = render_to_string(|| {
            view! {
                <ApprovalRequestsTable
                    rows=Signal::derive(|| vec![
                        approval_request(1, ApprovalStatus::New),
                        approval_request(2, ApprovalStatus::Rejected),
                    ])
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    sort=Signal::derive(|| SortOrder::ascending(ApprovalRequestSortKey::LeaveRequestId))
                    role=Signal::derive(|| Some(Role::HrManager))
                    on_sort=Callback::new(|_| {})
                    on_select=Callback::new(|_| {})
                    on_action=Callback::new(|_| {})
                />
            }
        });
        assert_eq!(html.matches("text-green-700").count(), 1);
        assert_eq!(html.matches("text-red-600").count(), 1);
        assert!(html.contains("Olena Shevchenko"));
    }
}
