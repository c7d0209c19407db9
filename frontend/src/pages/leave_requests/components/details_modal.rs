use crate::components::{common::Field, modal::Modal};
use crate::models::LeaveRequest;
use crate::pages::leave_requests::repository::LeaveRequestsRepository;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn LeaveRequestDetailsModal(
    request: LeaveRequest,
    repository: StoredValue<LeaveRequestsRepository>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = request.id;
    let fresh = create_local_resource(
        move || id,
        move |id| {
            let repo = repository.get_value();
            async move { repo.get(id).await.ok() }
        },
    );
    let current = Signal::derive(move || fresh.get().flatten().unwrap_or_else(|| request.clone()));

    view! {
        <Modal title=format!("Leave request #{}", id) on_close=on_close>
            {move || {
                let request = current.get();
                let approval = match (request.approval_request_id, request.approval_status.clone()) {
                    (Some(approval_id), Some(status)) => format!("#{} {}", approval_id, status),
                    (Some(approval_id), None) => format!("#{}", approval_id),
                    (None, status) => status.unwrap_or_default(),
                };
                view! {
                    <dl class="grid grid-cols-2 gap-4">
                        <Field label="Employee" value=request.employee_name.clone().unwrap_or_default() />
                        <Field label="Absence reason" value=request.absence_reason.clone() />
                        <Field label="Start date" value=format_date(request.start_date) />
                        <Field label="End date" value=format_date(request.end_date) />
                        <Field label="Status" value=request.status.to_string() />
                        <Field label="Approval" value=approval />
                        <Field label="Comment" value=request.comment.clone().unwrap_or_default() />
                    </dl>
                }
            }}
        </Modal>
    }
}
