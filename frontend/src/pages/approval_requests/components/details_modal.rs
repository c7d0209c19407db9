use crate::components::{common::Field, modal::Modal};
use crate::models::ApprovalRequest;
use crate::pages::approval_requests::repository::ApprovalRequestsRepository;
use leptos::*;

#[component]
pub fn ApprovalDetailsModal(
    request: ApprovalRequest,
    repository: StoredValue<ApprovalRequestsRepository>,
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
        <Modal title=format!("Approval request #{}", id) on_close=on_close wide=true>
            {move || {
                let request = current.get();
                view! {
                    <dl class="grid grid-cols-2 gap-4">
                        <Field label="Employee" value=request.employee_name.clone().unwrap_or_default() />
                        <Field label="Approver" value=request.approver_name.clone().unwrap_or_default() />
                        <Field label="Leave request" value=format!("#{}", request.leave_request_id) />
                        <Field label="Status" value=request.status.to_string() />
                        <Field label="Comment" value=request.comment.clone().unwrap_or_default() />
                    </dl>
                    <div>
                        <h3 class="text-xs font-medium uppercase text-gray-500">"Leave request details"</h3>
                        <p class="mt-1 text-sm text-gray-900 whitespace-pre-line">
                            {request.leave_request_details.clone().unwrap_or_else(|| "-".into())}
                        </p>
                    </div>
                }
            }}
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::models::ApprovalStatus;
    use crate::state::toast::recording::RecordingNotifier;
    use crate::test_support::helpers::approval_request;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    #[test]
    fn details_include_leave_request_text() {
        let html = render_to_string(|| {
            let repository = store_value(ApprovalRequestsRepository::new(
                Rc::new(ApiClient::new()),
                Rc::new(RecordingNotifier::default()),
            ));
            view! {
                <ApprovalDetailsModal
                    request=approval_request(2, ApprovalStatus::New)
                    repository=repository
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Vacation 2024-07-01 - 2024-07-05"));
        assert!(html.contains("Approval request #2"));
    }
}
