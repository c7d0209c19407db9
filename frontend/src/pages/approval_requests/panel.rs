use crate::components::{confirm_dialog::PromptDialog, error::InlineErrorMessage, layout::Layout};
use crate::pages::approval_requests::{
    components::{
        details_modal::ApprovalDetailsModal, filter::ApprovalRequestsFilter,
        table::ApprovalRequestsTable,
    },
    utils::{ApprovalFilterMsg, ApprovalModal},
    view_model::use_approval_requests_view_model,
};
use leptos::*;

#[component]
pub fn ApprovalRequestsPage() -> impl IntoView {
    let vm = use_approval_requests_view_model();
    let sort = Signal::derive(move || vm.list.filter().with(|f| f.sort));
    let close = Callback::new(move |_| vm.close());

    let reject_target = Signal::derive(move || match vm.modal.get() {
        ApprovalModal::Reject(request) => Some(request),
        _ => None,
    });

    let dialog = move || match vm.modal.get() {
        ApprovalModal::Details(request) => view! {
            <ApprovalDetailsModal request=request repository=vm.repository on_close=close />
        }
        .into_view(),
        ApprovalModal::Closed | ApprovalModal::Reject(_) => ().into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-4">
                <h1 class="text-2xl font-bold text-gray-900">"Approval Requests"</h1>
                <ApprovalRequestsFilter
                    filter=vm.list.filter()
                    on_change=Callback::new(move |msg| vm.on_filter(msg))
                />
                <Show when=move || reject_target.get().is_some()>
                    <InlineErrorMessage error=vm.form_error />
                </Show>
                <ApprovalRequestsTable
                    rows=vm.list.rows()
                    loading=vm.list.loading()
                    error=vm.list.error()
                    sort=sort
                    role=vm.role
                    on_sort=Callback::new(move |column| vm.on_filter(ApprovalFilterMsg::Sort(column)))
                    on_select=Callback::new(move |request| vm.open(ApprovalModal::Details(request)))
                    on_action=Callback::new(move |(action, request)| vm.on_row_action(action, request))
                />
                {dialog}
                <PromptDialog
                    is_open=Signal::derive(move || reject_target.get().is_some())
                    title=Signal::derive(move || {
                        reject_target
                            .get()
                            .map(|r| format!("Reject request #{}", r.id))
                            .unwrap_or_default()
                    })
                    label="Comment"
                    submit_label="Reject"
                    pending=Signal::from(vm.reject_action.pending())
                    on_submit=Callback::new(move |comment: String| vm.reject(comment))
                    on_cancel=close
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::models::Role;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_filter_and_title() {
        let html = render_to_string(|| {
            provide_session(Role::HrManager);
            view! { <ApprovalRequestsPage/> }
        });
        assert!(html.contains("Approval Requests"));
        assert!(html.contains("Request #"));
        assert!(!html.contains("Reject request #"));
    }
}
