use crate::api::ApiError;
use crate::components::{confirm_dialog::ConfirmDialog, layout::Layout};
use crate::models::{Capability, Screen};
use crate::pages::leave_requests::{
    components::{
        details_modal::LeaveRequestDetailsModal, filter::LeaveRequestsFilter,
        form_modal::LeaveRequestFormModal, table::LeaveRequestsTable,
    },
    utils::{LeaveRequestFilterMsg, LeaveRequestForm, LeaveRequestModal},
    view_model::use_leave_requests_view_model,
};
use leptos::*;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    let vm = use_leave_requests_view_model();
    let title = move || {
        vm.role
            .get()
            .map(|role| Screen::LeaveRequests.title_for(role))
            .unwrap_or("Leave Requests")
    };
    let can_add = move || {
        vm.role
            .get()
            .map(|role| role.can(Capability::AddLeaveRequest))
            .unwrap_or(false)
    };
    let choose_employee = move || {
        vm.role
            .get_untracked()
            .map_or(true, |role| !role.is_self_scoped())
    };
    let sort = Signal::derive(move || vm.list.filter().with(|f| f.sort));
    let form_error: Signal<Option<ApiError>> = vm.form_error.into();
    let close = Callback::new(move |_| vm.close());
    let on_save = Callback::new(move |form: LeaveRequestForm| vm.save(&form));

    let delete_target = Signal::derive(move || match vm.modal.get() {
        LeaveRequestModal::ConfirmDelete(request) => Some(request),
        _ => None,
    });

    let dialog = move || {
        let repository = vm.repository;
        let pending: Signal<bool> = vm.save_action.pending().into();
        match vm.modal.get() {
            LeaveRequestModal::Closed | LeaveRequestModal::ConfirmDelete(_) => ().into_view(),
            LeaveRequestModal::Add => view! {
                <LeaveRequestFormModal
                    title="New leave request"
                    initial=LeaveRequestForm::for_employee(vm.employee_id.get_untracked())
                    choose_employee=choose_employee()
                    repository=repository
                    error=form_error
                    pending=pending
                    on_save=on_save
                    on_close=close
                />
            }
            .into_view(),
            LeaveRequestModal::Edit(request) => view! {
                <LeaveRequestFormModal
                    title=format!("Edit leave request #{}", request.id)
                    initial=LeaveRequestForm::from_request(&request)
                    choose_employee=choose_employee()
                    repository=repository
                    error=form_error
                    pending=pending
                    on_save=on_save
                    on_close=close
                />
            }
            .into_view(),
            LeaveRequestModal::Details(request) => view! {
                <LeaveRequestDetailsModal request=request repository=repository on_close=close />
            }
            .into_view(),
        }
    };

    view! {
        <Layout>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                    <Show when=can_add>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
                            on:click=move |_| vm.open(LeaveRequestModal::Add)
                        >
                            "Add leave request"
                        </button>
                    </Show>
                </div>
                <LeaveRequestsFilter
                    filter=vm.list.filter()
                    on_change=Callback::new(move |msg| vm.on_filter(msg))
                />
                <LeaveRequestsTable
                    rows=vm.list.rows()
                    loading=vm.list.loading()
                    error=vm.list.error()
                    sort=sort
                    role=vm.role
                    on_sort=Callback::new(move |column| vm.on_filter(LeaveRequestFilterMsg::Sort(column)))
                    on_select=Callback::new(move |request| vm.open(LeaveRequestModal::Details(request)))
                    on_action=Callback::new(move |(action, request)| vm.on_row_action(action, request))
                />
                {dialog}
                <ConfirmDialog
                    is_open=Signal::derive(move || delete_target.get().is_some())
                    title="Delete leave request"
                    message=Signal::derive(move || {
                        delete_target
                            .get()
                            .map(|r| format!("Delete leave request #{} ({})?", r.id, r.period_label()))
                            .unwrap_or_default()
                    })
                    confirm_label="Delete"
                    destructive=true
                    on_confirm=Callback::new(move |_| {
                        if let Some(request) = delete_target.get_untracked() {
                            vm.confirm_delete(request.id);
                        }
                    })
                    on_cancel=close
                />
            </div>
        </Layout>
    }
}
