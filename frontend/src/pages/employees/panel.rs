use crate::api::ApiError;
use crate::components::{confirm_dialog::ConfirmDialog, layout::Layout};
use crate::models::Capability;
use crate::pages::employees::{
    components::{
        assign_modal::AssignProjectModal, details_modal::EmployeeDetailsModal,
        filter::EmployeesFilter, form_modal::EmployeeFormModal, photo_modal::UploadPhotoModal,
        table::EmployeesTable,
    },
    utils::{EmployeeFilterMsg, EmployeeForm, EmployeeModal},
    view_model::use_employees_view_model,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let can_add = move || {
        vm.role
            .get()
            .map(|role| role.can(Capability::AddEmployee))
            .unwrap_or(false)
    };
    let sort = Signal::derive(move || vm.list.filter().with(|f| f.sort));
    let form_error: Signal<Option<ApiError>> = vm.form_error.into();
    let close = Callback::new(move |_| vm.close());

    let delete_target = Signal::derive(move || match vm.modal.get() {
        EmployeeModal::ConfirmDelete(employee) => Some(employee),
        _ => None,
    });
    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map(|e| format!("Delete {}? This cannot be undone.", e.full_name))
            .unwrap_or_default()
    });

    let dialog = move || {
        let repository = vm.repository;
        match vm.modal.get() {
            EmployeeModal::Closed | EmployeeModal::ConfirmDelete(_) => ().into_view(),
            EmployeeModal::Add => view! {
                <EmployeeFormModal
                    title="Add employee"
                    initial=EmployeeForm::default()
                    repository=repository
                    error=form_error
                    pending=vm.save_action.pending().into()
                    on_save=Callback::new(move |form: EmployeeForm| vm.save(&form))
                    on_close=close
                />
            }
            .into_view(),
            EmployeeModal::Edit(employee) => view! {
                <EmployeeFormModal
                    title=format!("Edit {}", employee.full_name)
                    initial=EmployeeForm::from_employee(&employee)
                    repository=repository
                    error=form_error
                    pending=vm.save_action.pending().into()
                    on_save=Callback::new(move |form: EmployeeForm| vm.save(&form))
                    on_close=close
                />
            }
            .into_view(),
            EmployeeModal::Details(employee) => view! {
                <EmployeeDetailsModal employee=employee repository=repository on_close=close />
            }
            .into_view(),
            EmployeeModal::Assign(employee) => view! {
                <AssignProjectModal
                    employee=employee
                    repository=repository
                    error=form_error
                    pending=vm.assign_action.pending().into()
                    on_assign=Callback::new(move |(id, project): (i64, String)| vm.assign(id, &project))
                    on_close=close
                />
            }
            .into_view(),
            EmployeeModal::Photo(employee) => view! {
                <UploadPhotoModal
                    employee=employee
                    error=form_error
                    pending=vm.photo_action.pending().into()
                    on_upload=Callback::new(move |upload| vm.upload_photo(upload))
                    on_close=close
                />
            }
            .into_view(),
        }
    };

    view! {
        <Layout>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">"Employees"</h1>
                    <Show when=can_add>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700"
                            on:click=move |_| vm.open(EmployeeModal::Add)
                        >
                            "Add employee"
                        </button>
                    </Show>
                </div>
                <EmployeesFilter
                    filter=vm.list.filter()
                    on_change=Callback::new(move |msg| vm.on_filter(msg))
                />
                <EmployeesTable
                    rows=vm.list.rows()
                    loading=vm.list.loading()
                    error=vm.list.error()
                    sort=sort
                    role=vm.role
                    on_sort=Callback::new(move |column| vm.on_filter(EmployeeFilterMsg::Sort(column)))
                    on_select=Callback::new(move |employee| vm.open(EmployeeModal::Details(employee)))
                    on_action=Callback::new(move |(action, employee)| vm.on_row_action(action, employee))
                />
                {dialog}
                <ConfirmDialog
                    is_open=Signal::derive(move || delete_target.get().is_some())
                    title="Delete employee"
                    message=delete_message
                    confirm_label="Delete"
                    destructive=true
                    on_confirm=Callback::new(move |_| {
                        if let Some(employee) = delete_target.get_untracked() {
                            vm.confirm_delete(employee.id);
                        }
                    })
                    on_cancel=close
                />
            </div>
        </Layout>
    }
}
