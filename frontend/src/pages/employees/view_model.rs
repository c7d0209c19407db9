use super::repository::EmployeesRepository;
use super::utils::{
    apply_filter, assignment_for, validate_photo, EmployeeAction, EmployeeFilterMsg, EmployeeForm,
    EmployeeModal,
};
use crate::api::{ApiClient, ApiError};
use crate::models::{Employee, EmployeeFilter, EmployeeInput, ProjectAssignment, Role};
use crate::state::{
    list::ListHandle,
    mutation::{apply_command_result, apply_modal_result},
    session::use_session,
    toast::use_toaster,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub employee_id: i64,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub list: ListHandle<EmployeeFilter, Employee>,
    pub modal: RwSignal<EmployeeModal>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub role: Signal<Option<Role>>,
    pub repository: StoredValue<EmployeesRepository>,
    pub save_action: Action<EmployeeInput, Result<String, ApiError>>,
    pub delete_action: Action<i64, Result<String, ApiError>>,
    pub toggle_action: Action<Employee, Result<String, ApiError>>,
    pub assign_action: Action<ProjectAssignment, Result<String, ApiError>>,
    pub photo_action: Action<PhotoUpload, Result<String, ApiError>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();
        let repository = store_value(EmployeesRepository::new(Rc::new(api), Rc::new(toaster)));
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));

        let list = ListHandle::new(EmployeeFilter::default(), move |filter: EmployeeFilter| {
            let repo = repository.get_value();
            async move { repo.list(&filter).await }
        });
        let modal = create_rw_signal(EmployeeModal::Closed);
        let form_error = create_rw_signal(None::<ApiError>);

        let save_action = create_action(move |input: &EmployeeInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move {
                let message = if input.id.is_some() {
                    "Employee updated"
                } else {
                    "Employee added"
                };
                repo.save(&input).await.map(|_| message.to_string())
            }
        });
        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete(id).await.map(|_| "Employee deleted".to_string()) }
        });
        let toggle_action = create_action(move |employee: &Employee| {
            let repo = repository.get_value();
            let employee = employee.clone();
            async move {
                repo.toggle_active(employee.id).await.map(|_| {
                    let state = if employee.is_active { "deactivated" } else { "activated" };
                    format!("{} {}", employee.full_name, state)
                })
            }
        });
        let assign_action = create_action(move |assignment: &ProjectAssignment| {
            let repo = repository.get_value();
            let assignment = *assignment;
            async move {
                repo.assign(assignment)
                    .await
                    .map(|_| "Employee assigned to project".to_string())
            }
        });
        let photo_action = create_action(move |upload: &PhotoUpload| {
            let repo = repository.get_value();
            let upload = upload.clone();
            async move {
                repo.upload_photo(upload.employee_id, &upload.file_name, upload.bytes)
                    .await
                    .map(|_| "Photo uploaded".to_string())
            }
        });

        create_effect(move |_| list.refetch());
        create_effect(move |_| {
            apply_modal_result(save_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });
        create_effect(move |_| {
            apply_modal_result(assign_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });
        create_effect(move |_| {
            apply_modal_result(photo_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });
        create_effect(move |_| {
            apply_command_result(delete_action.value().get(), &toaster, || list.refetch());
        });
        create_effect(move |_| {
            apply_command_result(toggle_action.value().get(), &toaster, || list.refetch());
        });

        Self {
            list,
            modal,
            form_error,
            role,
            repository,
            save_action,
            delete_action,
            toggle_action,
            assign_action,
            photo_action,
        }
    }

    pub fn on_filter(&self, msg: EmployeeFilterMsg) {
        self.list.change_filter(|filter| apply_filter(filter, msg));
    }

    pub fn open(&self, modal: EmployeeModal) {
        self.form_error.set(None);
        self.modal.set(modal);
    }

    pub fn close(&self) {
        self.open(EmployeeModal::Closed);
    }

    pub fn on_row_action(&self, action: EmployeeAction, employee: Employee) {
        match action {
            EmployeeAction::Edit => self.open(EmployeeModal::Edit(employee)),
            EmployeeAction::ToggleActive => self.toggle_action.dispatch(employee),
            EmployeeAction::Assign => self.open(EmployeeModal::Assign(employee)),
            EmployeeAction::UploadPhoto => self.open(EmployeeModal::Photo(employee)),
            EmployeeAction::Delete => self.open(EmployeeModal::ConfirmDelete(employee)),
        }
    }

    pub fn save(&self, form: &EmployeeForm) {
        match form.to_payload() {
            Ok(input) => {
                self.form_error.set(None);
                self.save_action.dispatch(input);
            }
            Err(error) => self.form_error.set(Some(error)),
        }
    }

    pub fn assign(&self, employee_id: i64, project: &str) {
        match assignment_for(employee_id, project) {
            Ok(assignment) => {
                self.form_error.set(None);
                self.assign_action.dispatch(assignment);
            }
            Err(error) => self.form_error.set(Some(error)),
        }
    }

    pub fn upload_photo(&self, upload: PhotoUpload) {
        match validate_photo(&upload.file_name, &upload.bytes) {
            Ok(()) => {
                self.form_error.set(None);
                self.photo_action.dispatch(upload);
            }
            Err(error) => self.form_error.set(Some(error)),
        }
    }

    pub fn confirm_delete(&self, id: i64) {
        self.close();
        self.delete_action.dispatch(id);
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
