use super::repository::LeaveRequestsRepository;
use super::utils::{
    apply_filter, LeaveRequestAction, LeaveRequestFilterMsg, LeaveRequestForm, LeaveRequestModal,
};
use crate::api::{ApiClient, ApiError};
use crate::models::{LeaveRequest, LeaveRequestFilter, LeaveRequestInput, Role};
use crate::state::{
    list::ListHandle,
    mutation::{apply_command_result, apply_modal_result},
    session::use_session,
    toast::use_toaster,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub list: ListHandle<LeaveRequestFilter, LeaveRequest>,
    pub modal: RwSignal<LeaveRequestModal>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub role: Signal<Option<Role>>,
    pub employee_id: Signal<Option<i64>>,
    pub repository: StoredValue<LeaveRequestsRepository>,
    pub save_action: Action<LeaveRequestInput, Result<String, ApiError>>,
    pub delete_action: Action<i64, Result<String, ApiError>>,
    pub submit_action: Action<i64, Result<String, ApiError>>,
    pub cancel_action: Action<i64, Result<String, ApiError>>,
}

impl LeaveRequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();
        let repository = store_value(LeaveRequestsRepository::new(
            Rc::new(api),
            Rc::new(toaster),
        ));
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));
        let employee_id = Signal::derive(move || session.with(|state| state.employee_id()));

        let scope = session.with_untracked(|state| {
            state
                .role()
                .filter(|role| role.is_self_scoped())
                .and(state.employee_id())
        });
        let list = ListHandle::new(
            LeaveRequestFilter::default().for_employee(scope),
            move |filter: LeaveRequestFilter| {
                let repo = repository.get_value();
                async move { repo.list(&filter).await }
            },
        );
        let modal = create_rw_signal(LeaveRequestModal::Closed);
        let form_error = create_rw_signal(None::<ApiError>);

        let save_action = create_action(move |input: &LeaveRequestInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move {
                let message = if input.id.is_some() {
                    "Leave request updated"
                } else {
                    "Leave request created"
                };
                repo.save(&input).await.map(|_| message.to_string())
            }
        });
        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                repo.delete(id)
                    .await
                    .map(|_| "Leave request deleted".to_string())
            }
        });
        let submit_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                repo.submit(id)
                    .await
                    .map(|_| format!("Leave request #{} submitted", id))
            }
        });
        let cancel_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                repo.cancel(id)
                    .await
                    .map(|_| format!("Leave request #{} canceled", id))
            }
        });

        create_effect(move |_| list.refetch());
        create_effect(move |_| {
            apply_modal_result(save_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });
        for action in [delete_action, submit_action, cancel_action] {
            create_effect(move |_| {
                apply_command_result(action.value().get(), &toaster, || list.refetch());
            });
        }

        Self {
            list,
            modal,
            form_error,
            role,
            employee_id,
            repository,
            save_action,
            delete_action,
            submit_action,
            cancel_action,
        }
    }

    pub fn on_filter(&self, msg: LeaveRequestFilterMsg) {
        self.list.change_filter(|filter| apply_filter(filter, msg));
    }

    pub fn open(&self, modal: LeaveRequestModal) {
        self.form_error.set(None);
        self.modal.set(modal);
    }

    pub fn close(&self) {
        self.open(LeaveRequestModal::Closed);
    }

    pub fn on_row_action(&self, action: LeaveRequestAction, request: LeaveRequest) {
        match action {
            LeaveRequestAction::Edit => self.open(LeaveRequestModal::Edit(request)),
            LeaveRequestAction::Submit => self.submit_action.dispatch(request.id),
            LeaveRequestAction::Cancel => self.cancel_action.dispatch(request.id),
            LeaveRequestAction::Delete => self.open(LeaveRequestModal::ConfirmDelete(request)),
        }
    }

    pub fn save(&self, form: &LeaveRequestForm) {
        match form.to_payload() {
            Ok(input) => {
                self.form_error.set(None);
                self.save_action.dispatch(input);
            }
            Err(error) => self.form_error.set(Some(error)),
        }
    }

    pub fn confirm_delete(&self, id: i64) {
        self.close();
        self.delete_action.dispatch(id);
    }
}

pub fn use_leave_requests_view_model() -> LeaveRequestsViewModel {
    match use_context::<LeaveRequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveRequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::models::LeaveStatus;
    use crate::pages::leave_requests::utils::row_actions;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::{run_local, settle};
    use serde_json::json;

    fn list_returns(server: &MockServer, status: &str) {
        let body = json!([{
            "id": 5,
            "employeeId": 42,
            "absenceReason": "Vacation",
            "startDate": "2024-07-01",
            "endDate": "2024-07-05",
            "status": status
        }]);
        server.mock(move |when, then| {
            when.method(GET).path("/LeaveRequest");
            then.status(200).json_body(body);
        });
    }

    #[tokio::test]
    async fn request_moves_new_submitted_canceled() {
        let server = MockServer::start();
        list_returns(&server, "New");
        server.mock(|when, then| {
            when.method(POST).path("/LeaveRequest/submit-leave-request/5");
            then.status(204);
        });
        server.mock(|when, then| {
            when.method(POST).path("/LeaveRequest/cancel-leave-request/5");
            then.status(204);
        });
        let runtime = create_runtime();
        run_local(async {
            provide_session(Role::Employee);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_leave_requests_view_model();
            let status = || vm.list.rows().get_untracked()[0].status.clone();

            vm.list.refetch();
            settle().await;
            assert_eq!(status(), LeaveStatus::New);
            assert_eq!(server.received()[0].query_value("employeeId"), Some("42"));

            let row = vm.list.rows().get_untracked()[0].clone();
            vm.on_row_action(LeaveRequestAction::Submit, row);
            settle().await;
            assert!(matches!(vm.submit_action.value().get_untracked(), Some(Ok(_))));
            list_returns(&server, "Submitted");
            vm.list.refetch();
            settle().await;
            assert_eq!(status(), LeaveStatus::Submitted);
            let row = vm.list.rows().get_untracked()[0].clone();
            assert_eq!(
                row_actions(Role::Employee, &row),
                vec![LeaveRequestAction::Cancel]
            );

            vm.on_row_action(LeaveRequestAction::Cancel, row);
            settle().await;
            assert!(matches!(vm.cancel_action.value().get_untracked(), Some(Ok(_))));
            list_returns(&server, "Canceled");
            vm.list.refetch();
            settle().await;
            assert_eq!(status(), LeaveStatus::Canceled);
        })
        .await;
        runtime.dispose();
    }

    #[test]
    fn invalid_form_is_kept_local() {
        crate::test_support::ssr::with_runtime(|| {
            provide_session(Role::Employee);
            let vm = use_leave_requests_view_model();
            vm.open(LeaveRequestModal::Add);
            vm.save(&LeaveRequestForm::for_employee(vm.employee_id.get_untracked()));
            assert_eq!(
                vm.form_error.get_untracked().map(|e| e.error),
                Some("Absence reason is required".to_string())
            );
            assert_eq!(vm.save_action.version().get_untracked(), 0);
        });
    }
}
