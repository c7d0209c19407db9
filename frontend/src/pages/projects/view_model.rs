use super::repository::ProjectsRepository;
use super::utils::{apply_filter, ProjectAction, ProjectFilterMsg, ProjectForm, ProjectModal};
use crate::api::{ApiClient, ApiError};
use crate::models::{Project, ProjectFilter, ProjectInput, Role};
use crate::state::{
    list::ListHandle,
    mutation::{apply_command_result, apply_modal_result},
    session::use_session,
    toast::use_toaster,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ProjectsViewModel {
    pub list: ListHandle<ProjectFilter, Project>,
    pub modal: RwSignal<ProjectModal>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub role: Signal<Option<Role>>,
    pub repository: StoredValue<ProjectsRepository>,
    pub save_action: Action<ProjectInput, Result<String, ApiError>>,
    pub delete_action: Action<i64, Result<String, ApiError>>,
    pub deactivate_action: Action<Project, Result<String, ApiError>>,
}

/// Employees only see the projects they are assigned to.
fn initial_filter(role: Option<Role>, employee_id: Option<i64>) -> ProjectFilter {
    let scope = role.filter(|role| role.is_self_scoped()).and(employee_id);
    ProjectFilter::default().assigned_to(scope)
}

impl ProjectsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();
        let repository = store_value(ProjectsRepository::new(Rc::new(api), Rc::new(toaster)));
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));

        let initial = session.with_untracked(|state| initial_filter(state.role(), state.employee_id()));
        let list = ListHandle::new(initial, move |filter: ProjectFilter| {
            let repo = repository.get_value();
            async move { repo.list(&filter).await }
        });
        let modal = create_rw_signal(ProjectModal::Closed);
        let form_error = create_rw_signal(None::<ApiError>);

        let save_action = create_action(move |input: &ProjectInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move {
                let message = if input.id.is_some() {
                    "Project updated"
                } else {
                    "Project added"
                };
                repo.save(&input).await.map(|_| message.to_string())
            }
        });
        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete(id).await.map(|_| "Project deleted".to_string()) }
        });
        let deactivate_action = create_action(move |project: &Project| {
            let repo = repository.get_value();
            let project = project.clone();
            async move {
                repo.deactivate(project.id)
                    .await
                    .map(|_| format!("Project #{} deactivated", project.id))
            }
        });

        create_effect(move |_| list.refetch());
        create_effect(move |_| {
            apply_modal_result(save_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });
        create_effect(move |_| {
            apply_command_result(delete_action.value().get(), &toaster, || list.refetch());
        });
        create_effect(move |_| {
            apply_command_result(deactivate_action.value().get(), &toaster, || list.refetch());
        });

        Self {
            list,
            modal,
            form_error,
            role,
            repository,
            save_action,
            delete_action,
            deactivate_action,
        }
    }

    pub fn on_filter(&self, msg: ProjectFilterMsg) {
        self.list.change_filter(|filter| apply_filter(filter, msg));
    }

    pub fn open(&self, modal: ProjectModal) {
        self.form_error.set(None);
        self.modal.set(modal);
    }

    pub fn close(&self) {
        self.open(ProjectModal::Closed);
    }

    pub fn on_row_action(&self, action: ProjectAction, project: Project) {
        match action {
            ProjectAction::Edit => self.open(ProjectModal::Edit(project)),
            ProjectAction::Deactivate => self.deactivate_action.dispatch(project),
            ProjectAction::Delete => self.open(ProjectModal::ConfirmDelete(project)),
        }
    }

    pub fn save(&self, form: &ProjectForm) {
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

pub fn use_projects_view_model() -> ProjectsViewModel {
    match use_context::<ProjectsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ProjectsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_employees_are_scoped() {
        assert_eq!(
            initial_filter(Some(Role::Employee), Some(42)).assigned_employee_id,
            Some(42)
        );
        assert_eq!(
            initial_filter(Some(Role::ProjectManager), Some(42)).assigned_employee_id,
            None
        );
        assert_eq!(initial_filter(None, None).assigned_employee_id, None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::projects::utils::row_actions;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::{run_local, settle};
    use serde_json::json;

    fn project_json(id: i64, status: bool) -> serde_json::Value {
        json!({
            "id": id,
            "projectType": "Research",
            "startDate": "2024-02-01",
            "projectManagerId": 3,
            "status": status
        })
    }

    #[tokio::test]
    async fn deactivate_refetches_and_drops_the_action() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Projects");
            then.status(200).json_body(json!([project_json(1, true)]));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/Projects/1/deactivate");
            then.status(204);
        });
        let runtime = create_runtime();
        run_local(async {
            provide_session(Role::ProjectManager);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_projects_view_model();
            vm.list.refetch();
            settle().await;
            let row = vm.list.rows().get_untracked()[0].clone();

            server.mock(|when, then| {
                when.method(GET).path("/Projects");
                then.status(200).json_body(json!([project_json(1, false)]));
            });
            vm.on_row_action(ProjectAction::Deactivate, row);
            settle().await;
            apply_command_result(vm.deactivate_action.value().get_untracked(), &use_toaster(), || {
                vm.list.refetch()
            });
            settle().await;

            let rows = vm.list.rows().get_untracked();
            assert!(!rows[0].status);
            assert!(!row_actions(Role::ProjectManager, &rows[0]).contains(&ProjectAction::Deactivate));
            assert_eq!(server.hits(PATCH, "/Projects/1/deactivate"), 1);
        })
        .await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn employee_fetch_is_scoped_to_session() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Projects");
            then.status(200).json_body(json!([]));
        });
        let runtime = create_runtime();
        run_local(async {
            provide_session(Role::Employee);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_projects_view_model();
            vm.list.refetch();
            settle().await;
            let requests = server.received();
            assert_eq!(requests[0].query_value("assignedEmployeeId"), Some("42"));
        })
        .await;
        runtime.dispose();
    }
}
