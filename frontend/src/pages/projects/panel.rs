use crate::api::ApiError;
use crate::components::{confirm_dialog::ConfirmDialog, layout::Layout};
use crate::models::{Capability, Screen};
use crate::pages::projects::{
    components::{
        details_modal::ProjectDetailsModal, filter::ProjectsFilter, form_modal::ProjectFormModal,
        table::ProjectsTable,
    },
    utils::{ProjectFilterMsg, ProjectForm, ProjectModal},
    view_model::use_projects_view_model,
};
use leptos::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let vm = use_projects_view_model();
    let title = move || {
        vm.role
            .get()
            .map(|role| Screen::Projects.title_for(role))
            .unwrap_or("Projects")
    };
    let can_add = move || {
        vm.role
            .get()
            .map(|role| role.can(Capability::AddProject))
            .unwrap_or(false)
    };
    let sort = Signal::derive(move || vm.list.filter().with(|f| f.sort));
    let form_error: Signal<Option<ApiError>> = vm.form_error.into();
    let close = Callback::new(move |_| vm.close());
    let on_save = Callback::new(move |form: ProjectForm| vm.save(&form));

    let delete_target = Signal::derive(move || match vm.modal.get() {
        ProjectModal::ConfirmDelete(project) => Some(project),
        _ => None,
    });

    let dialog = move || {
        let repository = vm.repository;
        let pending: Signal<bool> = vm.save_action.pending().into();
        match vm.modal.get() {
            ProjectModal::Closed | ProjectModal::ConfirmDelete(_) => ().into_view(),
            ProjectModal::Add => view! {
                <ProjectFormModal
                    title="Add project"
                    initial=ProjectForm::default()
                    repository=repository
                    error=form_error
                    pending=pending
                    on_save=on_save
                    on_close=close
                />
            }
            .into_view(),
            ProjectModal::Edit(project) => view! {
                <ProjectFormModal
                    title=format!("Edit project #{}", project.id)
                    initial=ProjectForm::from_project(&project)
                    repository=repository
                    error=form_error
                    pending=pending
                    on_save=on_save
                    on_close=close
                />
            }
            .into_view(),
            ProjectModal::Details(project) => view! {
                <ProjectDetailsModal project=project repository=repository on_close=close />
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
                            on:click=move |_| vm.open(ProjectModal::Add)
                        >
                            "Add project"
                        </button>
                    </Show>
                </div>
                <ProjectsFilter
                    filter=vm.list.filter()
                    on_change=Callback::new(move |msg| vm.on_filter(msg))
                />
                <ProjectsTable
                    rows=vm.list.rows()
                    loading=vm.list.loading()
                    error=vm.list.error()
                    sort=sort
                    role=vm.role
                    on_sort=Callback::new(move |column| vm.on_filter(ProjectFilterMsg::Sort(column)))
                    on_select=Callback::new(move |project| vm.open(ProjectModal::Details(project)))
                    on_action=Callback::new(move |(action, project)| vm.on_row_action(action, project))
                />
                {dialog}
                <ConfirmDialog
                    is_open=Signal::derive(move || delete_target.get().is_some())
                    title="Delete project"
                    message=Signal::derive(move || {
                        delete_target
                            .get()
                            .map(|p| format!("Delete project #{} ({})?", p.id, p.project_type))
                            .unwrap_or_default()
                    })
                    confirm_label="Delete"
                    destructive=true
                    on_confirm=Callback::new(move |_| {
                        if let Some(project) = delete_target.get_untracked() {
                            vm.confirm_delete(project.id);
                        }
                    })
                    on_cancel=close
                />
            </div>
        </Layout>
    }
}
