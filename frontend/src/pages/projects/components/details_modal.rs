use crate::components::{common::Field, modal::Modal};
use crate::models::Project;
use crate::pages::projects::repository::ProjectsRepository;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn ProjectDetailsModal(
    project: Project,
    repository: StoredValue<ProjectsRepository>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = project.id;
    let fresh = create_local_resource(
        move || id,
        move |id| {
            let repo = repository.get_value();
            async move { repo.get(id).await.ok() }
        },
    );
    let current = Signal::derive(move || fresh.get().flatten().unwrap_or_else(|| project.clone()));

    view! {
        <Modal title=format!("Project #{}", id) on_close=on_close>
            {move || {
                let project = current.get();
                view! {
                    <dl class="grid grid-cols-2 gap-4">
                        <Field label="Type" value=project.project_type.clone() />
                        <Field label="Status" value=project.status_label() />
                        <Field label="Start date" value=format_date(project.start_date) />
                        <Field label="End date" value=project.end_date.map(format_date).unwrap_or_default() />
                        <Field label="Project manager" value=project.manager_label() />
                        <Field label="Comment" value=project.comment.clone().unwrap_or_default() />
                    </dl>
                }
            }}
        </Modal>
    }
}
