use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, modal::Modal};
use crate::models::Employee;
use crate::pages::employees::repository::EmployeesRepository;
use leptos::*;

#[component]
pub fn AssignProjectModal(
    employee: Employee,
    repository: StoredValue<EmployeesRepository>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    /// Called with the employee id and the raw project selection.
    on_assign: Callback<(i64, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = create_rw_signal(String::new());
    let projects = create_local_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.active_projects().await }
        },
    );
    let employee_id = employee.id;
    let title = format!("Assign {} to a project", employee.full_name);

    view! {
        <Modal title=title on_close=on_close>
            <form
                class="space-y-3"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_assign.call((employee_id, selected.get_untracked()));
                }
            >
                <InlineErrorMessage error=error />
                <label class="block text-sm font-medium text-gray-700 space-y-1">
                    <span>"Project"</span>
                    <select
                        class="w-full border rounded px-3 py-2 text-sm"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Select project"</option>
                        {move || {
                            projects
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|project| {
                                    let label = format!(
                                        "#{} {} ({})",
                                        project.id,
                                        project.project_type,
                                        project.manager_label()
                                    );
                                    view! { <option value=project.id.to_string()>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm bg-gray-100 text-gray-700 hover:bg-gray-200"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "Assign"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
