use crate::api::ApiError;
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
    sort_header::SortableHeader,
};
use crate::models::{Project, ProjectSortKey, Role, SortOrder};
use crate::pages::projects::utils::{row_actions, ProjectAction};
use crate::utils::time::format_date;
use leptos::*;

const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn ProjectsTable(
    rows: Signal<Vec<Project>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    sort: Signal<SortOrder<ProjectSortKey>>,
    role: Signal<Option<Role>>,
    on_sort: Callback<ProjectSortKey>,
    on_select: Callback<Project>,
    on_action: Callback<(ProjectAction, Project)>,
) -> impl IntoView {
    let read_only = move || role.get().map_or(true, |role| role.is_self_scoped());

    view! {
        <div class="bg-white shadow rounded-lg">
            <Show when=move || error.get().is_some()>
                <div class="px-4 pt-4">
                    <ErrorMessage message=error.get().map(|e| e.error).unwrap_or_default() />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && rows.with(Vec::is_empty)>
                <EmptyState title="No projects found" description="Try widening the start date range." />
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <SortableHeader label="ID" column=ProjectSortKey::Id sort=sort on_sort=on_sort />
                                <SortableHeader label="Type" column=ProjectSortKey::ProjectType sort=sort on_sort=on_sort />
                                <SortableHeader label="Start" column=ProjectSortKey::StartDate sort=sort on_sort=on_sort />
                                <SortableHeader label="End" column=ProjectSortKey::EndDate sort=sort on_sort=on_sort />
                                <SortableHeader label="Manager" column=ProjectSortKey::ProjectManager sort=sort on_sort=on_sort />
                                <SortableHeader label="Status" column=ProjectSortKey::Status sort=sort on_sort=on_sort />
                                <Show when=move || !read_only()>
                                    <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Actions"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                let role = role.get();
                                rows.get()
                                    .into_iter()
                                    .map(|project| project_row(project, role, on_select, on_action))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn project_row(
    project: Project,
    role: Option<Role>,
    on_select: Callback<Project>,
    on_action: Callback<(ProjectAction, Project)>,
) -> impl IntoView {
    let actions_cell = role.filter(|role| !role.is_self_scoped()).map(|role| {
        let buttons = row_actions(role, &project)
            .into_iter()
            .map(|action| {
                let target = project.clone();
                view! {
                    <button
                        type="button"
                        class="text-blue-600 hover:underline"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_action.call((action, target.clone()));
                        }
                    >
                        {action.label()}
                    </button>
                }
            })
            .collect_view();
        view! { <td class=CELL><div class="flex gap-3">{buttons}</div></td> }
    });
    let selected = project.clone();
    let end = project.end_date.map(format_date).unwrap_or_else(|| "-".into());

    view! {
        <tr class="hover:bg-gray-50 cursor-pointer" on:click=move |_| on_select.call(selected.clone())>
            <td class=CELL>{project.id}</td>
            <td class=CELL>{project.project_type.clone()}</td>
            <td class=CELL>{format_date(project.start_date)}</td>
            <td class=CELL>{end}</td>
            <td class=CELL>{project.manager_label()}</td>
            <td class=CELL>{project.status_label()}</td>
            {actions_cell}
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::project;
    use crate::test_support::ssr::render_to_string;

    fn render(role: Role) -> String {
        render_to_string(move || {
            view! {
                <ProjectsTable
                    rows=Signal::derive(|| vec![project(5, "Research", true)])
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    sort=Signal::derive(|| SortOrder::ascending(ProjectSortKey::StartDate))
                    role=Signal::derive(move || Some(role))
                    on_sort=Callback::new(|_| {})
                    on_select=Callback::new(|_| {})
                    on_action=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn employee_view_is_read_only() {
        let html = render(Role::Employee);
        assert!(html.contains("Research"));
        assert!(html.contains("Taras Melnyk"));
        assert!(!html.contains("Actions"));
        assert!(!html.contains("Deactivate"));
    }

    #[test]
    fn manager_view_offers_deactivate() {
        let html = render(Role::ProjectManager);
        assert!(html.contains("Actions"));
        assert!(html.contains("Deactivate"));
    }
}
