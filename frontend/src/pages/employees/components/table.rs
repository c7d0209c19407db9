use crate::api::ApiError;
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
    sort_header::SortableHeader,
};
use crate::models::{Employee, EmployeeSortKey, Role, SortOrder};
use crate::pages::employees::utils::{row_actions, EmployeeAction};
use leptos::*;

const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn EmployeesTable(
    rows: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    sort: Signal<SortOrder<EmployeeSortKey>>,
    role: Signal<Option<Role>>,
    on_sort: Callback<EmployeeSortKey>,
    on_select: Callback<Employee>,
    on_action: Callback<(EmployeeAction, Employee)>,
) -> impl IntoView {
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
                <EmptyState title="No employees found" description="Adjust the filters or add a new employee." />
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <SortableHeader label="Name" column=EmployeeSortKey::FullName sort=sort on_sort=on_sort />
                                <SortableHeader label="Subdivision" column=EmployeeSortKey::Subdivision sort=sort on_sort=on_sort />
                                <SortableHeader label="Position" column=EmployeeSortKey::Position sort=sort on_sort=on_sort />
                                <SortableHeader label="Status" column=EmployeeSortKey::IsActive sort=sort on_sort=on_sort />
                                <SortableHeader label="Balance" column=EmployeeSortKey::OutOfOfficeBalance sort=sort on_sort=on_sort />
                                <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                let role = role.get();
                                rows.get()
                                    .into_iter()
                                    .map(|employee| employee_row(employee, role, on_select, on_action))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn employee_row(
    employee: Employee,
    role: Option<Role>,
    on_select: Callback<Employee>,
    on_action: Callback<(EmployeeAction, Employee)>,
) -> impl IntoView {
    let actions = role.map(|role| row_actions(role, &employee)).unwrap_or_default();
    let selected = employee.clone();
    let buttons = actions
        .into_iter()
        .map(|action| {
            let target = employee.clone();
            let label = action.label(&employee);
            view! {
                <button
                    type="button"
                    class="text-blue-600 hover:underline"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_action.call((action, target.clone()));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr class="hover:bg-gray-50 cursor-pointer" on:click=move |_| on_select.call(selected.clone())>
            <td class=CELL>{employee.full_name.clone()}</td>
            <td class=CELL>{employee.subdivision.clone()}</td>
            <td class=CELL>{employee.position.clone()}</td>
            <td class=CELL>{employee.status_label()}</td>
            <td class=CELL>{employee.balance_label()}</td>
            <td class=CELL>
                <div class="flex gap-3">{buttons}</div>
            </td>
        </tr>
    }
}
