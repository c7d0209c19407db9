use crate::models::{SortKey, SortOrder};
use leptos::*;

/// Clickable column label; clicking reports the column, the owner decides
/// the new order through [`SortOrder::toggled`].
#[component]
pub fn SortableHeader<K: SortKey>(
    #[prop(into)] label: String,
    column: K,
    sort: Signal<SortOrder<K>>,
    on_sort: Callback<K>,
) -> impl IntoView {
    view! {
        <th
            scope="col"
            class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider"
            aria-sort=move || sort.get().aria_sort(column)
        >
            <button
                type="button"
                class="inline-flex items-center gap-1 uppercase hover:text-gray-900"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_sort.call(column);
                }
            >
                {label}
                <span aria-hidden="true">{move || sort.get().indicator(column)}</span>
            </button>
        </th>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::models::EmployeeSortKey;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn active_column_reports_direction() {
        let html = render_to_string(|| {
            let sort = Signal::derive(|| SortOrder {
                by: EmployeeSortKey::Position,
                ascending: false,
            });
            view! {
                <tr>
                    <SortableHeader label="Position" column=EmployeeSortKey::Position sort=sort on_sort=Callback::new(|_| {}) />
                    <SortableHeader label="Name" column=EmployeeSortKey::FullName sort=sort on_sort=Callback::new(|_| {}) />
                </tr>
            }
        });
        assert!(html.contains("aria-sort=\"descending\""));
        assert!(html.contains("aria-sort=\"none\""));
        assert!(html.contains("▼"));
    }
}
