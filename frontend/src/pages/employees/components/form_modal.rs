use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, modal::Modal};
use crate::models::{POSITIONS, SUBDIVISIONS};
use crate::pages::employees::{
    repository::EmployeesRepository,
    utils::{EmployeeForm, EmployeeFormMsg},
};
use leptos::*;

const INPUT: &str = "w-full border rounded px-3 py-2 text-sm";
const LABEL: &str = "block text-sm font-medium text-gray-700 space-y-1";

#[component]
pub fn EmployeeFormModal(
    #[prop(into)] title: String,
    initial: EmployeeForm,
    repository: StoredValue<EmployeesRepository>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_save: Callback<EmployeeForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = create_rw_signal(initial);
    let update = move |msg: EmployeeFormMsg| form.update(|f| f.apply(msg));
    let partners = create_local_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.people_partners().await }
        },
    );

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save.call(form.get_untracked());
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="space-y-3" on:submit=on_submit>
                <InlineErrorMessage error=error />
                <label class=LABEL>
                    <span>"Full name"</span>
                    <input
                        class=INPUT
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| update(EmployeeFormMsg::FullName(event_target_value(&ev)))
                    />
                </label>
                <label class=LABEL>
                    <span>"Subdivision"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.subdivision.clone())
                        on:change=move |ev| update(EmployeeFormMsg::Subdivision(event_target_value(&ev)))
                    >
                        <option value="">"Select subdivision"</option>
                        {SUBDIVISIONS
                            .iter()
                            .map(|name| view! { <option value=*name>{*name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class=LABEL>
                    <span>"Position"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.position.clone())
                        on:change=move |ev| update(EmployeeFormMsg::Position(event_target_value(&ev)))
                    >
                        <option value="">"Select position"</option>
                        {POSITIONS
                            .iter()
                            .map(|name| view! { <option value=*name>{*name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class=LABEL>
                    <span>"People partner"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.people_partner_id.clone())
                        on:change=move |ev| update(EmployeeFormMsg::PeoplePartner(event_target_value(&ev)))
                    >
                        <option value="">"None"</option>
                        {move || {
                            partners
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|partner| view! {
                                    <option value=partner.id.to_string()>{partner.full_name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class=LABEL>
                    <span>"Out-of-office balance"</span>
                    <input
                        type="number"
                        min="0"
                        step="0.5"
                        class=INPUT
                        prop:value=move || form.with(|f| f.balance.clone())
                        on:input=move |ev| update(EmployeeFormMsg::Balance(event_target_value(&ev)))
                    />
                </label>
                <label class="flex items-center gap-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| update(EmployeeFormMsg::Active(event_target_checked(&ev)))
                    />
                    "Active"
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
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
