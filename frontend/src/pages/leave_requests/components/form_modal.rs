use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, modal::Modal};
use crate::models::ABSENCE_REASONS;
use crate::pages::leave_requests::{
    repository::LeaveRequestsRepository,
    utils::{LeaveRequestForm, LeaveRequestFormMsg},
};
use leptos::*;

const INPUT: &str = "w-full border rounded px-3 py-2 text-sm";
const LABEL: &str = "block text-sm font-medium text-gray-700 space-y-1";

#[component]
pub fn LeaveRequestFormModal(
    #[prop(into)] title: String,
    initial: LeaveRequestForm,
    /// Employees file for themselves; other roles pick the employee.
    choose_employee: bool,
    repository: StoredValue<LeaveRequestsRepository>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_save: Callback<LeaveRequestForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = create_rw_signal(initial);
    let update = move |msg: LeaveRequestFormMsg| form.update(|f| f.apply(msg));

    let employee_field = choose_employee.then(|| {
        let employees = create_local_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.active_employees().await }
            },
        );
        view! {
            <label class=LABEL>
                <span>"Employee"</span>
                <select
                    class=INPUT
                    prop:value=move || form.with(|f| f.employee_id.clone())
                    on:change=move |ev| update(LeaveRequestFormMsg::Employee(event_target_value(&ev)))
                >
                    <option value="">"Select employee"</option>
                    {move || {
                        employees
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|employee| view! {
                                <option value=employee.id.to_string()>{employee.full_name}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        }
    });

    view! {
        <Modal title=title on_close=on_close>
            <form
                class="space-y-3"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.call(form.get_untracked());
                }
            >
                <InlineErrorMessage error=error />
                {employee_field}
                <label class=LABEL>
                    <span>"Absence reason"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.absence_reason.clone())
                        on:change=move |ev| update(LeaveRequestFormMsg::AbsenceReason(event_target_value(&ev)))
                    >
                        <option value="">"Select reason"</option>
                        {ABSENCE_REASONS
                            .iter()
                            .map(|reason| view! { <option value=*reason>{*reason}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="grid grid-cols-2 gap-3">
                    <label class=LABEL>
                        <span>"Start date"</span>
                        <input
                            type="date"
                            class=INPUT
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:change=move |ev| update(LeaveRequestFormMsg::StartDate(event_target_value(&ev)))
                        />
                    </label>
                    <label class=LABEL>
                        <span>"End date"</span>
                        <input
                            type="date"
                            class=INPUT
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:change=move |ev| update(LeaveRequestFormMsg::EndDate(event_target_value(&ev)))
                        />
                    </label>
                </div>
                <label class=LABEL>
                    <span>"Comment"</span>
                    <textarea
                        class=INPUT
                        rows="3"
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=move |ev| update(LeaveRequestFormMsg::Comment(event_target_value(&ev)))
                    ></textarea>
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
