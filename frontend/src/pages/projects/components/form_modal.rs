use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, modal::Modal};
use crate::models::PROJECT_TYPES;
use crate::pages::projects::{
    repository::ProjectsRepository,
    utils::{ProjectForm, ProjectFormMsg},
};
use leptos::*;

const INPUT: &str = "w-full border rounded px-3 py-2 text-sm";
const LABEL: &str = "block text-sm font-medium text-gray-700 space-y-1";

#[component]
pub fn ProjectFormModal(
    #[prop(into)] title: String,
    initial: ProjectForm,
    repository: StoredValue<ProjectsRepository>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_save: Callback<ProjectForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = create_rw_signal(initial);
    let update = move |msg: ProjectFormMsg| form.update(|f| f.apply(msg));
    let managers = create_local_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.project_managers().await }
        },
    );

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
                <label class=LABEL>
                    <span>"Project type"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.project_type.clone())
                        on:change=move |ev| update(ProjectFormMsg::ProjectType(event_target_value(&ev)))
                    >
                        <option value="">"Select type"</option>
                        {PROJECT_TYPES
                            .iter()
                            .map(|name| view! { <option value=*name>{*name}</option> })
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
                            on:change=move |ev| update(ProjectFormMsg::StartDate(event_target_value(&ev)))
                        />
                    </label>
                    <label class=LABEL>
                        <span>"End date"</span>
                        <input
                            type="date"
                            class=INPUT
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:change=move |ev| update(ProjectFormMsg::EndDate(event_target_value(&ev)))
                        />
                    </label>
                </div>
                <label class=LABEL>
                    <span>"Project manager"</span>
                    <select
                        class=INPUT
                        prop:value=move || form.with(|f| f.project_manager_id.clone())
                        on:change=move |ev| update(ProjectFormMsg::ProjectManager(event_target_value(&ev)))
                    >
                        <option value="">"Select manager"</option>
                        {move || {
                            managers
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|manager| view! {
                                    <option value=manager.id.to_string()>{manager.full_name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class=LABEL>
                    <span>"Comment"</span>
                    <textarea
                        class=INPUT
                        rows="3"
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=move |ev| update(ProjectFormMsg::Comment(event_target_value(&ev)))
                    ></textarea>
                </label>
                <label class="flex items-center gap-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.status)
                        on:change=move |ev| update(ProjectFormMsg::Status(event_target_checked(&ev)))
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
