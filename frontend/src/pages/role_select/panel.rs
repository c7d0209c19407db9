use super::view_model::use_role_select_view_model;
use crate::models::Role;
use crate::state::session::use_session;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RoleSelectPanel() -> impl IntoView {
    let vm = use_role_select_view_model();
    let (session, _) = use_session();
    let pending = vm.select_action.pending();
    let current = move || session.get().session;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full space-y-6 bg-white shadow rounded-lg p-8">
                <div>
                    <h1 class="text-center text-3xl font-extrabold text-gray-900">{"Out of Office"}</h1>
                    <p class="mt-2 text-center text-sm text-gray-600">{"Choose the role you are working as"}</p>
                </div>
                {move || current().map(|s| view! {
                    <p class="text-sm text-gray-700 text-center">
                        {format!("Signed in as {} ({}). ", s.full_name, s.role)}
                        <a href="/dashboard" class="text-blue-600 hover:underline">{"Continue"}</a>
                    </p>
                })}
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="full-name" class="block text-sm font-medium text-gray-700">{"Full name"}</label>
                        <input
                            id="full-name"
                            type="text"
                            class="mt-1 block w-full border rounded-md px-3 py-2"
                            prop:value=move || vm.full_name.get()
                            on:input=move |ev| vm.full_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="role" class="block text-sm font-medium text-gray-700">{"Role"}</label>
                        <select
                            id="role"
                            class="mt-1 block w-full border rounded-md px-3 py-2"
                            prop:value=move || vm.role.get()
                            on:change=move |ev| vm.role.set(event_target_value(&ev))
                        >
                            <option value="">{"Select a role"}</option>
                            {Role::ALL
                                .iter()
                                .map(|role| view! { <option value=role.label()>{role.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <Show when=move || vm.error.get().is_some()>
                        <p class="text-sm text-red-600" role="alert">{move || vm.error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Checking..." } else { "Continue" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
