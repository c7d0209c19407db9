use crate::state::session::{end_session, use_session, use_session_storage};
use crate::utils::storage::redirect;
use leptos::*;

const NAV_LINK: &str = "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let storage = use_session_storage();
    let current = move || session.get().session;

    let on_switch_role = move |_| {
        end_session(storage.0.as_ref(), set_session);
        redirect("/");
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-gray-900">"Out of Office"</a>
                    {move || current().map(|s| {
                        let role = s.role;
                        view! {
                            <nav class="flex items-center space-x-2">
                                <a href="/dashboard" class=NAV_LINK>"Dashboard"</a>
                                {role
                                    .screens()
                                    .iter()
                                    .map(|screen| view! {
                                        <a href=screen.path() class=NAV_LINK>{screen.title_for(role)}</a>
                                    })
                                    .collect_view()}
                                <span class="text-sm text-gray-500 px-3">
                                    {format!("{} · {}", s.full_name, role)}
                                </span>
                                <button type="button" class=NAV_LINK on:click=on_switch_role.clone()>
                                    "Switch role"
                                </button>
                            </nav>
                        }
                    })}
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}
