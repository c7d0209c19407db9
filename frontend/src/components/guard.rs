use crate::models::Screen;
use crate::state::session::{use_session, SessionState};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    NoSession,
    Forbidden,
}

pub fn access_for(state: &SessionState, screen: Option<Screen>) -> Access {
    match (state.role(), screen) {
        (None, _) => Access::NoSession,
        (Some(_), None) => Access::Granted,
        (Some(role), Some(screen)) if role.can_open(screen) => Access::Granted,
        (Some(_), Some(_)) => Access::Forbidden,
    }
}

#[component]
fn AccessNotice(access: Access) -> impl IntoView {
    let (message, href, link) = match access {
        Access::Forbidden => (
            "Your role cannot open this screen.",
            "/dashboard",
            "Back to dashboard",
        ),
        _ => ("Select a role to continue.", "/", "Choose a role"),
    };
    view! {
        <div class="max-w-md mx-auto mt-16 bg-white shadow rounded-lg p-6 text-center space-y-3">
            <p class="text-gray-700">{message}</p>
            <a href=href class="text-blue-600 hover:underline">{link}</a>
        </div>
    }
}

/// Renders `children` only while a session exists and, when `screen` is
/// given, only if the session's role may open it.
#[component]
pub fn RequireSession(
    #[prop(optional)] screen: Option<Screen>,
    children: ChildrenFn,
) -> impl IntoView {
    let (session, _) = use_session();
    let access = create_memo(move |_| session.with(|state| access_for(state, screen)));
    view! {
        <Show
            when=move || access.get() == Access::Granted
            fallback=move || view! { <AccessNotice access=access.get() /> }
        >
            {children()}
        </Show>
    }
}
