use crate::components::layout::Layout;
use crate::pages::dashboard::{
    components::TileCard,
    utils::{dashboard_title, tiles_for},
};
use crate::state::session::use_session;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, _) = use_session();
    let role = move || session.with(|state| state.role());

    view! {
        <Layout>
            <div class="space-y-6">
                {move || role().map(|role| view! {
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">{dashboard_title(role)}</h1>
                        <p class="mt-1 text-sm text-gray-600">"Pick a list to work with."</p>
                    </div>
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                        {tiles_for(role)
                            .into_iter()
                            .map(|tile| view! { <TileCard tile=tile /> })
                            .collect_view()}
                    </div>
                })}
            </div>
        </Layout>
    }
}
