use crate::pages::dashboard::utils::Tile;
use leptos::*;

#[component]
pub fn TileCard(tile: Tile) -> impl IntoView {
    view! {
        <a
            href=tile.href
            class="relative overflow-hidden block p-6 rounded-2xl bg-white border border-gray-100 shadow hover:shadow-md transition-all duration-300 group"
        >
            <div class="absolute top-0 right-0 -mr-4 -mt-4 w-24 h-24 bg-blue-50 rounded-full opacity-50 group-hover:scale-110 transition-transform"></div>
            <p class="relative z-10 text-lg font-bold text-gray-900">{tile.title}</p>
            <p class="relative z-10 mt-2 text-sm text-gray-600">{tile.description}</p>
        </a>
    }
}
