use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RoleSelectPanel;

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    view! { <RoleSelectPanel /> }
}
