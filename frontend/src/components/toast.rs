use crate::state::toast::{use_toaster, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
    }
}

/// Bottom-left stack of notifications; a click dismisses one early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    view! {
        <div class="fixed bottom-4 left-4 z-[80] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!(
                        "rounded-md px-4 py-3 shadow-lg text-sm cursor-pointer {}",
                        toast_class(toast.kind)
                    );
                    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=class
                            role=role
                            on:click=move |_| toaster.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::{provide_toaster, Notify};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn host_renders_pending_toasts() {
        let html = render_to_string(|| {
            let toaster = provide_toaster();
            toaster.success("Employee added");
            toaster.error("Employee not found");
            view! { <ToastHost /> }
        });
        assert!(html.contains("Employee added"));
        assert!(html.contains("Employee not found"));
        assert!(html.contains("role=\"alert\""));
    }
}
