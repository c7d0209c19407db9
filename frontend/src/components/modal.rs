use leptos::ev::KeyboardEvent;
use leptos::*;

/// Dialog shell shared by every add/edit/details/confirm dialog. Closes on
/// Escape, on a backdrop click and from the header button.
#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let panel_class = if wide {
        "relative z-[51] w-full max-w-2xl rounded-lg bg-white shadow-xl p-6 space-y-4 max-h-[90vh] overflow-y-auto"
    } else {
        "relative z-[51] w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-black/40 cursor-default"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class=panel_class
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-start justify-between gap-3">
                    <h2 class="text-lg font-semibold text-gray-900">{move || title.get()}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-gray-400 hover:text-gray-600"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
