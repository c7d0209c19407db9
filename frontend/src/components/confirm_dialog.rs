use crate::components::modal::Modal;
use leptos::*;

const PRIMARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50";
const DANGER_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-red-600 text-white hover:bg-red-700 disabled:opacity-50";
const CANCEL_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-700 hover:bg-gray-200";

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive { DANGER_BUTTON } else { PRIMARY_BUTTON };
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));

    view! {
        <Show when=move || is_open.get()>
            <Modal title=title on_close=on_cancel>
                <p class="text-sm text-gray-600">{move || message.get()}</p>
                <div class="flex justify-end gap-2">
                    <button type="button" class=CANCEL_BUTTON on:click=move |_| on_cancel.call(())>
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class=confirm_class
                        disabled=move || confirm_disabled.get()
                        on:click=move |_| on_confirm.call(())
                    >
                        {move || confirm_text.get()}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}

/// Asks for a free-text value that must not be blank, such as a rejection comment.
#[component]
pub fn PromptDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] label: MaybeSignal<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: MaybeSignal<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let value = create_rw_signal(String::new());
    let title = Signal::derive(move || title.get());
    let label = Signal::derive(move || label.get());
    let submit_text = Signal::derive(move || label_or(submit_label.get(), "Submit"));
    let blank = move || value.with(|text| text.trim().is_empty());

    create_effect(move |_| {
        if !is_open.get() {
            value.set(String::new());
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <Modal title=title on_close=on_cancel>
                <label class="block text-sm font-medium text-gray-700">
                    {move || label.get()}
                    <textarea
                        rows="3"
                        class="mt-1 block w-full border rounded-md px-3 py-2"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="flex justify-end gap-2">
                    <button type="button" class=CANCEL_BUTTON on:click=move |_| on_cancel.call(())>
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class=DANGER_BUTTON
                        disabled=move || blank() || pending.get()
                        on:click=move |_| {
                            let text = value.get_untracked().trim().to_string();
                            if !text.is_empty() {
                                on_submit.call(text);
                            }
                        }
                    >
                        {move || submit_text.get()}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_label() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete employee"
                    message="Delete Ada Lovelace?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Delete Ada Lovelace?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn closed_dialogs_render_nothing() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| false);
            view! {
                <PromptDialog
                    is_open=is_open
                    title="Reject request"
                    label="Comment"
                    on_submit=Callback::new(|_: String| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn prompt_dialog_renders_label_and_submit() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <PromptDialog
                    is_open=is_open
                    title="Reject request"
                    label="Comment"
                    submit_label="Reject"
                    on_submit=Callback::new(|_: String| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Reject request"));
        assert!(html.contains("Comment"));
        assert!(html.contains("Reject"));
        assert!(html.contains("disabled"));
    }
}
