use crate::{api::ApiError, state::toast::Notify};
use leptos::*;

/// Outcome of a modal save: success closes the modal, toasts and refetches;
/// failure keeps the modal open with the error shown inline.
pub fn apply_modal_result<M: Default + 'static>(
    result: Option<Result<String, ApiError>>,
    modal: RwSignal<M>,
    form_error: RwSignal<Option<ApiError>>,
    notifier: &dyn Notify,
    refetch: impl FnOnce(),
) {
    match result {
        Some(Ok(message)) => {
            form_error.set(None);
            modal.set(M::default());
            notifier.success(&message);
            refetch();
        }
        Some(Err(error)) => form_error.set(Some(error)),
        None => {}
    }
}

/// Outcome of a row command (delete, toggle, submit, ...). Failures were
/// already reported by the repository.
pub fn apply_command_result(
    result: Option<Result<String, ApiError>>,
    notifier: &dyn Notify,
    refetch: impl FnOnce(),
) {
    if let Some(Ok(message)) = result {
        notifier.success(&message);
        refetch();
    }
}
