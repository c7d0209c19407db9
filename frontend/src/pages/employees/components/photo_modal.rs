use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, modal::Modal};
use crate::models::Employee;
use crate::pages::employees::view_model::PhotoUpload;
use leptos::*;

#[cfg(target_arch = "wasm32")]
async fn read_file(file: web_sys::File) -> Result<(String, Vec<u8>), String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{:?}", err))?;
    Ok((file.name(), js_sys::Uint8Array::new(&buffer).to_vec()))
}

#[component]
pub fn UploadPhotoModal(
    employee: Employee,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_upload: Callback<PhotoUpload>,
    on_close: Callback<()>,
) -> impl IntoView {
    let chosen = create_rw_signal(None::<(String, Vec<u8>)>);
    let employee_id = employee.id;
    let title = format!("Upload photo for {}", employee.full_name);

    let on_file = move |ev: ev::Event| {
        #[cfg(target_arch = "wasm32")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                spawn_local(async move {
                    match read_file(file).await {
                        Ok(selection) => chosen.set(Some(selection)),
                        Err(err) => log::error!("failed to read photo: {}", err),
                    }
                });
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ev;
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (file_name, bytes) = chosen.get_untracked().unwrap_or_default();
        on_upload.call(PhotoUpload {
            employee_id,
            file_name,
            bytes,
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="space-y-3" on:submit=on_submit>
                <InlineErrorMessage error=error />
                <input
                    type="file"
                    accept="image/png,image/jpeg,image/gif,image/bmp"
                    class="block w-full text-sm"
                    on:change=on_file
                />
                <p class="text-xs text-gray-500">
                    {move || chosen.with(|c| c.as_ref().map(|(name, _)| name.clone()).unwrap_or_else(|| "No file selected".into()))}
                </p>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm bg-gray-100 text-gray-700 hover:bg-gray-200"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "Upload"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
