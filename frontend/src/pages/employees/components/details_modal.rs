use crate::components::{common::Field, modal::Modal};
use crate::models::{Employee, Photo};
use crate::pages::employees::repository::EmployeesRepository;
use crate::utils::media::{MediaHandle, MediaSource};
use leptos::*;

/// Shows an employee photo; the display URL is released when the view is dropped.
#[component]
pub fn EmployeePhoto(photo: Option<Photo>, #[prop(into)] alt: String) -> impl IntoView {
    let handle = photo
        .as_ref()
        .and_then(MediaSource::from_photo)
        .and_then(|source| match MediaHandle::acquire(source) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("photo unavailable: {}", err);
                None
            }
        });
    match handle {
        Some(handle) => {
            let src = handle.src().to_string();
            on_cleanup(move || handle.release());
            view! { <img src=src alt=alt class="h-24 w-24 rounded-full object-cover border" /> }
                .into_view()
        }
        None => view! {
            <div class="h-24 w-24 rounded-full bg-gray-100 flex items-center justify-center text-xs text-gray-500">
                "No photo"
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn EmployeeDetailsModal(
    employee: Employee,
    repository: StoredValue<EmployeesRepository>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = employee.id;
    let fresh = create_local_resource(
        move || id,
        move |id| {
            let repo = repository.get_value();
            async move { repo.get(id).await.ok() }
        },
    );
    let partners = create_local_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.people_partners().await }
        },
    );
    let current = Signal::derive(move || fresh.get().flatten().unwrap_or_else(|| employee.clone()));
    let partner_name = move || {
        let partner_id = current.with(|e| e.people_partner_id);
        partners
            .get()
            .unwrap_or_default()
            .into_iter()
            .find(|partner| Some(partner.id) == partner_id)
            .map(|partner| partner.full_name)
            .or_else(|| partner_id.map(|id| format!("#{}", id)))
            .unwrap_or_default()
    };

    view! {
        <Modal title="Employee details" on_close=on_close wide=true>
            {move || {
                let employee = current.get();
                view! {
                    <div class="flex gap-6 items-start">
                        <EmployeePhoto photo=employee.photo.clone() alt=employee.full_name.clone() />
                        <dl class="grid grid-cols-2 gap-4 flex-1">
                            <Field label="ID" value=employee.id.to_string() />
                            <Field label="Full name" value=employee.full_name.clone() />
                            <Field label="Subdivision" value=employee.subdivision.clone() />
                            <Field label="Position" value=employee.position.clone() />
                            <Field label="People partner" value=partner_name() />
                            <Field label="Status" value=employee.status_label() />
                            <Field label="Out-of-office balance" value=employee.balance_label() />
                        </dl>
                    </div>
                }
            }}
        </Modal>
    }
}
