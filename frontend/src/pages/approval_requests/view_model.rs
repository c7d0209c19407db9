use super::repository::ApprovalRequestsRepository;
use super::utils::{apply_filter, ApprovalAction, ApprovalFilterMsg, ApprovalModal};
use crate::api::{ApiClient, ApiError};
use crate::models::{ApprovalRequest, ApprovalRequestFilter, Role};
use crate::state::{
    list::ListHandle,
    mutation::{apply_command_result, apply_modal_result},
    session::use_session,
    toast::use_toaster,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub id: i64,
    pub comment: String,
}

#[derive(Clone, Copy)]
pub struct ApprovalRequestsViewModel {
    pub list: ListHandle<ApprovalRequestFilter, ApprovalRequest>,
    pub modal: RwSignal<ApprovalModal>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub role: Signal<Option<Role>>,
    pub repository: StoredValue<ApprovalRequestsRepository>,
    pub approve_action: Action<i64, Result<String, ApiError>>,
    pub reject_action: Action<Rejection, Result<String, ApiError>>,
}

impl ApprovalRequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();
        let repository = store_value(ApprovalRequestsRepository::new(
            Rc::new(api),
            Rc::new(toaster),
        ));
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));

        let list = ListHandle::new(
            ApprovalRequestFilter::default(),
            move |filter: ApprovalRequestFilter| {
                let repo = repository.get_value();
                async move { repo.list(&filter).await }
            },
        );
        let modal = create_rw_signal(ApprovalModal::Closed);
        let form_error = create_rw_signal(None::<ApiError>);

        let approve_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                repo.approve(id)
                    .await
                    .map(|_| format!("Request #{} approved", id))
            }
        });
        let reject_action = create_action(move |rejection: &Rejection| {
            let repo = repository.get_value();
            let rejection = rejection.clone();
            async move {
                repo.reject(rejection.id, &rejection.comment)
                    .await
                    .map(|_| format!("Request #{} rejected", rejection.id))
            }
        });

        create_effect(move |_| list.refetch());
        create_effect(move |_| {
            apply_command_result(approve_action.value().get(), &toaster, || list.refetch());
        });
        create_effect(move |_| {
            apply_modal_result(reject_action.value().get(), modal, form_error, &toaster, || {
                list.refetch()
            });
        });

        Self {
            list,
            modal,
            form_error,
            role,
            repository,
            approve_action,
            reject_action,
        }
    }

    pub fn on_filter(&self, msg: ApprovalFilterMsg) {
        self.list.change_filter(|filter| apply_filter(filter, msg));
    }

    pub fn open(&self, modal: ApprovalModal) {
        self.form_error.set(None);
        self.modal.set(modal);
    }

    pub fn close(&self) {
        self.open(ApprovalModal::Closed);
    }

    pub fn on_row_action(&self, action: ApprovalAction, request: ApprovalRequest) {
        match action {
            ApprovalAction::Approve => self.approve_action.dispatch(request.id),
            ApprovalAction::Reject => self.open(ApprovalModal::Reject(request)),
        }
    }

    /// Rejects the request shown in the prompt. A blank comment never leaves the client.
    pub fn reject(&self, comment: String) {
        let ApprovalModal::Reject(request) = self.modal.get_untracked() else {
            return;
        };
        if comment.trim().is_empty() {
            self.form_error
                .set(Some(ApiError::validation("A comment is required to reject a request")));
            return;
        }
        self.reject_action.dispatch(Rejection {
            id: request.id,
            comment,
        });
    }
}

pub fn use_approval_requests_view_model() -> ApprovalRequestsViewModel {
    match use_context::<ApprovalRequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ApprovalRequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
