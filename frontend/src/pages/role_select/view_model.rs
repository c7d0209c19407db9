use super::utils::validate_selection;
use crate::api::ApiError;
use crate::state::session::{self, RoleSelection, Session};
use crate::utils::storage::redirect;
use leptos::*;

#[derive(Clone, Copy)]
pub struct RoleSelectViewModel {
    pub full_name: RwSignal<String>,
    pub role: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub select_action: Action<RoleSelection, Result<Session, ApiError>>,
}

impl RoleSelectViewModel {
    pub fn submit(&self) {
        if self.select_action.pending().get_untracked() {
            return;
        }
        match validate_selection(&self.full_name.get_untracked(), &self.role.get_untracked()) {
            Ok(selection) => {
                self.error.set(None);
                self.select_action.dispatch(selection);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }
}

pub fn use_role_select_view_model() -> RoleSelectViewModel {
    let full_name = create_rw_signal(String::new());
    let role = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let select_action = session::use_select_role_action();

    create_effect(move |_| {
        if let Some(result) = select_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    redirect("/dashboard");
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    RoleSelectViewModel {
        full_name,
        role,
        error,
        select_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_selection_sets_error_without_dispatch() {
        with_runtime(|| {
            let vm = use_role_select_view_model();
            vm.role.set("Admin".into());
            vm.submit();
            assert_eq!(vm.error.get().as_deref(), Some("Enter your full name"));
            assert_eq!(vm.select_action.version().get(), 0);
        });
    }
}
