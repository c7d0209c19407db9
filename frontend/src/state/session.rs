use crate::{
    api::{ApiClient, ApiError},
    models::Role,
    pages::role_select::repository::RoleSelectionRepository,
    state::toast::use_toaster,
};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

const ROLE_KEY: &str = "role";
const NAME_KEY: &str = "name";
const ID_KEY: &str = "id";

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub employee_id: i64,
    pub full_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.role)
    }

    pub fn employee_id(&self) -> Option<i64> {
        self.session.as_ref().map(|session| session.employee_id)
    }
}

/// String key/value persistence for the selected session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        crate::utils::storage::local_storage()
            .ok()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        crate::utils::storage::local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        crate::utils::storage::local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("No localStorage".to_string())
    }

    fn remove(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage used by the session lifecycle; defaults to the browser's localStorage.
#[derive(Clone)]
pub struct SessionStorage(pub Rc<dyn KeyValueStore>);

impl Default for SessionStorage {
    fn default() -> Self {
        Self(Rc::new(BrowserStorage))
    }
}

pub fn load_session(store: &dyn KeyValueStore) -> Option<Session> {
    let role = Role::parse(&store.get(ROLE_KEY)?)?;
    let full_name = store.get(NAME_KEY)?;
    let employee_id = store.get(ID_KEY)?.trim().parse().ok()?;
    Some(Session {
        employee_id,
        full_name,
        role,
    })
}

pub fn save_session(store: &dyn KeyValueStore, session: &Session) -> Result<(), String> {
    store.set(ROLE_KEY, session.role.label())?;
    store.set(NAME_KEY, &session.full_name)?;
    store.set(ID_KEY, &session.employee_id.to_string())
}

pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), String> {
    for key in [ROLE_KEY, NAME_KEY, ID_KEY] {
        store.remove(key)?;
    }
    Ok(())
}

fn create_session_context(storage: &SessionStorage) -> SessionContext {
    let restored = load_session(storage.0.as_ref());
    if let Some(session) = &restored {
        log::debug!("restored session for {} ({})", session.full_name, session.role);
    }
    create_signal(SessionState {
        session: restored,
        loading: false,
    })
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] storage: Option<SessionStorage>,
    children: Children,
) -> impl IntoView {
    let storage = storage.unwrap_or_default();
    let ctx = create_session_context(&storage);
    provide_context(storage);
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn use_session_storage() -> SessionStorage {
    use_context::<SessionStorage>().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSelection {
    pub full_name: String,
    pub role: Role,
}

pub async fn select_role(
    selection: RoleSelection,
    repo: &RoleSelectionRepository,
    storage: &dyn KeyValueStore,
    set_state: WriteSignal<SessionState>,
) -> Result<Session, ApiError> {
    set_state.update(|state| state.loading = true);

    match repo.resolve(&selection.full_name, selection.role).await {
        Ok(session) => {
            if let Err(err) = save_session(storage, &session) {
                log::warn!("session not persisted: {}", err);
            }
            set_state.update(|state| {
                state.session = Some(session.clone());
                state.loading = false;
            });
            Ok(session)
        }
        Err(error) => {
            set_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn end_session(storage: &dyn KeyValueStore, set_state: WriteSignal<SessionState>) {
    if let Err(err) = clear_session(storage) {
        log::warn!("stored session not cleared: {}", err);
    }
    set_state.set(SessionState::default());
}

pub fn use_select_role_action() -> Action<RoleSelection, Result<Session, ApiError>> {
    let (_session, set_session) = use_session();
    let storage = use_session_storage();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = RoleSelectionRepository::new(Rc::new(api), Rc::new(use_toaster()));

    create_action(move |selection: &RoleSelection| {
        let selection = selection.clone();
        let repo = repo.clone();
        let storage = storage.clone();
        async move { select_role(selection, &repo, storage.0.as_ref(), set_session).await }
    })
}
