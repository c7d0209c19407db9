use crate::api::ApiError;
use leptos::*;

pub const TOAST_DURATION_MS: u32 = 3000;
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notify {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self
            .next_id
            .try_update_value(|next| {
                let id = *next;
                *next = next.wrapping_add(1);
                id
            })
            .unwrap_or_default();
        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        self.toasts.try_update(|toasts| {
            toasts.push(toast);
            if toasts.len() > MAX_TOASTS {
                let overflow = toasts.len() - MAX_TOASTS;
                toasts.drain(..overflow);
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn schedule_dismiss(&self, id: u64) {
        #[cfg(target_arch = "wasm32")]
        {
            let toaster = *self;
            gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id))
                .forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

impl Notify for Toaster {
    fn notify(&self, kind: ToastKind, message: &str) {
        let id = self.push(kind, message);
        self.schedule_dismiss(id);
    }
}

/// Logs a failed call and raises an error toast with the server's message.
pub fn report_failure<T>(
    notifier: &dyn Notify,
    action: &str,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(error) = &result {
        log::error!("{} failed: {} ({})", action, error.error, error.code);
        notifier.error(&error.error);
    }
    result
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(Toaster::new)
}
