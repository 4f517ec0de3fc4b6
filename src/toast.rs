use leptos::*;
#[cfg(target_arch = "wasm32")]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Sink for transient user-visible notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: ToastKind, message: &str) {
        (**self).notify(kind, message);
    }
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, kind: ToastKind, message: &str) {
        let id = self.push(kind, message);
        self.schedule_dismiss(id);
    }
}

impl Toaster {
    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
    }

    // timers need a browser window; elsewhere a toast stays until dismissed
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn ToastOutlet() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            role="status"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let runtime = create_runtime();

        let toaster = Toaster::new();
        let first = toaster.push(ToastKind::Error, "Invalid credentials");
        let second = toaster.push(ToastKind::Success, "Logged in!");
        assert_ne!(first, second);
        assert_eq!(toaster.toasts().get_untracked().len(), 2);

        toaster.dismiss(first);
        let remaining = toaster.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "Logged in!");
        assert_eq!(remaining[0].kind, ToastKind::Success);

        runtime.dispose();
    }

    #[test]
    fn notify_pushes_toast() {
        let runtime = create_runtime();

        let toaster = Toaster::new();
        toaster.notify(ToastKind::Error, "Invalid credentials");
        toaster.notify(ToastKind::Success, "Logged in!");

        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Invalid credentials");
        assert_eq!(toasts[1].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "Logged in!");
        assert_ne!(toasts[0].id, toasts[1].id);

        runtime.dispose();
    }

    #[test]
    fn use_toaster_shares_provided_instance() {
        let runtime = create_runtime();

        let provided = provide_toaster();
        use_toaster().notify(ToastKind::Success, "Logged in!");
        assert_eq!(provided.toasts().get_untracked().len(), 1);

        runtime.dispose();
    }
}
