use shared_ui::{use_toast, ToastOptions, Toasts};

/// Flavor of an outcome notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Capability for surfacing outcome notifications to the user.
///
/// Views receive this through [`use_notifier`] instead of importing a
/// side-effecting function, so the mechanism stays swappable.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
}

impl Notifier {
    pub fn notify(&self, kind: NotifyKind, message: impl Into<String>) {
        match kind {
            NotifyKind::Success => self.toasts.success(message.into(), ToastOptions::new()),
            NotifyKind::Error => self.toasts.error(message.into(), ToastOptions::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotifyKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotifyKind::Error, message);
    }
}

/// Hook to obtain the notification capability.
pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toast(),
    }
}
