use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Session context: the authenticated user for this browser tab.
///
/// Created once by the root `App` component and provided through context.
/// Read by many views; written only by the login and logout flows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }

    /// Snapshot of the current user, if any.
    pub fn user(&self) -> Option<AuthUser> {
        self.current_user.read().clone()
    }

    /// Role of the current user. `None` means anonymous, which is not the
    /// same as `Role::User`.
    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook to access the API adapter.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook: whether the current user may edit report statuses.
pub fn use_can_edit_status() -> bool {
    use_session()
        .role()
        .map(|r| r.can_edit_status())
        .unwrap_or(false)
}
