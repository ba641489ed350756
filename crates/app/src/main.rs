use dioxus::prelude::*;

mod components;
mod fetch;
mod format_helpers;
mod notify;
mod routes;
mod session;

use api::{ApiClient, ApiConfig};
use routes::Route;
use session::{use_api, use_session, SessionState};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Context lifecycle: the session, the API adapter, and the toast layer
    // are created here and live as long as the application does.
    use_context_provider(|| ApiClient::new(ApiConfig::from_env()));
    use_context_provider(SessionState::new);

    let client = use_api();
    let mut session = use_session();

    // Restore the backend session once at startup. Any failure just means
    // the visitor stays anonymous.
    use_future(move || {
        let client = client.clone();
        async move {
            match client.current_user().await {
                Ok(resp) if resp.success => {
                    if let Some(user) = resp.user {
                        tracing::info!(user = %user.email, "session restored");
                        session.set_user(user);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(%err, "no session to restore");
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
