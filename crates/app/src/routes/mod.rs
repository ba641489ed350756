pub mod home;
pub mod login;
pub mod lookup;
pub mod not_found;
pub mod reports;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{Navbar, NavbarBrand, NavbarNav};

use crate::components::footer::SiteFooter;
use crate::notify::use_notifier;
use crate::session::{use_api, use_session};

use not_found::NotFound;

/// Application routes. Paths match the original site so existing
/// bookmarks keep working.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/report-cc")]
    SubmitReport {},
    #[route("/all-reports")]
    ReportList {},
    #[route("/report/:id")]
    ReportDetail { id: String },
    #[route("/look-up")]
    Lookup {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shell layout: top navbar, routed content, site footer.
#[component]
fn AppLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell",
            TopNav {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}

/// Role-conditional navigation bar.
///
/// Report submission and the listing need a session; the fraud lookup is
/// public. Logout is the only side-effecting control here.
#[component]
fn TopNav() -> Element {
    let mut session = use_session();
    let client = use_api();
    let notifier = use_notifier();

    let theme = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Dark),
    });

    let authenticated = session.is_authenticated();
    let mode_label = match *theme.mode.read() {
        ThemeMode::Dark => "Light",
        ThemeMode::Light => "Dark",
    };

    let handle_logout = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            match client.logout().await {
                Ok(resp) => {
                    session.clear();
                    notifier.success(resp.message_or("Logged out successfully"));
                    navigator().push(Route::Login {});
                }
                Err(err) => {
                    notifier.error(err.message_or("Logout failed"));
                }
            }
        });
    };

    rsx! {
        Navbar {
            NavbarBrand {
                Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                "CyberLens"
            }
            NavbarNav {
                Link { to: Route::Home {}, class: "lens-navbar-item", active_class: "active", "Home" }
                if authenticated {
                    Link { to: Route::SubmitReport {}, class: "lens-navbar-item", active_class: "active", "Report Crime" }
                    Link { to: Route::ReportList {}, class: "lens-navbar-item", active_class: "active", "All Reports" }
                }
                Link { to: Route::Lookup {}, class: "lens-navbar-item", active_class: "active", "Fraud Lookup" }
                if authenticated {
                    button { class: "lens-navbar-item danger", onclick: handle_logout, "Logout" }
                } else {
                    Link { to: Route::Login {}, class: "lens-navbar-item", active_class: "active", "Log In" }
                }
                button {
                    class: "lens-navbar-item",
                    onclick: move |_| {
                        let mut theme = theme;
                        let next = theme.mode.read().toggled();
                        theme.mode.set(next);
                        theme.apply();
                    },
                    "{mode_label}"
                }
            }
        }
    }
}

// Route components

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn Login() -> Element {
    login::LoginPage()
}

#[component]
fn SubmitReport() -> Element {
    reports::submit::SubmitReportPage()
}

#[component]
fn ReportList() -> Element {
    reports::list::ReportListPage()
}

#[component]
fn ReportDetail(id: String) -> Element {
    rsx! { reports::detail::ReportDetailPage { id: id } }
}

#[component]
fn Lookup() -> Element {
    lookup::LookupPage()
}
