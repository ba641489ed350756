use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::use_session;

/// Landing page.
#[component]
pub fn HomePage() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-hero",
            h1 { class: "home-title", "CyberLens" }
            p { class: "home-tagline",
                "Report cyber crime, track investigations, and check phone numbers, emails and URLs against known fraud."
            }
            div { class: "home-actions",
                if session.is_authenticated() {
                    Link { to: Route::SubmitReport {},
                        Button { variant: ButtonVariant::Primary, "Report Crime" }
                    }
                } else {
                    Link { to: Route::Login {},
                        Button { variant: ButtonVariant::Primary, "Log In" }
                    }
                }
                Link { to: Route::Lookup {},
                    Button { variant: ButtonVariant::Outline, "Fraud Lookup" }
                }
            }
        }
    }
}
