use dioxus::prelude::*;

/// Site footer with brand and static links.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./footer.css") }
        footer { class: "site-footer",
            div { class: "site-footer-row",
                span { class: "site-footer-brand", "CyberLens" }
                span { class: "site-footer-copy", "© 2026 CyberLens. All rights reserved." }
            }
            div { class: "site-footer-links",
                a { href: "#", "Privacy Policy" }
                span { " | " }
                a { href: "#", "Terms of Service" }
            }
        }
    }
}
