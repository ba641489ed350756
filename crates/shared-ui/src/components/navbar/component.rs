use dioxus::prelude::*;

/// Top navigation bar shell.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "lens-navbar",
            {children}
        }
    }
}

/// Brand mark on the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "lens-navbar-brand", {children} }
    }
}

/// Link group inside the navbar. Children are router `Link`s (or buttons)
/// styled with the `lens-navbar-item` class.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        nav { class: "lens-navbar-nav", {children} }
    }
}
