//! Shared navigation bar. Static markup, no data dependency.

use crate::domain::DomainError;
use crate::ports::Container;
use maud::{Markup, html};

/// Element that receives the navbar.
pub const NAVBAR_ID: &str = "navbar-placeholder";

/// Site pages linked from the navbar: (href, label).
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("this-week.html", "This Week"),
    ("full-calendar.html", "Full Calendar"),
    ("theaters.html", "Theaters"),
];

pub fn navbar_markup() -> Markup {
    html! {
        nav.navbar.navbar-expand-lg.navbar-light.bg-light {
            div.container-fluid {
                a.navbar-brand href="index.html" { "Home" }
                button.navbar-toggler type="button" data-bs-toggle="collapse"
                    data-bs-target="#navbarNav" aria-controls="navbarNav"
                    aria-expanded="false" aria-label="Toggle navigation" {
                    span.navbar-toggler-icon {}
                }
                div.collapse.navbar-collapse #navbarNav {
                    ul.navbar-nav {
                        @for (href, label) in NAV_LINKS {
                            li.nav-item { a.nav-link href=(href) { (label) } }
                        }
                    }
                }
            }
        }
    }
}

/// Replace the container's content with the navbar.
pub fn inject_navbar(container: &mut dyn Container) -> Result<(), DomainError> {
    container.set_inner_html(&navbar_markup().into_string())
}
