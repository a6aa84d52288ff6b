//! Default page template, used when no template file is configured.

use super::navbar::NAVBAR_ID;
use super::renderer::FILMS_LIST_ID;
use maud::{DOCTYPE, PreEscaped, html};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

const CSS: &str = r#"
.film-item { margin-bottom: 2rem; }
.showtime-item.almost-sold-out { background-color: #fff3cd; font-weight: 600; }
"#;

/// Page with empty `navbar-placeholder` and `films-list` elements.
pub fn default_template() -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "This Week" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                style { (PreEscaped(CSS)) }
            }
            body {
                div id=(NAVBAR_ID) {}
                main.container.mt-4 {
                    h1 { "Showtimes This Week" }
                    div id=(FILMS_LIST_ID) {}
                }
                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::PageDocument;

    #[test]
    fn test_default_template_has_both_placeholders() {
        let doc = PageDocument::new(default_template());
        assert!(doc.has_element(NAVBAR_ID));
        assert!(doc.has_element(FILMS_LIST_ID));
    }
}
