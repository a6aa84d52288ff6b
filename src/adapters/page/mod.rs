//! Page adapters: the HTML document, the navbar, the film list renderer.

pub mod document;
pub mod navbar;
pub mod renderer;
pub mod template;

pub use document::{ElementSlot, PageDocument};
pub use navbar::{NAVBAR_ID, inject_navbar, navbar_markup};
pub use renderer::{FILMS_LIST_ID, render_films, render_into};
pub use template::default_template;
