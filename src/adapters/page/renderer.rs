//! Film list renderer. Turns the pipeline output into markup blocks.

use crate::domain::{DomainError, FilmGroup, ShowtimeRow};
use crate::ports::Container;
use maud::{Markup, html};

/// Element that receives the film blocks.
pub const FILMS_LIST_ID: &str = "films-list";

/// One `div.film-item` per film, in listing order.
pub fn render_films(films: &[FilmGroup]) -> Vec<Markup> {
    films.iter().map(render_film).collect()
}

fn render_film(film: &FilmGroup) -> Markup {
    html! {
        div.film-item {
            h4 {
                (film.film) " - "
                span.text-muted { "Runtime: " (film.runtime.to_string()) }
            }
            h5 { "Showtimes" }
            ul.list-group {
                @for row in &film.showtimes {
                    (render_showtime(row))
                }
            }
        }
    }
}

fn render_showtime(row: &ShowtimeRow) -> Markup {
    html! {
        li.list-group-item.showtime-item.almost-sold-out[row.is_almost_sold_out()] {
            span.showtime-details {
                strong { "Theater:" } " " (row.theater) " | "
                strong { "Showtime:" } " " (row.time) " on " (row.date)
            }
        }
    }
}

/// Clear `container` and append one block per film. Calling it again with the
/// same films leaves the same content. Returns the number of blocks written.
pub fn render_into(
    container: &mut dyn Container,
    films: &[FilmGroup],
) -> Result<usize, DomainError> {
    container.clear()?;
    let blocks = render_films(films);
    for block in &blocks {
        container.append_html(&block.0)?;
    }
    Ok(blocks.len())
}
