//! CSV parsing for the showtime feed. Uses the `csv` crate.
//!
//! The first record is the header; columns are matched by name, not position.

use crate::domain::{DomainError, ShowtimeRow};
use csv::StringRecord;

const COL_FILM: &str = "Film";
const COL_DATE: &str = "Date";
const COL_TIME: &str = "Time";
const COL_THEATER: &str = "Theater";
const COL_RUNTIME: &str = "Runtime";
const COL_SOLD_OUT: &str = "isAlmostSoldOut";

/// Positions of the known columns in the header. `None` if the column is absent.
#[derive(Debug, Default)]
struct ColumnMap {
    film: Option<usize>,
    date: Option<usize>,
    time: Option<usize>,
    theater: Option<usize>,
    runtime: Option<usize>,
    sold_out: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Self {
        let mut map = Self::default();
        for (i, name) in header.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim();
            let slot = match name {
                COL_FILM => &mut map.film,
                COL_DATE => &mut map.date,
                COL_TIME => &mut map.time,
                COL_THEATER => &mut map.theater,
                COL_RUNTIME => &mut map.runtime,
                COL_SOLD_OUT => &mut map.sold_out,
                _ => continue,
            };
            // First occurrence wins on duplicate headers.
            slot.get_or_insert(i);
        }
        map
    }

    fn is_empty(&self) -> bool {
        self.film.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.theater.is_none()
            && self.runtime.is_none()
            && self.sold_out.is_none()
    }

    fn row(&self, record: &StringRecord) -> ShowtimeRow {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        ShowtimeRow {
            film: field(self.film),
            date: field(self.date),
            time: field(self.time),
            theater: field(self.theater),
            runtime: field(self.runtime),
            almost_sold_out: field(self.sold_out),
        }
    }
}

/// Parse the feed body into rows.
///
/// Ragged records are accepted; missing fields become empty text. Blank lines
/// are skipped. A body with no header naming any known column is a parse error.
pub fn parse_showtimes(body: &str) -> Result<Vec<ShowtimeRow>, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let header = rdr
        .headers()
        .map_err(|e| DomainError::Parse(format!("read header: {}", e)))?
        .clone();
    let columns = ColumnMap::from_header(&header);
    if columns.is_empty() {
        return Err(DomainError::Parse(format!(
            "header names none of the showtime columns: {:?}",
            header.iter().collect::<Vec<_>>()
        )));
    }

    let mut rows = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record =
            record.map_err(|e| DomainError::Parse(format!("record {}: {}", line + 1, e)))?;
        rows.push(columns.row(&record));
    }
    Ok(rows)
}
