//! Domain entities. Pure data structures for the showtime listing.
//!
//! No CSV, HTTP or HTML types here; adapters map into these.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use std::fmt;

use super::week::WeekRange;

/// Literal flag value marking a showtime as near capacity. Case-sensitive.
pub const ALMOST_SOLD_OUT: &str = "TRUE";

/// One record of the showtime feed. Raw text is kept for every field;
/// a column missing from the feed yields empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowtimeRow {
    pub film: String,
    pub date: String,
    pub time: String,
    pub theater: String,
    pub runtime: String,
    pub almost_sold_out: String,
}

impl ShowtimeRow {
    /// Exact match against `"TRUE"`; `"true"`, `"True"` etc. do not count.
    pub fn is_almost_sold_out(&self) -> bool {
        self.almost_sold_out == ALMOST_SOLD_OUT
    }

    /// Date and time joined by a single space, the form used to order showtimes.
    pub fn showtime_text(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

impl Serialize for ShowtimeRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ShowtimeRow", 6)?;
        s.serialize_field("Film", &FieldValue::infer(&self.film))?;
        s.serialize_field("Date", &FieldValue::infer(&self.date))?;
        s.serialize_field("Time", &FieldValue::infer(&self.time))?;
        s.serialize_field("Theater", &FieldValue::infer(&self.theater))?;
        s.serialize_field("Runtime", &FieldValue::infer(&self.runtime))?;
        s.serialize_field("isAlmostSoldOut", &FieldValue::infer(&self.almost_sold_out))?;
        s.end()
    }
}

/// Inferred type of a raw feed field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Best-effort inference: empty text is `Null`, `true`/`TRUE`/`false`/`FALSE`
    /// are booleans, plain decimal notation is a number, anything else stays text.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" => Self::Null,
            "true" | "TRUE" => Self::Bool(true),
            "false" | "FALSE" => Self::Bool(false),
            _ if looks_numeric(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Self::Number)
                .unwrap_or_else(|_| Self::Text(raw.to_string())),
            _ => Self::Text(raw.to_string()),
        }
    }
}

/// Digits with an optional sign, one decimal point and an exponent.
/// Rejects `inf`, `NaN` and hex which `f64::from_str` would otherwise accept.
fn looks_numeric(raw: &str) -> bool {
    let s = raw.trim();
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let mantissa = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let digits = mantissa.chars().filter(char::is_ascii_digit).count();
    let dots = mantissa.chars().filter(|&c| c == '.').count();
    let mantissa_ok = digits > 0 && dots <= 1 && digits + dots == mantissa.len();
    let exponent_ok = exponent.is_none_or(|e| {
        let e = e.strip_prefix(['+', '-']).unwrap_or(e);
        !e.is_empty() && e.chars().all(|c| c.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Showtimes of one film for the week, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmGroup {
    pub film: String,
    /// Taken from the first row; rows of one film are assumed to agree.
    pub runtime: FieldValue,
    pub showtimes: Vec<ShowtimeRow>,
}

/// The week's films, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub week: WeekRange,
    pub films: Vec<FilmGroup>,
}

impl Listing {
    pub fn showtime_count(&self) -> usize {
        self.films.iter().map(|f| f.showtimes.len()).sum()
    }
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Listing", 3)?;
        s.serialize_field("week_start", &self.week.start)?;
        s.serialize_field("week_end", &self.week.end)?;
        s.serialize_field("films", &self.films)?;
        s.end()
    }
}
