//! Grouping & sorting pipeline: week filter -> group by film -> order films -> order showtimes.

use super::entities::{FieldValue, FilmGroup, ShowtimeRow};
use super::week::{WeekRange, is_date_in_week, parse_instant};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Sort key for a showtime. Unparseable showtimes order after every valid one.
fn showtime_key(row: &ShowtimeRow) -> (bool, Option<NaiveDateTime>) {
    let instant = parse_instant(&row.showtime_text());
    (instant.is_none(), instant)
}

/// Earliest valid showtime of a film, if any.
pub fn earliest_showtime(rows: &[ShowtimeRow]) -> Option<NaiveDateTime> {
    rows.iter()
        .filter_map(|r| parse_instant(&r.showtime_text()))
        .min()
}

/// Builds the week's listing from the flat feed.
///
/// Rows outside `week` are dropped. Films are keyed by exact `Film` text
/// (empty text included) and ordered by earliest showtime; each film's rows are
/// ordered chronologically. Both sorts are stable.
pub fn build_schedule(rows: Vec<ShowtimeRow>, week: &WeekRange) -> Vec<FilmGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<ShowtimeRow>)> = Vec::new();

    for row in rows.into_iter().filter(|r| is_date_in_week(&r.date, week)) {
        match index.get(&row.film) {
            Some(&i) => grouped[i].1.push(row),
            None => {
                index.insert(row.film.clone(), grouped.len());
                grouped.push((row.film.clone(), vec![row]));
            }
        }
    }

    let mut films: Vec<FilmGroup> = grouped
        .into_iter()
        .map(|(film, mut showtimes)| {
            // First row in feed order, before the chronological sort.
            let runtime = showtimes
                .first()
                .map(|r| FieldValue::infer(&r.runtime))
                .unwrap_or(FieldValue::Null);
            showtimes.sort_by_key(showtime_key);
            FilmGroup {
                film,
                runtime,
                showtimes,
            }
        })
        .collect();

    // Rows are already sorted, so the first valid row is the earliest.
    films.sort_by_key(|f| {
        let earliest = f.showtimes.first().map(showtime_key);
        earliest.unwrap_or((true, None))
    });
    films
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(film: &str, date: &str, time: &str, theater: &str) -> ShowtimeRow {
        ShowtimeRow {
            film: film.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            theater: theater.to_string(),
            runtime: "120".to_string(),
            almost_sold_out: String::new(),
        }
    }

    fn june_week() -> WeekRange {
        let now = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        WeekRange::containing(now)
    }

    #[test]
    fn test_films_ordered_by_earliest_showtime() {
        let rows = vec![
            row("Dune", "2024-06-10", "19:00", "A"),
            row("Dune", "2024-06-09", "20:00", "B"),
            row("Nope", "2024-06-09", "18:00", "C"),
        ];
        let films = build_schedule(rows, &june_week());

        let names: Vec<&str> = films.iter().map(|f| f.film.as_str()).collect();
        assert_eq!(names, ["Nope", "Dune"]);
        let dune: Vec<&str> = films[1].showtimes.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dune, ["2024-06-09", "2024-06-10"]);
        assert_eq!(films[1].showtimes[0].time, "20:00");
    }

    #[test]
    fn test_rows_outside_week_excluded() {
        let rows = vec![
            row("Dune", "2024-05-01", "19:00", "A"),
            row("Nope", "2024-06-11", "18:00", "C"),
            row("Alien", "garbage", "18:00", "C"),
        ];
        let films = build_schedule(rows, &june_week());
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film, "Nope");
    }

    #[test]
    fn test_grouping_is_partition() {
        let rows = vec![
            row("A", "2024-06-12", "10:00", "x"),
            row("B", "2024-06-11", "10:00", "x"),
            row("A", "2024-06-10", "10:00", "y"),
            row("", "2024-06-13", "10:00", "z"),
            row("a", "2024-06-13", "11:00", "z"),
        ];
        let total = rows.len();
        let films = build_schedule(rows, &june_week());

        assert_eq!(films.iter().map(|f| f.showtimes.len()).sum::<usize>(), total);
        for f in &films {
            assert!(f.showtimes.iter().all(|r| r.film == f.film));
        }
        let mut keys: Vec<&str> = films.iter().map(|f| f.film.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["", "A", "B", "a"]);
    }

    #[test]
    fn test_showtimes_and_films_monotonic() {
        let rows = vec![
            row("X", "06/14/2024", "9:30PM", "t"),
            row("Y", "06/12/2024", "1:00PM", "t"),
            row("X", "06/14/2024", "10:00AM", "t"),
            row("Y", "06/10/2024", "11:45PM", "t"),
            row("Z", "06/10/2024", "11:00PM", "t"),
        ];
        let films = build_schedule(rows, &june_week());

        for f in &films {
            for pair in f.showtimes.windows(2) {
                assert!(
                    parse_instant(&pair[0].showtime_text()) <= parse_instant(&pair[1].showtime_text())
                );
            }
        }
        for pair in films.windows(2) {
            assert!(earliest_showtime(&pair[0].showtimes) <= earliest_showtime(&pair[1].showtimes));
        }
        let names: Vec<&str> = films.iter().map(|f| f.film.as_str()).collect();
        assert_eq!(names, ["Z", "Y", "X"]);
    }

    #[test]
    fn test_equal_keys_keep_feed_order() {
        let rows = vec![
            row("Late", "2024-06-11", "18:00", "first"),
            row("Early", "2024-06-11", "18:00", "only"),
            row("Late", "2024-06-11", "18:00", "second"),
        ];
        let films = build_schedule(rows, &june_week());
        assert_eq!(films[0].film, "Late");
        let theaters: Vec<&str> = films[0].showtimes.iter().map(|r| r.theater.as_str()).collect();
        assert_eq!(theaters, ["first", "second"]);

        // Re-running on sorted output yields the same order.
        let flattened: Vec<ShowtimeRow> = films.iter().flat_map(|f| f.showtimes.clone()).collect();
        assert_eq!(build_schedule(flattened, &june_week()), films);
    }

    #[test]
    fn test_unparseable_time_sorts_last() {
        let rows = vec![
            row("Solo", "2024-06-11", "TBA", "a"),
            row("Solo", "2024-06-12", "10:00", "b"),
            row("Mystery", "2024-06-09", "soon", "c"),
        ];
        let films = build_schedule(rows, &june_week());
        assert_eq!(films[0].film, "Solo");
        assert_eq!(films[0].showtimes[0].theater, "b");
        assert_eq!(films[1].film, "Mystery");
    }

    #[test]
    fn test_runtime_from_first_seen_row() {
        let mut early = row("Dune", "2024-06-09", "10:00", "a");
        early.runtime = "166".into();
        let mut later = row("Dune", "2024-06-10", "10:00", "b");
        later.runtime = "Unknown".into();
        let films = build_schedule(vec![later, early], &june_week());
        assert_eq!(films[0].runtime, FieldValue::Text("Unknown".into()));
        assert_eq!(films[0].showtimes[0].theater, "a");
    }
}
