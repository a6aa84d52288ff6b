//! Cinema-marquee banner: the figlet title framed by rows of bulbs.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const MARQUEE_RED: Color = Color::Rgb { r: 0xe5, g: 0x09, b: 0x14 };
const POPCORN_GOLD: Color = Color::Rgb { r: 0xff, g: 0xc8, b: 0x3d };

/// Row of lit bulbs, `width` columns wide: `o` every other column.
fn bulb_row(width: usize) -> String {
    (0..width).map(|i| if i % 2 == 0 { 'o' } else { ' ' }).collect()
}

/// Title art padded into a marquee: bulbs above and below, a bulb at each end of every line.
fn marquee(art: &str) -> Vec<String> {
    let inner = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    // Odd width keeps a bulb in both corners.
    let width = (inner + 4) | 1;
    let mut rows = vec![bulb_row(width)];
    for line in art.lines() {
        rows.push(format!("o {:<pad$} o", line, pad = width - 4));
    }
    rows.push(bulb_row(width));
    rows
}

/// Prints "SHOWTIMES" on a marquee, then the version.
/// Falls back to a plain title if the font cannot be loaded.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("SHOWTIMES").map(|f| f.to_string()))
        .unwrap_or_else(|| "SHOWTIMES".to_string());

    let rows = marquee(art.trim_end_matches('\n'));
    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        if i == 0 || i == last {
            let _ = out.execute(SetForegroundColor(MARQUEE_RED));
            let _ = out.execute(Print(row));
        } else {
            let (edge, body) = row.split_at(1);
            let (body, tail) = body.split_at(body.len() - 1);
            let _ = out.execute(SetForegroundColor(MARQUEE_RED));
            let _ = out.execute(Print(edge));
            let _ = out.execute(SetForegroundColor(POPCORN_GOLD));
            let _ = out.execute(Print(body));
            let _ = out.execute(SetForegroundColor(MARQUEE_RED));
            let _ = out.execute(Print(tail));
        }
        let _ = out.execute(Print("\r\n"));
    }

    let _ = out.execute(SetForegroundColor(POPCORN_GOLD));
    let _ = out.execute(Print(format!("now showing - v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulb_row() {
        assert_eq!(bulb_row(5), "o o o");
        assert_eq!(bulb_row(0), "");
    }

    #[test]
    fn test_marquee_frames_every_line() {
        let rows = marquee("AB\nC");
        assert_eq!(rows, ["o o o o", "o AB  o", "o C   o", "o o o o"].map(String::from));
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
    }
}
