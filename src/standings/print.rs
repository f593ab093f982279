//! Console output of a standings list as a plain text grid.

use crate::Standing;
use std::fmt;

const HEADERS: [&str; 4] = ["team", "division", "wins", "losses"];

/// Displays as an aligned table, or as a notice when there is nothing to show
pub struct StandingsTable<'a>(pub &'a [Standing]);

impl fmt::Display for StandingsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Standings not available.");
        }

        let rows: Vec<[&str; 4]> = self
            .0
            .iter()
            .map(|standing| {
                [
                    standing.team.as_str(),
                    standing.division_name(),
                    standing.wins.as_deref().unwrap_or(""),
                    standing.losses.as_deref().unwrap_or(""),
                ]
            })
            .collect();
        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator: String = widths
            .iter()
            .map(|width| format!("+{}", "-".repeat(width + 2)))
            .collect::<String>()
            + "+";
        writeln!(f, "{}", separator)?;
        write_row(f, &HEADERS, &widths)?;
        writeln!(f, "{}", separator)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "{}", separator)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str; 4], widths: &[usize; 4]) -> fmt::Result {
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, "| {:<width$} ", cell, width = width)?;
    }
    writeln!(f, "|")
}
