//! Conference standings as listed on <https://www.pro-football-reference.com/years/2023>
//!
//! The standings tables on that page do not have fixed columns we can index into. Every cell
//! carries a `data-stat` attribute instead, and divisions are announced by a full width row whose
//! cell is tagged `onecell`. So we walk all rows and cells of the table body in document order and
//! rebuild the records from those tags.

mod error;
pub mod fetch;
pub mod print;
pub mod render;

pub use error::Error;

use crate::{Column, Standing};
use log::{debug, trace, warn};
use scraper::{ElementRef, Html, Selector};

/// Tag of the cell holding a division name
const DIVISION_MARKER: &str = "onecell";
const TEAM_MARKER: &str = "team";

/// Extracts the standings from the table with id `table_id`.
///
/// Records come out in the order their team rows appear in the document. A missing table is
/// reported as [`Error::TableNotFound`].
pub fn extract_standings(table_id: &str, html: &str) -> Result<Vec<Standing>, Error> {
    let doc = Html::parse_document(html);
    let table = match find_table(&doc, table_id) {
        Some(table) => table,
        None => {
            warn!("Standings table with ID {} can not be found.", table_id);
            return Err(Error::TableNotFound(table_id.to_string()));
        }
    };

    let cells = match body_cells(table) {
        Some(cells) => cells,
        None => {
            debug!("Table {} has no body", table_id);
            return Ok(vec![]);
        }
    };

    let mut standings: Vec<Standing> = vec![];
    let mut current_division: Option<String> = None;
    // Index into `standings` of the team whose row we are in
    let mut current_team: Option<usize> = None;

    for element in cells {
        match element.value().attr("data-stat") {
            Some(DIVISION_MARKER) => {
                current_division = Some(text_of(element));
                current_team = None;
            }
            Some(TEAM_MARKER) => {
                standings.push(Standing::new(text_of(element), current_division.clone()));
                current_team = Some(standings.len() - 1);
            }
            Some(stat) => {
                if let (Some(column), Some(idx)) = (Column::from_stat(stat), current_team) {
                    standings[idx].set_stat(column, text_of(element));
                }
            }
            None => {}
        }
    }

    debug!("Extracted {} teams from table {}", standings.len(), table_id);
    for standing in &standings {
        trace!("{}", standing);
    }
    Ok(standings)
}

/// Builds the conference tables side by side, the way both web routes serve them. A conference
/// without a table in `html` is shown as having no data.
pub fn render_conferences(html: &str, conferences: &[String]) -> String {
    let mut html_div = String::from("<div style='display: flex; gap:40px;'>");
    for conference in conferences {
        let standings = extract_standings(conference, html).unwrap_or_default();
        html_div.push_str(&render::construct_html_table(&standings, conference));
    }
    html_div.push_str("</div>");
    html_div
}

fn find_table<'a>(doc: &'a Html, table_id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("table").ok()?;
    doc.select(&selector)
        .find(|table| table.value().id() == Some(table_id))
}

/// Every row and cell of the table's first body, in document order
fn body_cells(table: ElementRef) -> Option<Vec<ElementRef>> {
    let body_selector = Selector::parse("tbody").ok()?;
    let cell_selector = Selector::parse("tr, td, th").ok()?;
    let body = table.select(&body_selector).next()?;
    Some(body.select(&cell_selector).collect())
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
