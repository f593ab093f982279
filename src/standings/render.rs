//! HTML rendering of a conference's standings, one block of rows per division.

use crate::{Column, Standing};

/// Constructs an HTML table out of `standings`, headed by `label`.
///
/// Teams are grouped per run of equal divisions. A division that shows up again further down the
/// list gets its own block, nothing is reordered.
pub fn construct_html_table(standings: &[Standing], label: &str) -> String {
    let mut html_div = format!("<div class='conference_wrapper'><h1>{}</h1>", escape(label));
    let first = match standings.first() {
        Some(first) => first,
        None => {
            html_div.push_str("<p>No data available</p></div>");
            return html_div;
        }
    };

    let columns = first.columns();
    let mut table_header = String::from("<tr>");
    for column in &columns {
        table_header.push_str(&format!("<th>{}</th>", column.header()));
    }
    table_header.push_str("</tr>");

    let groups = division_runs(standings);
    let mut table_rows = String::new();
    for (i, group) in groups.iter().enumerate() {
        table_rows.push_str(&format!(
            "<tr><td style='font-weight: bold' colspan='{}'>{}</td></tr>",
            first.field_count(),
            escape(group[0].division_name())
        ));
        for standing in *group {
            table_rows.push_str(&table_row(standing, &columns));
        }
        // Blank row between divisions
        if i < groups.len() - 1 {
            table_rows.push_str("<tr></tr>");
        }
    }

    html_div.push_str(&format!("<table>{}{}</table></div>", table_header, table_rows));
    html_div
}

fn table_row(standing: &Standing, columns: &[Column]) -> String {
    let cells: String = columns
        .iter()
        .map(|column| format!("<td>{}</td>", escape(standing.value(*column).unwrap_or(""))))
        .collect();
    format!("<tr>{}</tr>", cells)
}

/// Splits into maximal runs of consecutive standings sharing a division
fn division_runs(standings: &[Standing]) -> Vec<&[Standing]> {
    let mut runs = vec![];
    let mut start = 0;
    for i in 1..=standings.len() {
        if i == standings.len() || standings[i].division != standings[start].division {
            runs.push(&standings[start..i]);
            start = i;
        }
    }
    runs
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
