//! Console table of repository statuses

use super::RepoStatus;
use crate::constants::report::HEADERS;
use colored::*;

fn row(status: &RepoStatus) -> [String; 4] {
    [
        status.repo_path.clone(),
        if status.is_cloned { "Yes" } else { "No" }.to_string(),
        status.branch_count.to_string(),
        status.tag_count.to_string(),
    ]
}

fn border(widths: &[usize; 4]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", cells.join("+"))
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (cell, width))| {
            // Counts are right aligned, text columns left aligned
            if idx >= 2 {
                format!(" {cell:>width$} ")
            } else {
                format!(" {cell:<width$} ")
            }
        })
        .collect();
    format!("|{}|", cells.join("|"))
}

/// Render the Repository / Cloned / Branches / Tags table as plain text
pub fn render_status_table(statuses: &[RepoStatus]) -> String {
    let header: [String; 4] = HEADERS.map(|h| h.to_uppercase());
    let rows: Vec<[String; 4]> = statuses.iter().map(row).collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut out = vec![separator.clone(), line(&header, &widths), separator.clone()];
    out.extend(rows.iter().map(|cells| line(cells, &widths)));
    out.push(separator);
    out.join("\n")
}

/// Print the status table followed by a colored summary line
pub fn print_status_table(statuses: &[RepoStatus]) {
    println!("{}", render_status_table(statuses));

    let cloned = statuses.iter().filter(|s| s.is_cloned).count();
    let failed = statuses.len() - cloned;
    let summary = format!("{cloned} cloned, {failed} not cloned");
    if failed == 0 {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}
