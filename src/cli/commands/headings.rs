use std::path::Path;

use crate::toc::{extract_headings, HeadingCollection};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the headings command
pub fn handle_headings_command(input: Option<&Path>, json: bool) -> BoxResult<()> {
    let content = fs::read_input(input)?;
    let extraction = extract_headings(&content);

    let listing = if json {
        let mut out = serde_json::to_string_pretty(&extraction.headings)?;
        out.push('\n');
        out
    } else {
        format_headings(&extraction.headings)
    };

    fs::write_output(None, &listing)
}

/// One `index: text` line per heading
fn format_headings(headings: &HeadingCollection) -> String {
    headings
        .iter()
        .map(|h| format!("{}: {}\n", h.index, h.text))
        .collect()
}
