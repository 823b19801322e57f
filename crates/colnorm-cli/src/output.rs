//! Rendering of command results.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use colnorm_core::ColumnRename;
use colnorm_core::reserved::RESERVED_WORDS;

use crate::cli::OutputArg;
use crate::commands::CheckOutcome;

/// Render renames in the requested format.
pub fn render_renames(renames: &[ColumnRename], format: OutputArg) -> Result<String> {
    match format {
        OutputArg::Plain => Ok(render_plain(renames)),
        OutputArg::Table => Ok(renames_table(renames).to_string()),
        OutputArg::Json => {
            serde_json::to_string_pretty(renames).context("serialize renames as JSON")
        }
    }
}

/// One identifier per line, in input order.
pub fn render_plain(renames: &[ColumnRename]) -> String {
    renames
        .iter()
        .map(|rename| rename.identifier.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn renames_table(renames: &[ColumnRename]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Label"),
        header_cell("Identifier"),
        header_cell("Changed"),
    ]);
    apply_table_style(&mut table);
    for (idx, rename) in renames.iter().enumerate() {
        let changed = if rename.changed {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(idx),
            Cell::new(&rename.original),
            Cell::new(rename.identifier.as_str()).fg(Color::Green),
            changed,
        ]);
    }
    table
}

pub fn check_table(outcomes: &[CheckOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Status")]);
    apply_table_style(&mut table);
    for outcome in outcomes {
        let status = match &outcome.problem {
            None => Cell::new("valid").fg(Color::Green),
            Some(problem) => Cell::new(problem).fg(Color::Red),
        };
        table.add_row(vec![Cell::new(&outcome.name), status]);
    }
    table
}

pub fn reserved_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Reserved word")]);
    apply_table_style(&mut table);
    for word in RESERVED_WORDS {
        table.add_row(vec![*word]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
