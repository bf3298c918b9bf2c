//! Per-column statistics for a delimited file.
//!
//! Usage: csv-stats <file> [delimiters]
//!
//! Prints the grid shape, each column's maximum width, and the numeric sum
//! of every column that converts cleanly.

use anyhow::{bail, Context};
use token_grid::{GridOptions, TokenGrid};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: csv-stats <file> [delimiters]");
    };
    let delimiters = args.next().unwrap_or_else(|| ",".to_owned());

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let grid = TokenGrid::new(
        &text,
        GridOptions::new()
            .column_delimiters(&delimiters)
            .support_dquotes(true),
    );

    println!(
        "{} rows, {}..{} columns",
        grid.row_count(),
        grid.min_column_count(),
        grid.max_column_count()
    );

    let widths = grid.column_widths();
    for (i, width) in widths.iter().enumerate() {
        match grid.accumulate_column(i) {
            Ok(sum) => println!("column {i}: width {width}, sum {sum}"),
            Err(_) => println!("column {i}: width {width}, non-numeric"),
        }
    }
    Ok(())
}
