//! Rust source rendering of a result table.

use crate::core::{Path, TapState};
use crate::emit::error::EmitError;
use crate::emit::options::EmitOptions;
use crate::table::ResultTable;
use std::fmt::Write;

/// Render `table` as a Rust function with one nested `match` arm per pair.
///
/// The output depends only on the table and the options, so regenerating
/// an unchanged table yields byte-identical source.
pub fn render_rust(table: &ResultTable, options: &EmitOptions) -> Result<String, EmitError> {
    let ty = options.state_type();
    let constness = if options.const_fn() { "const " } else { "" };
    let mut out = String::new();

    writeln!(out, "// @generated by tapwalk. Do not edit.")?;
    writeln!(
        out,
        "// Shortest TMS sequence from `start` to `end`, one value per clock."
    )?;
    writeln!(
        out,
        "pub {constness}fn {}(start: {ty}, end: {ty}) -> &'static [bool] {{",
        options.function_name()
    )?;
    writeln!(out, "    match start {{")?;

    for &start in TapState::ALL {
        writeln!(out, "        {ty}::{start} => match end {{")?;
        for &end in TapState::ALL {
            writeln!(
                out,
                "            {ty}::{end} => {},",
                slice_literal(table.get(start, end))
            )?;
        }
        writeln!(out, "        }},")?;
    }

    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

fn slice_literal(path: &Path) -> String {
    let signals: Vec<&str> = path
        .iter()
        .map(|&tms| if tms { "true" } else { "false" })
        .collect();
    format!("&[{}]", signals.join(", "))
}
