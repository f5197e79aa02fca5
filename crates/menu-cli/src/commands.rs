use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use menu_cli::pipeline::parse_menu_file;
use menu_model::ParseResult;
use menu_parse::MenuField;

use crate::cli::ParseArgs;
use crate::summary::apply_table_style;

pub fn run_parse(args: &ParseArgs) -> Result<ParseResult> {
    let result = parse_menu_file(&args.menu_file, &args.school_id, args.week_start)?;
    info!(
        items = result.items.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "parse complete"
    );
    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize parse result")?;
        fs::write(path, json).with_context(|| format!("write json: {}", path.display()))?;
        info!(path = %path.display(), "json report written");
    }
    Ok(result)
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Required", "Header aliases"]);
    apply_table_style(&mut table);
    for field in MenuField::ALL {
        table.add_row(vec![
            field.to_string(),
            if field.is_required() { "yes" } else { "" }.to_string(),
            field.aliases().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
