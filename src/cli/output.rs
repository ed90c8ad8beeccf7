//! Output formatting utilities

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

/// Resolve `Auto` to the format used for the terminal
pub fn effective_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => OutputFormat::Table,
        other => other,
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    print!("{}", serde_yml::to_string(value).into_diagnostic()?);
    Ok(())
}

/// Render rows as a rounded table with a header
pub fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn print_csv(header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(header).into_diagnostic()?;
    for row in rows {
        writer.write_record(row).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}

/// Print a serializable value in the requested format, using `rows` for
/// the table and CSV forms
pub fn print_rows<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    header: &[&str],
    rows: &[Vec<String>],
) -> Result<()> {
    match effective_format(format) {
        OutputFormat::Json => print_json(value),
        OutputFormat::Yaml => print_yaml(value),
        OutputFormat::Csv => print_csv(header, rows),
        OutputFormat::Table | OutputFormat::Auto => {
            println!("{}", render_table(header, rows));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_format() {
        assert_eq!(effective_format(OutputFormat::Auto), OutputFormat::Table);
        assert_eq!(effective_format(OutputFormat::Json), OutputFormat::Json);
    }

    #[test]
    fn test_render_table_contains_cells() {
        let table = render_table(
            &["Field", "Value"],
            &[vec!["Week".to_string(), "27".to_string()]],
        );
        assert!(table.contains("Field"));
        assert!(table.contains("Week"));
        assert!(table.contains("27"));
    }
}
