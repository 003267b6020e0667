use std::io::IsTerminal;
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use docgate_schema::SchemaVerdict;
use docgate_sections::SectionVerdict;
use serde::Serialize;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Table,
    Json,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Pretty
        }
    }
}

#[derive(Serialize)]
struct SectionReport<'a> {
    file: String,
    valid: bool,
    readable: bool,
    missing: Vec<&'a str>,
}

#[derive(Serialize)]
struct SchemaReport<'a> {
    file: String,
    schema: String,
    valid: bool,
    errors: &'a [String],
}

pub fn print_section_report(path: &Path, verdict: &SectionVerdict, format: OutputFormat) {
    println!("{}", render_section_report(path, verdict, format));
}

pub fn print_schema_report(
    yaml_path: &Path,
    schema_path: &Path,
    verdict: &SchemaVerdict,
    format: OutputFormat,
) {
    println!(
        "{}",
        render_schema_report(yaml_path, schema_path, verdict, format)
    );
}

fn render_section_report(path: &Path, verdict: &SectionVerdict, format: OutputFormat) -> String {
    let missing: Vec<&str> = verdict.missing.iter().map(|h| h.as_str()).collect();

    match format {
        OutputFormat::Json => {
            let out = SectionReport {
                file: path.display().to_string(),
                valid: verdict.is_valid(),
                readable: verdict.readable,
                missing,
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        _ if verdict.is_valid() => {
            format!("OK: {} has all required sections", path.display())
        }
        _ if missing.is_empty() => format!("Cannot read {}", path.display()),
        OutputFormat::Table => {
            let mut table = new_table(vec!["MISSING SECTION"]);
            for name in missing {
                table.add_row(vec![name]);
            }
            format!("{}\n{table}", path.display())
        }
        OutputFormat::Pretty => {
            let heading = if verdict.readable {
                "Missing required sections in"
            } else {
                "Cannot read, all required sections missing in"
            };
            let mut out = format!("{heading} {}:", path.display());
            for name in missing {
                out.push_str("\n  - ");
                out.push_str(name);
            }
            out
        }
    }
}

fn render_schema_report(
    yaml_path: &Path,
    schema_path: &Path,
    verdict: &SchemaVerdict,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => {
            let out = SchemaReport {
                file: yaml_path.display().to_string(),
                schema: schema_path.display().to_string(),
                valid: verdict.is_valid(),
                errors: &verdict.errors,
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        _ if verdict.is_valid() => format!(
            "OK: {} conforms to {}",
            yaml_path.display(),
            schema_path.display()
        ),
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "ERROR"]);
            for (idx, line) in verdict.errors.iter().enumerate() {
                table.add_row(vec![(idx + 1).to_string(), line.clone()]);
            }
            format!("{}\n{table}", yaml_path.display())
        }
        OutputFormat::Pretty => {
            let mut out = format!(
                "{} does not conform to {}:",
                yaml_path.display(),
                schema_path.display()
            );
            for line in &verdict.errors {
                out.push_str("\n  - ");
                out.push_str(line);
            }
            out
        }
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}
