use std::path::PathBuf;

use clap::Args;
use docgate_sections::{canonicalize, validate_markdown_file};

use crate::cli::exit::{CliResult, FAILURE, SUCCESS};
use crate::cli::output::{print_section_report, OutputFormat};

#[derive(Args, Debug)]
pub struct MarkdownArgs {
    /// Markdown file to check.
    pub markdown_file: PathBuf,
    /// Required level-2 section name (repeatable, case-insensitive).
    #[arg(
        short = 's',
        long = "section",
        value_name = "NAME",
        required = true,
        value_parser = parse_section_name
    )]
    pub sections: Vec<String>,
}

/// Accept a section name only if something survives normalization.
fn parse_section_name(raw: &str) -> Result<String, String> {
    match canonicalize(raw) {
        Some(_) => Ok(raw.to_string()),
        None => Err("section name must not be blank or only '#'".to_string()),
    }
}

pub fn run(args: MarkdownArgs, format: OutputFormat) -> CliResult<i32> {
    let verdict = validate_markdown_file(&args.markdown_file, &args.sections);
    tracing::info!(
        file = %args.markdown_file.display(),
        readable = verdict.readable,
        required = args.sections.len(),
        missing = verdict.missing.len(),
        "section check finished"
    );

    print_section_report(&args.markdown_file, &verdict, format);

    if verdict.is_valid() {
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_must_survive_normalization() {
        assert_eq!(parse_section_name("Overview").unwrap(), "Overview");
        assert!(parse_section_name("").is_err());
        assert!(parse_section_name("   ").is_err());
        assert!(parse_section_name("##").is_err());
    }

    #[test]
    fn unreadable_file_fails_even_when_nothing_is_missing() {
        let args = MarkdownArgs {
            markdown_file: PathBuf::from("/nope/missing.md"),
            sections: Vec::new(),
        };
        assert_eq!(run(args, OutputFormat::Pretty).unwrap(), FAILURE);
    }
}
