use std::path::PathBuf;

use clap::Args;
use docgate_schema::{validate_yaml_against_schema_with_config, ValidatorConfig};

use crate::cli::exit::{schema_error, CliResult, FAILURE, SUCCESS};
use crate::cli::output::{print_schema_report, OutputFormat};

#[derive(Args, Debug)]
pub struct YamlArgs {
    /// YAML document to validate.
    pub yaml_file: PathBuf,
    /// JSON Schema document (draft 2020-12 unless `$schema` says otherwise).
    pub schema_file: PathBuf,
    /// Reject properties not declared by object schemas.
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: YamlArgs, format: OutputFormat) -> CliResult<i32> {
    let config = ValidatorConfig {
        strict_mode: args.strict,
        ..ValidatorConfig::default()
    };

    let verdict = validate_yaml_against_schema_with_config(&args.yaml_file, &args.schema_file, config)
        .map_err(schema_error)?;
    tracing::info!(
        file = %args.yaml_file.display(),
        schema = %args.schema_file.display(),
        errors = verdict.errors.len(),
        "schema check finished"
    );

    print_schema_report(&args.yaml_file, &args.schema_file, &verdict, format);

    if verdict.is_valid() {
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}
