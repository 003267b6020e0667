use clap::Parser;

use docgate::cli::yaml::{self, YamlArgs};
use docgate::cli::{finish, CommonArgs};

#[derive(Parser, Debug)]
#[command(
    name = "validate-yaml",
    version,
    about = "Validate a YAML file against a JSON Schema"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    args: YamlArgs,
}

fn main() {
    let cli = Cli::parse();
    let format = cli.common.init();
    finish(yaml::run(cli.args, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_files() {
        let cli = Cli::try_parse_from(["validate-yaml", "file.yaml", "schema.json", "--strict"])
            .expect("positional args should parse");

        assert_eq!(cli.args.yaml_file, std::path::PathBuf::from("file.yaml"));
        assert_eq!(cli.args.schema_file, std::path::PathBuf::from("schema.json"));
        assert!(cli.args.strict);
    }

    #[test]
    fn version_exits_zero_without_other_args() {
        let err = Cli::try_parse_from(["validate-yaml", "--version"])
            .expect_err("--version should short-circuit");

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn parses_log_and_format_flags() {
        let cli = Cli::try_parse_from([
            "validate-yaml",
            "--format",
            "json",
            "--log-level",
            "debug",
            "a.yaml",
            "b.json",
        ])
        .expect("global flags should parse");

        assert_eq!(cli.common.format, Some(docgate::cli::output::OutputFormat::Json));
        assert_eq!(cli.common.log_level, docgate::cli::logging::LogLevel::Debug);
    }
}
