use clap::Parser;

use docgate::cli::markdown::{self, MarkdownArgs};
use docgate::cli::{finish, CommonArgs};

#[derive(Parser, Debug)]
#[command(
    name = "validate-markdown",
    version,
    about = "Check that a Markdown file contains required level-2 sections"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    args: MarkdownArgs,
}

fn main() {
    let cli = Cli::parse();
    let format = cli.common.init();
    finish(markdown::run(cli.args, format));
}
