//! textfilter CLI entry point

use clap::Parser;
use textfilter::cli::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();
    textfilter::cli::common::init_logging(cli.verbose, cli.color);

    let exit_code = match cli.command {
        Command::Check {
            filter,
            inputs,
            skip_invalid,
            format,
            output,
        } => textfilter::cli::check::run_check(
            &filter,
            &inputs,
            skip_invalid,
            format,
            output,
            cli.color,
        ),
        Command::Validate {
            filter,
            skip_invalid,
            format,
            output,
        } => textfilter::cli::validate::run_validate(
            &filter,
            skip_invalid,
            format,
            output,
            cli.color,
        ),
    };

    process::exit(exit_code);
}
