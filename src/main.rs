//! cardart - Command-line tool that generates placeholder card game assets

use std::process::ExitCode;

use cardart::cli;

fn main() -> ExitCode {
    cli::run()
}
