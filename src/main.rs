use clap::Parser;
use mailrecon::{Cli, handlers::handle_scan, init_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    handle_scan(&cli).into()
}
