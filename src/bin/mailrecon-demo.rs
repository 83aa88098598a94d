use colored::Colorize;
use mailrecon::demo::{keys_path, missing_keys_help, run_demo};
use mailrecon::{Aggregator, ApiKeys, ProviderSet, ReportWriter, Settings, init_logging};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging(false);

    let keys_path = keys_path();
    if !keys_path.is_file() {
        eprintln!("{} {}", "Error:".red().bold(), missing_keys_help(&keys_path));
        return ExitCode::from(1);
    }

    let settings = match Settings::load(None, Path::new(".")) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(2);
        }
    };
    let keys = ApiKeys::load(&keys_path);
    let aggregator = Aggregator::new(ProviderSet::live(&settings));
    let writer = ReportWriter::new(&settings.output_dir);

    match run_demo(&aggregator, &keys, &writer, &settings.output_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} Demo failed: {}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
