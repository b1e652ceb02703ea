use clap::Parser;
use k8s_yaml_validator::{EXIT_FATAL, cli::Cli, config, run_command};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

fn run() -> k8s_yaml_validator::Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    run_command(cli.command, &config)
}
