use clap::Parser;
use hintforge_cli::{Cli, Commands, run_check, run_generate};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = hintforge_core::logging::init_logging("cli", true);

    let result = match cli.command {
        Commands::Generate {
            inputs,
            output,
            group,
            artifact,
        } => run_generate(inputs, output, group, artifact),
        Commands::Check {
            inputs,
            group,
            artifact,
        } => run_check(inputs, group, artifact),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
