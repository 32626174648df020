use ledger_load_cli::{run_cli, CliError};

#[tokio::main]
async fn main() {
    // Run CLI and handle errors
    if let Err(e) = run_cli().await {
        // Logging may not be initialized yet when configuration fails.
        eprintln!("Error: {}", e);

        // Exit with appropriate code based on error type
        let exit_code = match e {
            CliError::Configuration(_) => 1,
            CliError::Client(_) => 2,
            CliError::InvalidArgument { .. } => 3,
            CliError::Render(_) => 4,
            CliError::Io(_) => 5,
        };

        std::process::exit(exit_code);
    }
}
