use dlink_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr so the CLI never fails here.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let code = cli::parse_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = cli.run() {
        tracing::error!("{:#}", err);
        eprintln!("dlink error: {:#}", err);
        std::process::exit(1);
    }
}
