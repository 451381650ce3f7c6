use clap::Parser;
use salesdb::cli::{self, output, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Init(args) => cli::init::execute(args),
        Commands::Inspect(args) => cli::inspect::execute(args),
        Commands::Check(command) => cli::check::execute(command),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
