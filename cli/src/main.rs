mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, classify, watch};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = commands.to_config();
    let decorate: bool = !cfg.json;

    match commands.command {
        Commands::Check { entries, file } => {
            if decorate {
                print::header("validating scan targets", cfg.quiet);
            }
            check::check(entries, file, commands.verbose > 0, &cfg)
        }
        Commands::Classify { token } => classify::classify(&token, commands.verbose > 0, &cfg),
        Commands::Watch => {
            if decorate {
                print::header("watching input", cfg.quiet);
            }
            watch::watch(&cfg).await
        }
    }
}
