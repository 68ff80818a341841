use anyhow::Result;
use clap::{CommandFactory, Parser};

use orrery::cli::{Cli, Command};
use orrery::commands;
use orrery::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Show(args) => {
            tracing::info!(?args, "Starting show");
            commands::show::run(args, &config)?;
        }
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            let loaded = commands::load(args.system.as_deref())?;
            let root = args
                .root
                .as_deref()
                .map(|key| commands::resolve_key(&loaded.system, key))
                .transpose()?;
            orrery::tui::run(loaded, root, &config)?;
        }
        Command::Format(args) => {
            commands::format::run(args, &config)?;
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        }
        Command::Manpage => {
            let man = clap_mangen::Man::new(Cli::command());
            man.render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orrery={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
