use clap::Parser;
use pebble_text::cli::{self, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pebble_text=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Slug { text }) => {
            cli::slug::run(&config, text)?;
        }
        Some(Commands::Color { text, hex, css }) => {
            cli::color::run(&config, text, hex, css)?;
        }
        Some(Commands::Hashtags { text, pad, unique }) => {
            cli::hashtags::run(&config, text, pad, unique)?;
        }
        Some(Commands::Sanitize { text, keep_tags }) => {
            cli::text::sanitize(&config, text, keep_tags)?;
        }
        Some(Commands::Truncate { length, text }) => {
            cli::text::truncate(&config, text, length)?;
        }
        Some(Commands::StripWhitespace { text }) => {
            cli::text::strip_whitespace(text)?;
        }
        Some(Commands::ForceUtf8) => {
            cli::encoding::run()?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
