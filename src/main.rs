//! CLI entry point for lineup.

mod cli;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lineup::config::{load_config, Config};
use lineup::error::PromptError;
use lineup::registry::CratesProvider;
use lineup::select::{self, settings, OptionsSource, SearchSpec};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // Diagnostics go to stderr like the prompts themselves; stdout stays
    // reserved for the committed value.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINEUP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.display.color = false;
    }

    match run_command(args.command, &config).await {
        Ok(()) => {}
        Err(PromptError::Cancelled) => {
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run_command(command: cli::Command, config: &Config) -> Result<(), PromptError> {
    let color = config.display.color;
    match command {
        cli::Command::Pick {
            prompt,
            default,
            index,
            options,
        } => {
            // The engine takes the default as given; clamping is this
            // caller's job.
            let default = default.min(options.len().saturating_sub(1));
            let chosen = select::run_single_select(
                &prompt,
                Some(settings::HELP_SINGLE),
                &options,
                default,
                color,
            )?;
            if index {
                println!("{chosen}");
            } else {
                println!("{}", options[chosen]);
            }
            Ok(())
        }
        cli::Command::Check {
            prompt,
            checked,
            options,
        } => {
            let chosen = select::run_multi_select(
                &prompt,
                Some(settings::HELP_MULTI),
                &options,
                &checked,
                color,
            )?;
            for idx in chosen {
                println!("{}", options[idx]);
            }
            Ok(())
        }
        cli::Command::Find {
            prompt,
            crates,
            min_query,
            max_results,
            options,
        } => {
            if !crates && options.is_empty() {
                eprintln!("error: provide options to search, or use --crates");
                std::process::exit(2);
            }

            let spec = SearchSpec {
                prompt: &prompt,
                validator: None,
                min_query_length: min_query.unwrap_or(config.search.min_query_length),
                max_results: max_results.unwrap_or(config.search.max_results),
                default_index: None,
            };

            let selection = if crates {
                let provider = CratesProvider::new(
                    &config.registry.base_url,
                    Duration::from_secs(config.registry.timeout_secs),
                );
                select::run_search_select(&spec, &OptionsSource::Dynamic(&provider), color).await?
            } else {
                select::run_search_select(&spec, &OptionsSource::Static(&options), color).await?
            };

            println!("{}", selection.value);
            Ok(())
        }
    }
}
