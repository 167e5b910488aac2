//! Mimoto CLI - template combine and watch toolkit
//!
//! Usage: mimoto <COMMAND>
//!
//! Commands:
//!   run     Combine once, then watch source folders and rebuild on change
//!   build   Combine once and exit

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mimoto::{watch, CombineEngine, Config, WatchEvent, CONFIG_FILE};

/// Mimoto - template combine and watch toolkit
#[derive(Parser, Debug)]
#[command(name = "mimoto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output NDJSON events for CI
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine once, then watch source folders and rebuild on change
    Run {
        /// Path to the config file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },

    /// Combine once and exit
    Build {
        /// Path to the config file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => cmd_run(&config, cli.json),
        Commands::Build { config } => cmd_build(&config, cli.json),
    }
}

/// Load config relative to the working directory and build the engine.
fn load_engine(config_path: &Path) -> Result<CombineEngine> {
    let project_root = std::env::current_dir()?;
    let config_path = if config_path.is_absolute() {
        config_path.to_path_buf()
    } else {
        project_root.join(config_path)
    };

    let config = Config::load(&config_path)?;
    let options = config.into_options(project_root)?;
    Ok(CombineEngine::new(options)?)
}

fn cmd_run(config_path: &Path, json: bool) -> Result<()> {
    let engine = load_engine(config_path)?;

    // Ctrl+C clears the flag; the watch loop notices on its next poll
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    if !json {
        println!("🌱 Mimoto");
        println!("Press Ctrl+C to stop\n");
    }

    watch(&engine, running, |event| print_event(&event, json))?;

    Ok(())
}

fn cmd_build(config_path: &Path, json: bool) -> Result<()> {
    let engine = load_engine(config_path)?;

    for warning in engine.warnings() {
        print_event(
            &WatchEvent::Warning {
                message: warning.clone(),
            },
            json,
        );
    }

    print_event(
        &WatchEvent::BuildStarted {
            output: engine.options().output.clone(),
            rebuild: false,
        },
        json,
    );

    let result = engine.combine(false)?;

    print_event(
        &WatchEvent::BuildComplete {
            bytes: result.bytes_written,
            elapsed_ms: result.elapsed_ms,
            timestamp: result.timestamp,
            rebuild: false,
        },
        json,
    );

    Ok(())
}

fn print_event(event: &WatchEvent, json: bool) {
    if json {
        println!("{}", event.to_json());
        return;
    }

    match event {
        WatchEvent::WatchStarted { sources, output } => {
            println!("📂 Watching {} -> {}", sources.join(", "), output);
        }
        WatchEvent::BuildStarted { output, rebuild } => {
            println!();
            let verb = if *rebuild { "Rebuilding" } else { "Building" };
            println!("{verb} {output} ...");
        }
        WatchEvent::BuildComplete {
            elapsed_ms,
            timestamp,
            ..
        } => {
            println!("----------------------------------------------");
            println!("🥦 Compile done in {elapsed_ms}ms - {timestamp}\n");
        }
        WatchEvent::Warning { message } => {
            println!("🚨 WARNING - {message}");
        }
        WatchEvent::Error { message } => {
            eprintln!("🚨 ERROR - {message}");
        }
        WatchEvent::Shutdown => {
            println!("\n👋 Shutting down...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run_default_config() {
        let cli = Cli::try_parse_from(["mimoto", "run"]).unwrap();
        match cli.command {
            Commands::Run { config } => assert_eq!(config, PathBuf::from(CONFIG_FILE)),
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_build_with_config_flag() {
        let cli = Cli::try_parse_from(["mimoto", "--json", "build", "--config", "custom.json"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Build { config } => assert_eq!(config, PathBuf::from("custom.json")),
            _ => panic!("expected Build command"),
        }
    }
}
