// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - serve: run the contact relay without the TUI
// - config --show/--path/--reset/--edit: configuration management
// - content --check: validate a content file

use crate::config::{Config, VERSION};
use crate::content::{dates, Portfolio};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// folio - a portfolio in your terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Terminal portfolio with a contact relay", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run only the contact relay (no TUI)
    Serve,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Inspect portfolio content
    Content {
        /// Validate a content file (defaults to the configured one)
        #[arg(long)]
        check: bool,

        /// Content file to use instead of the configured one
        file: Option<PathBuf>,
    },
}

/// What main should do after argument parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// A subcommand ran to completion
    Exit,
    /// Start the app; `headless` skips the TUI
    Run { headless: bool },
}

pub fn handle_cli() -> CliAction {
    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> CliAction {
    match cli.command {
        None => CliAction::Run { headless: false },
        Some(Commands::Serve) => CliAction::Run { headless: true },
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                println!("Usage: folio config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            CliAction::Exit
        }
        Some(Commands::Content { check, file }) => {
            handle_content(check, file);
            CliAction::Exit
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!(
        "# mail api key: {}",
        if config.mail.is_configured() {
            "set (RESEND_API_KEY)"
        } else {
            "not set"
        }
    );
    println!("# tui: {}", if config.enable_tui { "on" } else { "off (FOLIO_NO_TUI)" });

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    if let Some(path) = Config::config_path().filter(|p| p.exists()) {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    match Config::reset_config_file() {
        Ok(path) => println!("Config reset to defaults: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_content(check: bool, file: Option<PathBuf>) {
    let file = file.or_else(|| Config::from_env().content_path);
    let source = file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());

    let portfolio = match Portfolio::load(file.as_deref()) {
        Ok(portfolio) => portfolio,
        Err(e) => {
            eprintln!("Content error ({}): {}", source, e);
            std::process::exit(1);
        }
    };

    if check {
        println!("✓ {} is valid", source);
    }
    println!();
    println!("  {} - {}", portfolio.personal.name, portfolio.personal.title);
    println!("  {} typing phrases", portfolio.typing_phrases.len());
    println!("  {} skills", portfolio.skills.len());
    println!(
        "  {} projects ({} featured)",
        portfolio.projects.len(),
        portfolio.projects.iter().filter(|p| p.featured).count()
    );
    for exp in &portfolio.experience {
        println!(
            "  {} @ {} ({})",
            exp.title,
            exp.company,
            dates::format_range(&exp.start_date, exp.end_date.as_deref(), "Present")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_the_tui() {
        let cli = Cli::parse_from(["folio"]);
        assert_eq!(dispatch(cli), CliAction::Run { headless: false });
    }

    #[test]
    fn serve_runs_headless() {
        let cli = Cli::parse_from(["folio", "serve"]);
        assert_eq!(dispatch(cli), CliAction::Run { headless: true });
    }

    #[test]
    fn config_flags_parse() {
        let cli = Cli::try_parse_from(["folio", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, show: false, .. })
        ));
    }

    #[test]
    fn content_accepts_a_file() {
        let cli = Cli::try_parse_from(["folio", "content", "--check", "me.toml"]).unwrap();
        match cli.command {
            Some(Commands::Content { check, file }) => {
                assert!(check);
                assert_eq!(file, Some(PathBuf::from("me.toml")));
            }
            _ => panic!("expected content subcommand"),
        }
    }
}
