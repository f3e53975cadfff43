// Startup module - banner and module status
//
// Printed before the TUI takes over the screen (or once in headless mode),
// and echoed into the TUI log strip.

use crate::config::{Config, VERSION};
use crate::content::Portfolio;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module loading result for display
#[derive(Debug, PartialEq)]
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

pub fn print_startup(config: &Config, portfolio: &Portfolio) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}folio{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}{} - {}{RESET}", portfolio.personal.name, portfolio.personal.title);
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    match &config.content_path {
        Some(path) => println!("  {DIM}Content:{RESET} {GREEN}✓{RESET} {}", path.display()),
        None => println!("  {DIM}Content:{RESET} {DIM}(bundled){RESET}"),
    }
    println!();

    println!("  {DIM}Loading modules...{RESET}");
    for module in &module_status(config) {
        print_module_status(module);
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Contact relay on {BOLD}{}{RESET}",
        config.bind_addr
    );
    if !config.mail.is_configured() {
        println!("  {YELLOW}▸{RESET} {YELLOW}RESEND_API_KEY not set{RESET} {DIM}(contact form disabled){RESET}");
    }
    println!();
}

fn module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "relay",
            enabled: true,
            description: "Contact relay (HTTP)",
        },
        ModuleStatus {
            name: "mail",
            enabled: config.mail.is_configured(),
            description: "Mail provider",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "cursor",
            enabled: config.enable_tui && config.effects.cursor_trail,
            description: "Cursor trail",
        },
        ModuleStatus {
            name: "particles",
            enabled: config.enable_tui && config.effects.particles,
            description: "Ambient particles",
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "JSON log files",
        },
    ]
}

fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Startup sequence for the TUI log strip
pub fn log_startup(config: &Config) {
    tracing::info!("folio v{}", VERSION);
    for module in &module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }
    tracing::info!("▸ Contact relay on {}", config.bind_addr);
}
