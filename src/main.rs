use clap::{Parser, Subcommand, ValueEnum};
use player_stats::commands::{self, RenderContext};
use player_stats::config::{self, Config};
use player_stats::dataset::{self, Derivation};
use player_stats::i18n::Language;
use player_stats::stats::Career;
use player_stats::types::{TeamFilter, ALL_TEAMS_KEY};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "player-stats")]
#[command(about = "Player career statistics", long_about = "Player career statistics\n\nIf no command is specified, every section is printed.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Label language: esp, eng or cat
    #[arg(short = 'l', long, global = true)]
    lang: Option<Language>,

    /// Dataset file to use instead of the built-in career
    #[arg(short = 'D', long, global = true)]
    dataset: Option<PathBuf>,

    /// Career hat-trick total spread across seasons
    #[arg(long, global = true)]
    target: Option<u32>,

    /// Where hat-trick and brace values come from (overrides the config file)
    #[arg(long, global = true, value_enum)]
    derivation: Option<DerivationArg>,

    /// Team key, or TOTAL for every club
    #[arg(short, long, global = true, default_value = ALL_TEAMS_KEY)]
    team: String,

    /// Season short code, e.g. 24/25 (optional, defaults to all seasons)
    #[arg(short, long, global = true)]
    season: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DerivationArg {
    /// Spread the hat-trick target over seasons
    Estimate,
    /// Use the values written in the dataset file
    #[value(name = "pre-baked", alias = "pre_baked")]
    PreBaked,
}

impl DerivationArg {
    fn to_derivation(self) -> Derivation {
        match self {
            DerivationArg::Estimate => Derivation::Estimate,
            DerivationArg::PreBaked => Derivation::PreBaked,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Display totals and averages for the selected team and season
    Stats,
    /// Display the season-by-season table for the selected team and season
    Career,
    /// Display one card per club
    Teams,
    /// Display the player profile
    Player,
    /// List team keys, season codes and languages
    Seasons,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("language: {}", cfg.language);
    println!("hat_trick_target: {}", cfg.hat_trick_target);
    println!("derivation: {:?}", cfg.derivation);
    println!("dataset_file: {}", cfg.dataset_file.as_deref().unwrap_or("(built-in)"));
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply CLI overrides on top of the config file
fn resolve_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if let Some(target) = cli.target {
        config.hat_trick_target = target;
    }
    if let Some(derivation) = cli.derivation {
        config.derivation = derivation.to_derivation();
    }
    if let Some(path) = &cli.dataset {
        config.dataset_file = Some(path.display().to_string());
    }
    config
}

fn load_career(config: &Config) -> anyhow::Result<Career> {
    let path = config.dataset_file.as_deref().map(PathBuf::from);
    dataset::load(path.as_deref(), config.derivation, config.hat_trick_target)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(ctx: &RenderContext, command: Option<Commands>, team: &str, season: Option<&str>) {
    let team = TeamFilter::parse(team);
    match command {
        None => commands::page::run(ctx, &team, season),
        Some(Commands::Config) => unreachable!("Config command should be handled before execute_command"),
        Some(Commands::Stats) => commands::stats::run(ctx, &team, season),
        Some(Commands::Career) => commands::career::run(ctx, &team, season),
        Some(Commands::Teams) => commands::teams::run(ctx),
        Some(Commands::Player) => commands::player::run(ctx),
        Some(Commands::Seasons) => commands::seasons::run(ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = resolve_config(&cli, config::read());

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need the dataset)
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let career = match load_career(&config) {
        Ok(career) => career,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            tracing::error!("Failed to load career: {:#}", e);
            std::process::exit(1);
        }
    };

    let ctx = RenderContext::new(&career, config.language, &config.display);
    execute_command(&ctx, cli.command, &cli.team, cli.season.as_deref());
}
