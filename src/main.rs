//! company-manager: terminal shell for managing roles, teams and people.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use company_manager::{
    AppConfig, ConfigOverrides, GraphQlClient, Navigator, Section, Validatable,
    config::{self, TuiPreferences},
    tui::{self, App, Theme},
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "company-manager")]
#[command(version, about = "Company management shell: roles, teams and people", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Invalid configuration
    3  Error occurred

EXAMPLES:
    # Open the shell on the Teams section
    company-manager tui --section teams

    # Point the GraphQL client at another server
    company-manager --config ./company-manager.yaml --endpoint http://10.0.0.5:4000

    # Check the discovered configuration
    company-manager config validate")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GraphQL endpoint address
    #[arg(long, global = true, env = "COMPANY_MANAGER_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `tui` subcommand
#[derive(Args, Default)]
struct TuiArgs {
    /// Section shown at startup (roles, teams, people)
    #[arg(short, long)]
    section: Option<Section>,

    /// Color theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse support
    #[arg(long)]
    no_mouse: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell (default)
    Tui(TuiArgs),

    /// List the selectable sections in menu order
    Sections,

    /// Show, validate, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .company-manager.yaml
    Init {
        /// Write the fully commented example
        #[arg(long)]
        full: bool,
        /// Target file (default: ./.company-manager.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the discovered configuration
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(!no_color)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command.unwrap_or(Commands::Tui(TuiArgs::default())) {
        Commands::Tui(args) => run_tui(cli.config, cli.endpoint, args),

        Commands::Sections => {
            let (config, _) = config::load_or_default(cli.config.as_deref());
            for section in Navigator::selectable() {
                let marker = if *section == config.navigation.default_section {
                    '*'
                } else {
                    ' '
                };
                println!("{marker} {}  {}", section.shortcut(), section.title());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "company-manager", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { action } => {
            let overrides = ConfigOverrides {
                endpoint: cli.endpoint,
                ..ConfigOverrides::default()
            };
            run_config(cli.config, &overrides, action)
        }
    }
}

fn run_tui(
    config_path: Option<PathBuf>,
    endpoint: Option<String>,
    args: TuiArgs,
) -> Result<ExitCode> {
    // Explicit --theme wins over the saved preference, which wins over the file
    let theme = args
        .theme
        .or_else(|| TuiPreferences::load().map(|prefs| prefs.theme));
    let overrides = ConfigOverrides {
        endpoint,
        default_section: args.section,
        theme,
        mouse_enabled: args.no_mouse.then_some(false),
    };

    let (config, loaded_from) =
        match AppConfig::from_file_with_overrides(config_path.as_deref(), &overrides) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("config error: {e}");
                return Ok(ExitCode::from(1));
            }
        };
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("config error: {error}");
        }
        return Ok(ExitCode::from(1));
    }

    let client = GraphQlClient::new(config.client.clone()).context("failed to set up GraphQL client")?;
    tracing::info!(
        endpoint = %client.endpoint(),
        section = %config.navigation.default_section,
        "starting shell"
    );

    tui::set_theme(Theme::from_name(&config.tui.theme));
    let mut app = App::new(Arc::new(client), config.navigation.default_section)
        .with_mouse(config.tui.mouse_enabled)
        .with_persisted_theme(true);

    tui::run_tui(&mut app, config.tui.tick_rate_ms).context("terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn run_config(
    config_path: Option<PathBuf>,
    overrides: &ConfigOverrides,
    action: ConfigAction,
) -> Result<ExitCode> {
    match action {
        ConfigAction::Show => {
            let (mut config, loaded_from) = config::load_or_default(config_path.as_deref());
            config.merge(overrides);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(ExitCode::SUCCESS)
        }

        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                dirs::config_dir().map(|p| p.join("company-manager")),
                dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(config_path.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(ExitCode::SUCCESS)
        }

        ConfigAction::Init { full, output } => {
            let target = match output {
                Some(path) => path,
                None => std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".company-manager.yaml"),
            };
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = if full {
                config::generate_full_example_config()
            } else {
                config::generate_example_config()
            };
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(ExitCode::SUCCESS)
        }

        ConfigAction::Schema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(ExitCode::SUCCESS)
        }

        ConfigAction::Validate => {
            let (config, loaded_from) =
                match AppConfig::from_file_with_overrides(config_path.as_deref(), overrides) {
                    Ok(loaded) => loaded,
                    Err(e) => {
                        eprintln!("Configuration is not usable: {e}");
                        return Ok(ExitCode::from(1));
                    }
                };
            let source = loaded_from.map_or_else(
                || "defaults".to_string(),
                |path| path.display().to_string(),
            );
            let errors = config.validate();
            if errors.is_empty() {
                eprintln!("Configuration OK ({source})");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Configuration has {} error(s) ({source}):", errors.len());
                for error in &errors {
                    eprintln!("  {error}");
                }
                Ok(ExitCode::from(1))
            }
        }
    }
}
