mod check;
mod config_cmd;
mod session;
mod tree;
mod workouts;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skill_coach::Catalog;
use std::path::{Path, PathBuf};

use crate::config::Config;

pub use session::SessionCommand;

#[derive(Parser)]
#[command(name = "skill-coach")]
#[command(about = "Inspect calisthenics workout catalogs and skill trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SKILL_COACH_CONFIG")]
    config: Option<PathBuf>,

    /// JSON catalog to use instead of the bundled one
    #[arg(long, global = true, env = "SKILL_COACH_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse catalog workouts
    #[command(subcommand)]
    Workouts(WorkoutsSubcommands),

    /// Show the progression tree for a skill
    Tree {
        /// Skill name (handstand, planche, lsit, front-lever, back-lever)
        skill: String,
    },

    /// Check the catalog for invalid records and broken references
    Check,

    /// Assemble a session from workout ids and print it
    Session(SessionCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum WorkoutsSubcommands {
    /// List catalog workouts
    List {
        /// Filter by category (warmup, skill, strength, cooldown)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by targeted muscle group
        #[arg(short, long)]
        muscle: Option<String>,

        /// Only workouts within two levels of this one
        #[arg(short, long)]
        level: Option<i32>,
    },

    /// Show workout details
    Show {
        /// Workout ID
        id: String,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings every command runs with.
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl AppContext {
    pub async fn catalog(&self) -> Result<Catalog> {
        load_catalog(self.catalog_path.as_deref()).await
    }
}

/// Read a catalog file, or fall back to the bundled catalog.
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            tracing::debug!("Loading catalog from {}", path.display());
            let contents = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            Catalog::from_json_str(&contents)
                .with_context(|| format!("Failed to parse catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        let config_path = Config::resolve_path(self.config.as_deref())?;
        let config = Config::load_from(&config_path)?;
        if !config.ui.color {
            colored::control::set_override(false);
        }

        let catalog_path = self.catalog.or_else(|| config.catalog.path.clone());
        let ctx = AppContext {
            config,
            config_path,
            catalog_path,
        };

        match self.command {
            Commands::Workouts(subcmd) => match subcmd {
                WorkoutsSubcommands::List {
                    category,
                    muscle,
                    level,
                } => workouts::list_workouts(&ctx, category, muscle, level).await,
                WorkoutsSubcommands::Show { id } => workouts::show_workout(&ctx, &id).await,
            },
            Commands::Tree { skill } => tree::show_tree(&ctx, &skill).await,
            Commands::Check => check::check_catalog(&ctx).await,
            Commands::Session(cmd) => cmd.execute(&ctx).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx).await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(&ctx, force).await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
