//! MindBridge CLI - Anonymous counselor booking from the terminal
//!
//! Usage:
//!   mindbridge book                 Book a session interactively
//!   mindbridge counselors           List counselors
//!   mindbridge slots [--date D]     List dates, or the time slots of one date
//!   mindbridge render [...]         Print the view for a given state
//!   mindbridge init                 Create a template mindbridge.toml

mod interactive;
mod text;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use mindbridge_common::catalog::date_label;
use mindbridge_common::config::generate_template;
use mindbridge_common::reference::RandomReferences;
use mindbridge_common::{paths, Catalog};
use mindbridge_wizard::BookingWizard;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mindbridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MindBridge - Anonymous student counseling bookings")]
struct Cli {
    /// Path to a catalog file (default: ./mindbridge.toml, then ~/.config/mindbridge/)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    silent: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a counseling session interactively
    Book {
        /// Seed for booking references (reproducible runs)
        #[arg(long, hide = true)]
        seed: Option<u64>,
    },

    /// List counselors
    Counselors,

    /// List session dates, or the time slots on one date
    Slots {
        /// ISO date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print the wizard view for a counselor/date choice
    Render {
        /// Counselor id to select
        #[arg(long)]
        counselor: Option<String>,

        /// Date to select (requires --counselor)
        #[arg(long, requires = "counselor")]
        date: Option<String>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a template mindbridge.toml in the current directory
    Init {
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
}

// Console helper for output control
pub(crate) struct Console {
    silent: bool,
    verbose: bool,
}

impl Console {
    fn new(silent: bool, verbose: bool) -> Self {
        Self { silent, verbose }
    }

    pub(crate) fn log(&self, msg: impl std::fmt::Display) {
        if !self.silent {
            println!("{}", msg);
        }
    }

    pub(crate) fn verbose(&self, msg: impl std::fmt::Display) {
        if self.verbose && !self.silent {
            println!("  {}", msg);
        }
    }

    pub(crate) fn success(&self, msg: impl std::fmt::Display) {
        if !self.silent {
            println!("✅ {}", msg);
        }
    }

    pub(crate) fn warn(&self, msg: impl std::fmt::Display) {
        if !self.silent {
            eprintln!("⚠️  {}", msg);
        }
    }

    pub(crate) fn error(&self, msg: impl std::fmt::Display) {
        eprintln!("❌ {}", msg); // Always print errors
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let console = Console::new(cli.silent, cli.verbose);

    // Initialize logging - only if not in silent mode
    if !cli.silent {
        let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
        let _ = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .try_init();
    }

    let catalog = cli.catalog.as_deref();
    match cli.command {
        Commands::Book { seed } => cmd_book(load_catalog(catalog, &console)?, seed, &console),
        Commands::Counselors => cmd_counselors(&*load_catalog(catalog, &console)?, &console),
        Commands::Slots { date } => {
            cmd_slots(&*load_catalog(catalog, &console)?, date.as_deref(), &console)
        }
        Commands::Render { counselor, date, json } => cmd_render(
            load_catalog(catalog, &console)?,
            counselor.as_deref(),
            date.as_deref(),
            json,
        ),
        Commands::Init { force } => cmd_init(force, &console),
    }
}

fn load_catalog(explicit: Option<&Path>, console: &Console) -> Result<Arc<Catalog>> {
    let dir = std::env::current_dir()?;
    let (catalog, source) = Catalog::discover(explicit, &dir)?;

    match source {
        Some(path) => console.verbose(format!("Catalog: {}", path.display())),
        None => console.verbose("Catalog: built-in"),
    }

    Ok(Arc::new(catalog))
}

/// Interactive booking
fn cmd_book(catalog: Arc<Catalog>, seed: Option<u64>, console: &Console) -> Result<()> {
    console.log("💙 MindBridge - Anonymous Counseling\n");

    let wizard = match seed {
        Some(seed) => BookingWizard::with_references(catalog, Box::new(RandomReferences::seeded(seed))),
        None => BookingWizard::new(catalog),
    };

    interactive::run(wizard, console)
}

/// List counselors
fn cmd_counselors(catalog: &Catalog, console: &Console) -> Result<()> {
    for c in &catalog.counselors {
        console.log(format!("{} [{}] {} - {}", c.avatar, c.id, c.name, c.title));
        console.log(format!(
            "      ⭐ {}  {} sessions  {}  📍 {} Campus",
            c.rating, c.total_sessions, c.experience, c.institution
        ));
        console.verbose(format!("Specializations: {}", c.specialization.join(", ")));
        console.verbose(format!("Languages: {}", c.languages.join(", ")));
        console.verbose(format!("Available Days: {}", c.available_days.join(", ")));
    }
    Ok(())
}

/// List dates, or the slots on one date
fn cmd_slots(catalog: &Catalog, date: Option<&str>, console: &Console) -> Result<()> {
    let Some(date) = date else {
        for date in catalog.dates() {
            let open = catalog.slots_on(date).filter(|s| s.available).count();
            console.log(format!("{}  {}  ({} open)", date, date_label(date), open));
        }
        return Ok(());
    };

    if !catalog.has_date(date) {
        anyhow::bail!(
            "No time slots on {}\n\
             Run 'mindbridge slots' to see the available dates",
            date
        );
    }

    console.log(format!("📅 {}", date_label(date)));
    for slot in catalog.slots_on(date) {
        let status = if slot.available { "available" } else { "unavailable" };
        console.log(format!("   [{}] {:>8}  {}", slot.id, slot.time, status));
    }
    Ok(())
}

/// Print the view for a scripted state
fn cmd_render(
    catalog: Arc<Catalog>,
    counselor: Option<&str>,
    date: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut wizard = BookingWizard::new(catalog);

    if let Some(id) = counselor {
        wizard.select_counselor(id)?;
    }
    if date.is_some() {
        wizard.select_date(date)?;
    }

    let view = wizard.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", text::render_view(&view));
    }
    Ok(())
}

/// Write a template mindbridge.toml
fn cmd_init(force: bool, console: &Console) -> Result<()> {
    let config_path = paths::catalog_in(&std::env::current_dir()?);

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt("mindbridge.toml already exists. Overwrite?")
            .default(false)
            .interact()?;

        if !overwrite {
            console.log("Cancelled.");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_template())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    console.success(format!("Created {}", config_path.display()));
    Ok(())
}
