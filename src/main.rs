use anyhow::Result;
use clap::{Parser, Subcommand};

use fourthstep::cli::{handle_add, handle_list, handle_remove, handle_show};
use fourthstep::config::{paths::InventoryPaths, settings::Settings};
use fourthstep::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fourthstep",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based fourth-step resentment inventory",
    long_about = "FourthStep keeps a running fourth-step resentment inventory: \
                  who you resent, what happened, how it affects you, and your \
                  part in it. Entries live in a local JSON file and can be \
                  managed from the command line or the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add a new resentment entry
    Add {
        /// Who or what you are resentful at
        who: String,
        /// What happened
        what: String,
        /// How it affects you
        #[arg(short, long)]
        affects: Option<String>,
        /// Your part in it
        #[arg(short, long)]
        my_part: Option<String>,
    },

    /// List all entries
    List,

    /// Show one entry in full
    Show {
        /// Entry id (full or short form)
        entry: String,
    },

    /// Remove an entry
    #[command(alias = "rm")]
    Remove {
        /// Entry id (full or short form)
        entry: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = InventoryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // First run: persist the defaults so the user has a config file to edit
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    let load_outcome = storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) | None => {
            fourthstep::tui::run_tui(&storage, &settings, load_outcome)?;
        }
        Some(Commands::Add { who, what, affects, my_part }) => {
            handle_add(&storage, who, what, affects, my_part)?;
        }
        Some(Commands::List) => {
            handle_list(&storage, &settings)?;
        }
        Some(Commands::Show { entry }) => {
            handle_show(&storage, &settings, &entry)?;
        }
        Some(Commands::Remove { entry, yes }) => {
            handle_remove(&storage, &settings, &entry, yes)?;
        }
        Some(Commands::Config) => {
            println!("FourthStep Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Entries file:    {}", paths.entries_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:    {}", settings.date_format);
            println!("  Confirm delete: {}", settings.confirm_delete);
        }
    }

    Ok(())
}
