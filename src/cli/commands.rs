//! CLI commands

use crate::core::{parse_date, TimedObject};
use crate::error::Result;
use crate::store::{FileStore, ObjectStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronogen CLI
#[derive(Parser)]
#[command(name = "chronogen")]
#[command(about = "Generation-based temporal versioning for domain objects")]
pub struct Cli {
    /// Directory holding the object store
    #[arg(short, long, default_value = ".chronogen")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new timed object
    Create {
        /// Object name
        name: String,
    },
    /// Add a generation to an object
    Add {
        /// Object name
        name: String,
        /// Date the generation becomes effective (YYYY-MM-DD)
        #[arg(short, long)]
        valid_from: String,
        /// JSON content; omitted content is cloned from the effective generation
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Show an object's generations in date order
    Show {
        /// Object name
        name: String,
    },
    /// Print the generation effective on a date
    EffectiveOn {
        /// Object name
        name: String,
        /// Effective date (YYYY-MM-DD)
        date: String,
        /// Clamp to the timeline's bounds instead of reporting no match
        #[arg(long)]
        best_match: bool,
    },
    /// Truncate the timeline to begin at a new date
    Reassign {
        /// Object name
        name: String,
        /// New starting date (YYYY-MM-DD)
        date: String,
    },
    /// Collapse the timeline to a single generation
    Retain {
        /// Object name
        name: String,
        /// Date selecting the generation to keep (YYYY-MM-DD)
        old_date: String,
        /// Date the kept generation becomes effective (YYYY-MM-DD)
        new_date: String,
    },
    /// Remove the generation effective exactly on a date
    Remove {
        /// Object name
        name: String,
        /// Exact valid-from date of the generation (YYYY-MM-DD)
        date: String,
    },
    /// Check an object for consistency problems
    Validate {
        /// Object name
        name: String,
    },
    /// List stored objects
    List,
}

/// Execute a parsed command against the file store
pub fn run(cli: Cli) -> Result<()> {
    let mut store = FileStore::open(&cli.store)?;

    match cli.command {
        Commands::Create { name } => {
            let object = TimedObject::new(name.clone());
            store.save(&object)?;
            println!("Created object '{}'", name);
        }
        Commands::Add {
            name,
            valid_from,
            content,
        } => {
            let valid_from = parse_date(&valid_from)?;
            let mut object = store.load(&name)?;
            let id = object.new_generation(valid_from);
            if let Some(json) = content {
                let value = serde_json::from_str(&json)?;
                if let Some(generation) = object.generation_by_id_mut(id) {
                    *generation.content_mut() = value;
                }
            }
            store.save(&object)?;
            println!("Added generation {} valid from {}", id, valid_from);
        }
        Commands::Show { name } => {
            let object = store.load(&name)?;
            println!("{} ({} generations)", object.name(), object.generation_count());
            for generation in object.generations_ordered_by_valid_date() {
                if let Some(period) = object.validity_period_of(generation.id()) {
                    println!("  {} {} {}", generation.id(), period, generation.content());
                }
            }
        }
        Commands::EffectiveOn {
            name,
            date,
            best_match,
        } => {
            let date = parse_date(&date)?;
            let object = store.load(&name)?;
            let found = if best_match {
                object.best_matching_generation_effective_on(date)
            } else {
                object.generation_effective_on(date)
            };
            match found {
                Some(generation) => println!(
                    "{} valid from {}: {}",
                    generation.id(),
                    generation.valid_from(),
                    generation.content()
                ),
                None => println!("No generation effective on {}", date),
            }
        }
        Commands::Reassign { name, date } => {
            let date = parse_date(&date)?;
            let mut object = store.load(&name)?;
            object.reassign_generations(date);
            store.save(&object)?;
            println!(
                "Reassigned '{}', {} generations remain",
                name,
                object.generation_count()
            );
        }
        Commands::Retain {
            name,
            old_date,
            new_date,
        } => {
            let old_date = parse_date(&old_date)?;
            let new_date = parse_date(&new_date)?;
            let mut object = store.load(&name)?;
            let id = object.retain_only_generation(old_date, new_date);
            store.save(&object)?;
            println!("Retained generation {} valid from {}", id, new_date);
        }
        Commands::Remove { name, date } => {
            let date = parse_date(&date)?;
            let mut object = store.load(&name)?;
            match object.generation_by_effective_date(date).map(|g| g.id()) {
                Some(id) => {
                    object.delete_generation(id);
                    store.save(&object)?;
                    println!("Removed generation {}", id);
                }
                None => println!("No generation valid from {}", date),
            }
        }
        Commands::Validate { name } => {
            let object = store.load(&name)?;
            let messages = object.validate();
            if messages.is_empty() {
                println!("'{}' is consistent", name);
            } else {
                for message in messages {
                    println!("{}", message);
                }
            }
        }
        Commands::List => {
            for name in store.list()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
