//! Entry CLI commands
//!
//! Implements the non-interactive add/list/show/remove commands.

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::{InventoryError, InventoryResult};
use crate::models::EntryDraft;
use crate::services::EntryService;
use crate::storage::Storage;

/// Handle `fourthstep add`
pub fn handle_add(
    storage: &Storage,
    who: String,
    what: String,
    affects: Option<String>,
    my_part: Option<String>,
) -> InventoryResult<()> {
    let service = EntryService::new(storage);

    let draft = EntryDraft::new(who, what)
        .affects(affects.unwrap_or_default())
        .my_part(my_part.unwrap_or_default());

    let entry = service.add(draft)?;
    println!("Added resentment {} ({})", entry.id.short(), entry.who);
    Ok(())
}

/// Handle `fourthstep list`
pub fn handle_list(storage: &Storage, settings: &Settings) -> InventoryResult<()> {
    let service = EntryService::new(storage);
    let entries = service.list()?;
    print!("{}", format_entry_list(&entries, settings));
    Ok(())
}

/// Handle `fourthstep show <entry>`
pub fn handle_show(storage: &Storage, settings: &Settings, identifier: &str) -> InventoryResult<()> {
    let service = EntryService::new(storage);

    let entry = service
        .find(identifier)?
        .ok_or_else(|| InventoryError::entry_not_found(identifier))?;

    print!("{}", format_entry_details(&entry, settings));
    Ok(())
}

/// Handle `fourthstep remove <entry>`
///
/// Deletion is two-step: the user confirms on stdin unless `--yes` was
/// passed (or confirmation is disabled in settings). Removing an id that is
/// already gone reports it without failing.
pub fn handle_remove(
    storage: &Storage,
    settings: &Settings,
    identifier: &str,
    yes: bool,
) -> InventoryResult<()> {
    let service = EntryService::new(storage);

    let entry = match service.find(identifier)? {
        Some(entry) => entry,
        None => {
            println!("No entry found for '{}'; nothing to do.", identifier);
            return Ok(());
        }
    };

    if !yes && settings.confirm_delete && !confirm(&format!("Delete resentment '{}'?", entry.who))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    service.remove(entry.id)?;
    println!("Deleted resentment {} ({})", entry.id.short(), entry.who);
    Ok(())
}

/// Ask a y/N question on the terminal
fn confirm(prompt: &str) -> InventoryResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| InventoryError::Io(format!("Failed to flush stdout: {}", e)))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| InventoryError::Io(format!("Failed to read confirmation: {}", e)))?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
