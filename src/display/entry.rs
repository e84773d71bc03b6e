//! Entry display formatting
//!
//! Formats entries for terminal output in list and detail views.

use crate::config::Settings;
use crate::models::Entry;

/// Format the entry collection as a table
pub fn format_entry_list(entries: &[Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No resentments added yet. Run 'fourthstep add' to start your inventory.\n"
            .to_string();
    }

    let who_width = entries
        .iter()
        .map(|e| e.who.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<who_width$}  {:<10}  {}\n",
        "Id",
        "Who",
        "Added",
        "What happened",
        who_width = who_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<who_width$}  {:-<10}  {:-<30}\n",
        "",
        "",
        "",
        "",
        who_width = who_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<12}  {:<who_width$}  {:<10}  {}\n",
            entry.id.short(),
            entry.who,
            entry.created_at.format(&settings.date_format),
            entry.what,
            who_width = who_width,
        ));
    }

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    output.push_str(&format!("\n{} {}\n", entries.len(), noun));
    output
}

/// Format a single entry's details
///
/// Blank optional fields are omitted, matching the card view.
pub fn format_entry_details(entry: &Entry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Resentment: {}\n", entry.who));
    output.push_str(&format!("  Id:   {}\n", entry.id));
    output.push('\n');
    output.push_str(&format!("  What happened:\n    {}\n", entry.what));

    if !entry.affects.is_empty() {
        output.push_str(&format!("  How it affects me:\n    {}\n", entry.affects));
    }

    if !entry.my_part.is_empty() {
        output.push_str(&format!("  My part:\n    {}\n", entry.my_part));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Added: {}\n",
        entry.created_at.format(&settings.date_format)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;

    fn test_entry() -> Entry {
        Entry::from_draft(
            EntryDraft::new("Boss", "Criticized me publicly")
                .affects("My self-esteem")
                .my_part("I exaggerated my role"),
        )
        .unwrap()
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            test_entry(),
            Entry::from_draft(EntryDraft::new("Landlord", "Raised the rent")).unwrap(),
        ];

        let output = format_entry_list(&entries, &Settings::default());
        assert!(output.contains("Boss"));
        assert!(output.contains("Landlord"));
        assert!(output.contains("2 entries"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&[], &Settings::default());
        assert!(output.contains("No resentments added yet"));
    }

    #[test]
    fn test_format_details_shows_all_fields() {
        let output = format_entry_details(&test_entry(), &Settings::default());

        assert!(output.contains("Boss"));
        assert!(output.contains("Criticized me publicly"));
        assert!(output.contains("How it affects me"));
        assert!(output.contains("My part"));
    }

    #[test]
    fn test_format_details_omits_blank_fields() {
        let entry = Entry::from_draft(EntryDraft::new("Boss", "Criticized me")).unwrap();
        let output = format_entry_details(&entry, &Settings::default());

        assert!(!output.contains("How it affects me"));
        assert!(!output.contains("My part"));
    }
}
