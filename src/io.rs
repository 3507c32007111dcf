use crate::error::{EngineError, EngineResult};
use crate::models::DeckEntry;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

lazy_static! {
    /// Decklist line: quantity, optional 'x' suffix, card name.
    /// Accepts "1 Sol Ring", "2x Island", "10X Mountain".
    static ref DECK_LINE: Regex = Regex::new(r"^(\d+)\s*[xX]?\s+(\S.*)$").unwrap();
}

/// Parse one decklist line into (quantity, name), or None if it does not
/// match the quantity-prefix shape at all.
fn parse_deck_line(line: &str) -> Option<(u32, String)> {
    let caps = DECK_LINE.captures(line.trim())?;
    let quantity = caps[1].parse().ok()?;
    Some((quantity, caps[2].trim().to_string()))
}

/// Read a decklist from a plain-text file, one entry per line.
///
/// Blank lines, `//` and `#` comments, and the literal "Deck" section
/// header are skipped. Anything else must parse as `<qty>[x] <name>` with
/// a positive quantity; this is the validation boundary, so malformed
/// lines and zero quantities are errors here rather than inputs the
/// engine has to tolerate.
pub fn read_decklist(path: impl AsRef<Path>) -> EngineResult<Vec<DeckEntry>> {
    let file = File::open(path.as_ref())?;
    let reader = io::BufReader::new(file);
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty()
            || trimmed == "Deck"
            || trimmed.starts_with("//")
            || trimmed.starts_with('#')
        {
            continue;
        }

        let Some((quantity, name)) = parse_deck_line(trimmed) else {
            return Err(EngineError::MalformedDeckLine {
                line_number,
                line: trimmed.to_string(),
            });
        };
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity { card_name: name });
        }

        entries.push(DeckEntry::new(name, quantity));
    }

    log::info!(
        "Read {} deck entries from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

/// Validate a decklist built programmatically rather than read from a
/// file. The engine core assumes positive quantities and non-empty names;
/// callers assembling entries by hand run them through here first.
pub fn validate_decklist(entries: &[DeckEntry]) -> EngineResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.card_name.trim().is_empty() {
            return Err(EngineError::EmptyCardName {
                line_number: index + 1,
            });
        }
        if entry.quantity == 0 {
            return Err(EngineError::InvalidQuantity {
                card_name: entry.card_name.clone(),
            });
        }
    }
    Ok(())
}

/// Row shape of an owned-collection CSV export; only the name matters
#[derive(Debug, Deserialize)]
struct OwnedRow {
    name: String,
}

/// Read the set of owned card names from a CSV with a `name` column.
/// Ownership is per card name, not per copy, so quantities in the export
/// are irrelevant and duplicate rows collapse.
pub fn read_owned_cards(path: impl AsRef<Path>) -> EngineResult<HashSet<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut owned = HashSet::new();
    for result in rdr.deserialize() {
        let row: OwnedRow = result?;
        if !row.name.is_empty() {
            owned.insert(row.name);
        }
    }

    log::info!(
        "Read {} owned card names from {}",
        owned.len(),
        path.as_ref().display()
    );
    Ok(owned)
}
