use crate::catalog::InMemoryCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{CardRecord, ColorIdentity, Role};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

const SCRYFALL_API: &str = "https://api.scryfall.com";

/// Scryfall card response, reduced to the fields the catalog needs
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScryfallCard {
    pub id: String,
    pub oracle_id: String,
    pub name: String,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub prices: ScryfallPrices,
    /// Format name -> "legal" / "banned" / "restricted" / "not_legal"
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ScryfallPrices {
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Fetch a card by exact name from a given API base URL.
/// The injectable base URL keeps this testable against a mock server.
pub fn fetch_card_named_from(base_url: &str, card_name: &str) -> EngineResult<ScryfallCard> {
    let url = format!("{}/cards/named", base_url);

    log::info!("Fetching card from Scryfall: {}", card_name);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .query(&[("exact", card_name)])
        .header("User-Agent", "deck_advisor/0.1")
        .send()?;

    if response.status().is_success() {
        Ok(response.json::<ScryfallCard>()?)
    } else {
        let error: ScryfallError = response.json()?;
        Err(EngineError::ApiResponse {
            code: error.code,
            details: error.details,
        })
    }
}

/// Fetch a card by exact name from the production Scryfall API
pub fn fetch_card_named(card_name: &str) -> EngineResult<ScryfallCard> {
    fetch_card_named_from(SCRYFALL_API, card_name)
}

/// Convert a Scryfall response into a catalog record.
///
/// Scryfall publishes no GBP figure, so its EUR price stands in for the
/// reference price; a missing price maps to 0 (never fails the budget
/// check). Formats with a "banned" legality populate `banned_in` under
/// their capitalised names. Roles are derived from the card text since
/// Scryfall carries no role taxonomy.
pub fn to_card_record(card: &ScryfallCard) -> EngineResult<CardRecord> {
    let color_identity = ColorIdentity::from_symbols(card.color_identity.iter().map(|s| s.as_str()))
        .map_err(|symbol| EngineError::UnknownColor {
            card_name: card.name.clone(),
            symbol,
        })?;

    let reference_price = card
        .prices
        .eur
        .as_deref()
        .and_then(|p| p.parse::<f64>().ok())
        .unwrap_or(0.0);

    let banned_in: BTreeSet<String> = card
        .legalities
        .iter()
        .filter(|(_, status)| status.as_str() == "banned")
        .map(|(format, _)| capitalize(format))
        .collect();

    Ok(CardRecord {
        name: card.name.clone(),
        oracle_id: card.oracle_id.clone(),
        color_identity,
        reference_price,
        banned_in,
        roles: derive_roles(
            card.type_line.as_deref().unwrap_or(""),
            card.oracle_text.as_deref().unwrap_or(""),
        ),
    })
}

/// Derive functional roles from a card's type line and oracle text.
/// Keyword heuristic only; cards that trip nothing classify as Utility.
pub fn derive_roles(type_line: &str, oracle_text: &str) -> Vec<Role> {
    let type_line = type_line.to_lowercase();
    let text = oracle_text.to_lowercase();
    let mut roles = Vec::new();

    if type_line.contains("land")
        || (text.contains("search your library for a") && text.contains("land"))
    {
        roles.push(Role::Fixing);
    }
    if text.contains("add {") || text.contains("create a treasure") || text.contains("treasure token")
    {
        roles.push(Role::Ramp);
    }
    if text.contains("draw a card") || text.contains("draw cards") || text.contains("draws a card") {
        roles.push(Role::Draw);
    }
    if text.contains("destroy target") || text.contains("exile target") {
        roles.push(Role::Removal);
    }
    if text.contains("counter target") {
        roles.push(Role::Control);
    }
    if text.contains("hexproof") || text.contains("indestructible") || text.contains("protection from")
    {
        roles.push(Role::Protection);
    }
    if text.contains("you win the game") || text.contains("loses the game") {
        roles.push(Role::Wincon);
    }

    if roles.is_empty() {
        roles.push(Role::Utility);
    }
    roles
}

/// Resolve a list of card names into a catalog snapshot.
///
/// Cards Scryfall does not know are skipped with a warning: unknown cards
/// are steady-state inputs for the engine, which treats them with safe
/// defaults. Network failures do abort the load.
pub fn load_catalog_from(base_url: &str, card_names: &[&str]) -> EngineResult<InMemoryCatalog> {
    let mut catalog = InMemoryCatalog::new();
    for name in card_names {
        match fetch_card_named_from(base_url, name) {
            Ok(card) => catalog.insert(to_card_record(&card)?),
            Err(EngineError::ApiResponse { code, details }) if code == "not_found" => {
                log::warn!("Card '{}' not found on Scryfall: {}", name, details);
            }
            Err(e) => return Err(e),
        }
    }
    log::info!(
        "Resolved {} of {} card names into the catalog",
        catalog.len(),
        card_names.len()
    );
    Ok(catalog)
}

/// Resolve a list of card names against the production Scryfall API
pub fn load_catalog(card_names: &[&str]) -> EngineResult<InMemoryCatalog> {
    load_catalog_from(SCRYFALL_API, card_names)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
