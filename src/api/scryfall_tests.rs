//! Tests for the Scryfall catalog source.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::scryfall::{
    derive_roles, fetch_card_named_from, load_catalog_from, to_card_record, ScryfallCard,
};
use crate::catalog::CardCatalog;
use crate::error::EngineError;
use crate::models::{Color, Role};

/// Helper: minimal Scryfall card JSON for mock responses
fn scryfall_card_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "print-uuid-123",
        "oracle_id": "oracle-uuid-123",
        "name": name,
        "color_identity": ["U"],
        "prices": { "eur": "1.50", "eur_foil": null, "usd": "2.00", "usd_foil": null },
        "legalities": { "commander": "legal", "modern": "banned" },
        "type_line": "Enchantment",
        "oracle_text": "Whenever an opponent casts a spell, you may draw a card."
    })
}

fn scryfall_error_json(code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "status": 404,
        "code": code,
        "details": details
    })
}

// ── fetch_card_named_from ────────────────────────────────────────────

#[tokio::test]
async fn fetch_card_named_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Rhystic Study"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(scryfall_card_json("Rhystic Study")),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result =
        tokio::task::spawn_blocking(move || fetch_card_named_from(&base_url, "Rhystic Study"))
            .await
            .unwrap();

    let card = result.unwrap();
    assert_eq!(card.name, "Rhystic Study");
    assert_eq!(card.oracle_id, "oracle-uuid-123");
    assert_eq!(card.color_identity, vec!["U"]);
    assert_eq!(card.legalities.get("modern").map(String::as_str), Some("banned"));
}

#[tokio::test]
async fn fetch_card_named_404_returns_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(404).set_body_json(scryfall_error_json(
            "not_found",
            "No card found with the given name",
        )))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result =
        tokio::task::spawn_blocking(move || fetch_card_named_from(&base_url, "Not A Card"))
            .await
            .unwrap();

    match result {
        Err(EngineError::ApiResponse { code, details }) => {
            assert_eq!(code, "not_found");
            assert!(details.contains("No card found"));
        }
        other => panic!("Expected EngineError::ApiResponse, got: {other:?}"),
    }
}

// ── to_card_record ───────────────────────────────────────────────────

#[test]
fn card_record_maps_prices_legalities_and_colors() {
    let card: ScryfallCard = serde_json::from_value(scryfall_card_json("Rhystic Study")).unwrap();
    let record = to_card_record(&card).unwrap();

    assert_eq!(record.name, "Rhystic Study");
    assert_eq!(record.oracle_id, "oracle-uuid-123");
    assert_eq!(record.reference_price, 1.5); // EUR stands in for the reference
    assert!(record.banned_in.contains("Modern"));
    assert!(!record.banned_in.contains("Commander"));
    assert!(record.color_identity.contains(Color::U));
    assert_eq!(record.roles, vec![Role::Draw]);
}

#[test]
fn card_record_missing_price_maps_to_zero() {
    let mut json = scryfall_card_json("Pauper Staple");
    json["prices"] = serde_json::json!({ "eur": null, "usd": null });
    let card: ScryfallCard = serde_json::from_value(json).unwrap();

    let record = to_card_record(&card).unwrap();
    assert_eq!(record.reference_price, 0.0);
}

#[test]
fn card_record_rejects_unknown_color_symbol() {
    let mut json = scryfall_card_json("Weird Card");
    json["color_identity"] = serde_json::json!(["U", "Q"]);
    let card: ScryfallCard = serde_json::from_value(json).unwrap();

    match to_card_record(&card) {
        Err(EngineError::UnknownColor { card_name, symbol }) => {
            assert_eq!(card_name, "Weird Card");
            assert_eq!(symbol, "Q");
        }
        other => panic!("Expected UnknownColor, got: {other:?}"),
    }
}

// ── derive_roles ─────────────────────────────────────────────────────

#[test]
fn derive_roles_from_card_text() {
    assert_eq!(derive_roles("Artifact", "{T}: Add {C}{C}."), vec![Role::Ramp]);
    assert_eq!(derive_roles("Basic Land — Island", ""), vec![Role::Fixing]);
    assert_eq!(
        derive_roles("Instant", "Counter target spell."),
        vec![Role::Control]
    );
    assert_eq!(
        derive_roles("Sorcery", "Destroy target creature."),
        vec![Role::Removal]
    );
    assert_eq!(
        derive_roles("Creature — Merfolk Wizard", "You win the game."),
        vec![Role::Wincon]
    );
}

#[test]
fn derive_roles_collects_multiple_roles() {
    let roles = derive_roles(
        "Creature — Dragon",
        "Whenever Goldspan Dragon attacks, create a treasure token. Draw a card.",
    );
    assert!(roles.contains(&Role::Ramp));
    assert!(roles.contains(&Role::Draw));
}

#[test]
fn derive_roles_defaults_to_utility() {
    assert_eq!(derive_roles("Creature — Bear", "Vanilla."), vec![Role::Utility]);
    assert_eq!(derive_roles("", ""), vec![Role::Utility]);
}

// ── load_catalog_from ────────────────────────────────────────────────

#[tokio::test]
async fn load_catalog_skips_unknown_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Rhystic Study"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(scryfall_card_json("Rhystic Study")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Imaginary Card"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(scryfall_error_json("not_found", "No card found")),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let catalog = tokio::task::spawn_blocking(move || {
        load_catalog_from(&base_url, &["Rhystic Study", "Imaginary Card"])
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.lookup("Rhystic Study").is_some());
    assert!(catalog.lookup("Imaginary Card").is_none());
}
