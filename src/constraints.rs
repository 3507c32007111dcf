use crate::catalog::CardCatalog;
use crate::models::{ColorIdentity, IssueKind};

/// Returns true if the card's reference price does not exceed the
/// per-card budget. Unknown cards are treated as price 0.
pub fn within_budget(catalog: &dyn CardCatalog, card_name: &str, budget: f64) -> bool {
    let price = catalog
        .lookup(card_name)
        .map(|card| card.reference_price)
        .unwrap_or(0.0);
    price <= budget
}

/// Returns true if the card is legal in the given format.
/// Unknown cards are assumed legal.
pub fn is_legal(catalog: &dyn CardCatalog, card_name: &str, format: &str) -> bool {
    match catalog.lookup(card_name) {
        Some(card) => !card.is_banned_in(format),
        None => true,
    }
}

/// Returns true if the card's colour identity is a subset of the deck's
/// allowed colours (rule 903.5c). Unknown cards always pass.
pub fn color_identity_ok(
    catalog: &dyn CardCatalog,
    card_name: &str,
    allowed_colors: &ColorIdentity,
) -> bool {
    match catalog.lookup(card_name) {
        Some(card) => card.color_identity.is_subset_of(allowed_colors),
        None => true,
    }
}

/// Evaluate one card against all deck constraints.
///
/// Always checks Price, then Format, then Color, and reports every failed
/// check rather than stopping at the first. Pure and total: no input,
/// including an unknown card name, makes this fail.
pub fn check_card(
    catalog: &dyn CardCatalog,
    card_name: &str,
    format: &str,
    budget: f64,
    allowed_colors: &ColorIdentity,
) -> Vec<IssueKind> {
    let mut issues = Vec::new();
    if !within_budget(catalog, card_name, budget) {
        issues.push(IssueKind::Price);
    }
    if !is_legal(catalog, card_name, format) {
        issues.push(IssueKind::Format);
    }
    if !color_identity_ok(catalog, card_name, allowed_colors) {
        issues.push(IssueKind::Color);
    }
    issues
}
