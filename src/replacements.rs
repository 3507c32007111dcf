use crate::catalog::CardCatalog;
use crate::constraints::is_legal;
use crate::models::{CardRecord, ColorIdentity, Role, Suggestion};
use crate::roles::{roles_of, shares_role};

/// Format used to decide whether a suggestion's reason mentions a
/// legality advantage over the original card. Kept independent of the
/// caller's analysis format; a product decision pending confirmation.
pub const BASELINE_FORMAT: &str = "Commander";

/// Hard word cap on suggestion rationales
const MAX_REASON_WORDS: usize = 25;

/// A labelled price ceiling for grouping suggestions
#[derive(Debug, Clone)]
pub struct PriceTier {
    pub label: String,
    pub max_price: f64,
}

impl PriceTier {
    pub fn new(label: impl Into<String>, max_price: f64) -> Self {
        Self {
            label: label.into(),
            max_price,
        }
    }
}

/// The standard Budget / Mid / Premium ladder
pub fn default_tiers() -> Vec<PriceTier> {
    vec![
        PriceTier::new("Budget", 5.0),
        PriceTier::new("Mid", 15.0),
        PriceTier::new("Premium", f64::INFINITY),
    ]
}

/// Suggest replacements for a card that violated deck constraints.
///
/// Candidates are every other catalog card that is legal in the deck's
/// format, fits inside its colour identity, and shares at least one role
/// with the original — the pool is filtered against the deck's
/// constraints, not against whatever the original card got flagged for,
/// so a replacement is always strictly conforming.
///
/// The pool is sorted by reference price ascending (stable, so catalog
/// order breaks ties), then walked once per tier in the given order.
/// A card is accepted into the first tier whose ceiling covers its price
/// and never repeats in a later tier. Collection stops at
/// `max_suggestions`. An empty result is a valid outcome, not an error,
/// and an unknown original still gets suggestions via its Utility default.
pub fn recommend(
    catalog: &dyn CardCatalog,
    card_name: &str,
    format: &str,
    allowed_colors: &ColorIdentity,
    tiers: &[PriceTier],
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let original_roles = roles_of(catalog, card_name);

    let mut candidates: Vec<&CardRecord> = catalog
        .records()
        .iter()
        .filter(|card| card.name != card_name)
        .filter(|card| !card.is_banned_in(format))
        .filter(|card| card.color_identity.is_subset_of(allowed_colors))
        .filter(|card| shares_role(&card.roles, &original_roles))
        .collect();

    // Stable sort: equal prices keep catalog order
    candidates.sort_by(|a, b| {
        a.reference_price
            .partial_cmp(&b.reference_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut suggestions: Vec<Suggestion> = Vec::new();
    'tiers: for tier in tiers {
        for card in &candidates {
            if suggestions.len() >= max_suggestions {
                break 'tiers;
            }
            if card.reference_price > tier.max_price {
                continue;
            }
            if suggestions.iter().any(|s| s.card_name == card.name) {
                continue;
            }
            suggestions.push(Suggestion {
                card_name: card.name.clone(),
                oracle_id: card.oracle_id.clone(),
                tier: tier.label.clone(),
                reason: build_reason(catalog, card_name, card, &original_roles),
                price: crate::cost::round2(card.reference_price),
                roles: card.roles.clone(),
            });
        }
    }

    log::debug!(
        "{} replacement(s) found for '{}' in {}",
        suggestions.len(),
        card_name,
        format
    );
    suggestions
}

/// Build a short rationale: first shared role, a cost qualifier, and a
/// legality note when the original is banned in the baseline format.
fn build_reason(
    catalog: &dyn CardCatalog,
    original_card: &str,
    replacement: &CardRecord,
    original_roles: &[Role],
) -> String {
    let primary_role = replacement
        .roles
        .iter()
        .find(|role| original_roles.contains(role))
        .or_else(|| replacement.roles.first())
        .copied()
        .unwrap_or(Role::Utility);

    let mut parts = vec![format!(
        "Shares the {} role",
        primary_role.as_str().to_lowercase()
    )];

    if replacement.reference_price <= 5.0 {
        parts.push("and fits a tight budget".to_string());
    } else if replacement.reference_price <= 15.0 {
        parts.push("at a midrange cost".to_string());
    } else {
        parts.push("as a high-end upgrade".to_string());
    }

    if !is_legal(catalog, original_card, BASELINE_FORMAT) {
        parts.push("and is legal where the original is not".to_string());
    }

    truncate_words(&parts.join(", "), MAX_REASON_WORDS)
}

/// Cut a sentence to at most `max_words` words, ignoring sentence bounds
fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        words[..max_words].join(" ")
    } else {
        text.to_string()
    }
}

/// Convenience: `recommend` against the constraint set the deck analysis
/// uses, with the default tier ladder.
pub fn recommend_with_defaults(
    catalog: &dyn CardCatalog,
    card_name: &str,
    format: &str,
    allowed_colors: &ColorIdentity,
    max_suggestions: usize,
) -> Vec<Suggestion> {
    recommend(
        catalog,
        card_name,
        format,
        allowed_colors,
        &default_tiers(),
        max_suggestions,
    )
}
