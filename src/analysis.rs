use crate::catalog::CardCatalog;
use crate::constraints::check_card;
use crate::cost::cost_to_finish;
use crate::models::{Constraints, DeckEntry, Report, Violation};
use crate::pricing::PriceFeed;
use crate::replacements::recommend_with_defaults;
use std::collections::HashSet;

/// Maximum replacement suggestions attached to one violation
const MAX_SUGGESTIONS: usize = 5;

/// Ties the per-card checks, the recommender and the cost calculator
/// together over one shared catalog and price feed snapshot.
///
/// Holds only shared references to immutable data, so any number of
/// analyses may run concurrently against the same snapshots.
pub struct DeckAnalyzer<'a> {
    catalog: &'a dyn CardCatalog,
    feed: &'a dyn PriceFeed,
}

impl<'a> DeckAnalyzer<'a> {
    pub fn new(catalog: &'a dyn CardCatalog, feed: &'a dyn PriceFeed) -> Self {
        Self { catalog, feed }
    }

    /// Analyse a full decklist: flag constraint violations with
    /// replacement suggestions, compute the cost to finish, and attach a
    /// persona note. Cards passing every check produce no output entry.
    ///
    /// Infallible by contract: unknown cards and missing prices use safe
    /// defaults, and malformed input is rejected at the I/O boundary
    /// before it gets here.
    pub fn analyse(
        &self,
        constraints: &Constraints,
        decklist: &[DeckEntry],
        owned_cards: &HashSet<String>,
    ) -> Report {
        log::info!(
            "Analysing {} deck entries ({} format, budget {:.2})",
            decklist.len(),
            constraints.format,
            constraints.budget_per_card
        );

        let mut violations: Vec<Violation> = Vec::new();
        for entry in decklist {
            let issues = check_card(
                self.catalog,
                &entry.card_name,
                &constraints.format,
                constraints.budget_per_card,
                &constraints.color_identity,
            );
            if issues.is_empty() {
                continue;
            }

            let replacements = recommend_with_defaults(
                self.catalog,
                &entry.card_name,
                &constraints.format,
                &constraints.color_identity,
                MAX_SUGGESTIONS,
            );
            violations.push(Violation {
                original_card: entry.card_name.clone(),
                issue_kinds: issues,
                replacements,
            });
        }

        let (cost_to_finish_by_market, best_basket) =
            cost_to_finish(decklist, owned_cards, self.feed);

        match &best_basket {
            Some(basket) => log::info!(
                "Analysis complete: {} violation(s), best basket {}",
                violations.len(),
                basket.market.as_str()
            ),
            None => log::info!(
                "Analysis complete: {} violation(s), no market data",
                violations.len()
            ),
        }

        Report {
            violations,
            cost_to_finish_by_market,
            best_basket,
            notes: persona_note(&constraints.persona).to_string(),
        }
    }
}

/// One advisory sentence per recognised persona; anything else falls back
/// to a generic note. Pure lookup, never fails.
pub fn persona_note(persona: &str) -> &'static str {
    match persona.trim().to_lowercase().as_str() {
        "budget brewer" => "Budget persona: prioritise low-cost synergy pieces over flashy staples.",
        "spike" => "Spike persona: emphasise efficiency and high-impact staples.",
        _ => "Persona not recognised; using default recommendation mix.",
    }
}
