use crate::models::DeckEntry;
use crate::pricing::{MarketEntry, PriceFeed};
use std::collections::{BTreeMap, HashSet};

/// Round a monetary amount to 2 fraction digits
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Compute the cost to complete the deck across every market the feed
/// covers, plus the cheapest option.
///
/// Owned cards are excluded at card-name granularity: a card either is
/// owned (all copies free) or is not. Quantities for the same card are
/// summed across duplicate decklist entries. A card with no price in a
/// market simply contributes zero to that market's total; markets are not
/// penalised for incomplete coverage. Totals are rounded to 2 digits and
/// the best basket is the strictly smallest rounded total, first market
/// in feed order winning exact ties.
///
/// An empty decklist, or one the player owns outright, yields zero in
/// every market with the first market as best basket. A feed covering no
/// markets yields an empty totals list and no best basket.
pub fn cost_to_finish(
    decklist: &[DeckEntry],
    owned_names: &HashSet<String>,
    feed: &dyn PriceFeed,
) -> (Vec<MarketEntry>, Option<MarketEntry>) {
    // BTreeMap fixes the summation order; floating-point addition is not
    // associative, so iterating in map order keeps identical inputs
    // producing identical totals.
    let mut missing: BTreeMap<&str, u32> = BTreeMap::new();
    for entry in decklist {
        if owned_names.contains(&entry.card_name) {
            continue;
        }
        *missing.entry(entry.card_name.as_str()).or_insert(0) += entry.quantity;
    }

    let mut market_totals: Vec<MarketEntry> = Vec::new();
    let mut best: Option<MarketEntry> = None;

    for market in feed.markets() {
        let total: f64 = missing
            .iter()
            .filter_map(|(name, qty)| {
                feed.unit_price(name, &market)
                    .map(|price| price * f64::from(*qty))
            })
            .sum();

        let currency = market.currency_code();
        let entry = MarketEntry {
            market,
            currency,
            total: round2(total),
        };

        // Strictly-smaller comparison keeps the first market on ties
        if best.as_ref().map_or(true, |b| entry.total < b.total) {
            best = Some(entry.clone());
        }
        market_totals.push(entry);
    }

    match &best {
        Some(basket) => log::debug!(
            "Cost to finish: {} missing card(s), best basket {} at {:.2} {}",
            missing.len(),
            basket.market.as_str(),
            basket.total,
            basket.currency
        ),
        None => log::debug!(
            "Cost to finish: {} missing card(s), no markets covered",
            missing.len()
        ),
    }

    (market_totals, best)
}
