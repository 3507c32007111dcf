use crate::pricing::{Market, PriceFeed};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Caller-owned cache for unit-price lookups.
///
/// Keyed by `(card name, market)` with an explicit time-to-live supplied
/// at construction. The engine core never touches this; it exists for
/// callers whose price feed adapter fronts an expensive external service.
/// Absence of price data is cached too, so a card a market does not stock
/// is not re-fetched on every analysis.
#[derive(Debug)]
pub struct PriceCache {
    ttl: Duration,
    entries: HashMap<(String, Market), CachedPrice>,
}

#[derive(Debug, Clone)]
struct CachedPrice {
    price: Option<f64>,
    fetched_at: DateTime<Utc>,
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    fn key(card_name: &str, market: &Market) -> (String, Market) {
        (card_name.to_string(), market.clone())
    }

    /// Get a cached price, or `None` if absent or past its TTL.
    /// The outer Option is cache presence; the inner is price presence.
    pub fn get(&self, card_name: &str, market: &Market) -> Option<Option<f64>> {
        let entry = self.entries.get(&Self::key(card_name, market))?;
        if Utc::now() - entry.fetched_at > self.ttl {
            return None;
        }
        Some(entry.price)
    }

    pub fn insert(&mut self, card_name: &str, market: &Market, price: Option<f64>) {
        self.entries.insert(
            Self::key(card_name, market),
            CachedPrice {
                price,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Drop every entry past its TTL
    pub fn purge_expired(&mut self) {
        let now = Utc::now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| now - entry.fetched_at <= ttl);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            log::debug!("Purged {} expired price cache entries", dropped);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up a unit price, checking the cache first and recording the feed's
/// answer (including "no price") on a miss.
pub fn unit_price_cached(
    cache: &mut PriceCache,
    feed: &dyn PriceFeed,
    card_name: &str,
    market: &Market,
) -> Option<f64> {
    if let Some(price) = cache.get(card_name, market) {
        log::debug!("Price cache hit for {} on {}", card_name, market.as_str());
        return price;
    }

    log::debug!("Price cache miss for {} on {}", card_name, market.as_str());
    let price = feed.unit_price(card_name, market);
    cache.insert(card_name, market, price);
    price
}
