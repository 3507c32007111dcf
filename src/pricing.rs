use crate::error::EngineResult;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Baseline currency used for reference prices and for anything that
/// cannot be mapped to a concrete market.
pub const BASELINE_CURRENCY: &str = "GBP";

/// A pricing source. Each market trades in exactly one currency, so the
/// currency code lives on the variant instead of being re-derived from
/// the market name at every call site. Markets outside the known set are
/// carried as `Other` and trade in the baseline currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Market {
    Cardmarket,
    MagicMadhouse,
    Tcgplayer,
    Other(String),
}

impl Market {
    /// Returns the market's display name
    pub fn as_str(&self) -> &str {
        match self {
            Market::Cardmarket => "Cardmarket",
            Market::MagicMadhouse => "MagicMadhouse",
            Market::Tcgplayer => "TCGplayer",
            Market::Other(name) => name,
        }
    }

    /// Returns the ISO 4217 currency code the market trades in
    pub fn currency_code(&self) -> &'static str {
        match self {
            Market::Cardmarket => "EUR",
            Market::MagicMadhouse => "GBP",
            Market::Tcgplayer => "USD",
            Market::Other(_) => BASELINE_CURRENCY,
        }
    }

    /// Map a market name (case-insensitive) to a Market. Names outside
    /// the known set come back as `Other`, keeping their original
    /// spelling; such markets still get cost totals, in the baseline
    /// currency.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "cardmarket" => Market::Cardmarket,
            "magicmadhouse" => Market::MagicMadhouse,
            "tcgplayer" => Market::Tcgplayer,
            _ => Market::Other(name.trim().to_string()),
        }
    }

    /// Returns the markets with a dedicated currency mapping
    pub fn all() -> &'static [Market] {
        &[Market::Cardmarket, Market::MagicMadhouse, Market::Tcgplayer]
    }
}

/// Cost-to-finish total for one market
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketEntry {
    pub market: Market,
    pub currency: &'static str,
    pub total: f64,
}

/// Read-only snapshot of per-market unit prices.
///
/// `markets()` defines the iteration order the cost calculator uses; ties
/// on total are broken by the first market seen in that order. Missing
/// prices are expected steady-state data, not errors.
pub trait PriceFeed {
    /// Markets covered by this feed, in stable order
    fn markets(&self) -> Vec<Market>;

    /// Best-effort unit price for one card in one market
    fn unit_price(&self, card_name: &str, market: &Market) -> Option<f64>;
}

/// Price feed backed by in-memory per-market tables
#[derive(Debug, Default)]
pub struct InMemoryPriceFeed {
    markets: Vec<Market>,
    prices: HashMap<Market, HashMap<String, f64>>,
}

impl InMemoryPriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a market (appended to iteration order) with its price table
    pub fn add_market(&mut self, market: Market, prices: HashMap<String, f64>) {
        if !self.markets.contains(&market) {
            self.markets.push(market.clone());
        }
        self.prices.entry(market).or_default().extend(prices);
    }

    pub fn set_price(&mut self, market: Market, card_name: impl Into<String>, price: f64) {
        if !self.markets.contains(&market) {
            self.markets.push(market.clone());
        }
        self.prices
            .entry(market)
            .or_default()
            .insert(card_name.into(), price);
    }

    /// Load a feed from a JSON object keyed by market name:
    /// `{"Cardmarket": {"Sol Ring": 1.5}, ...}`.
    ///
    /// Market order follows the file. Names that do not map to a known
    /// market are kept, with their totals reported in the baseline
    /// currency.
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        // serde_json is built with preserve_order, so market order follows the file
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)?;

        let mut feed = Self::new();
        for (market_name, table) in raw {
            let market = Market::from_name(&market_name);
            if let Market::Other(name) = &market {
                log::warn!(
                    "Market '{}' in price snapshot is not recognised; reporting its totals in {}",
                    name,
                    BASELINE_CURRENCY
                );
            }
            let table: HashMap<String, f64> = serde_json::from_value(table)?;
            feed.add_market(market, table);
        }

        log::info!(
            "Loaded price feed covering {} markets from {}",
            feed.markets.len(),
            path.as_ref().display()
        );
        Ok(feed)
    }
}

impl PriceFeed for InMemoryPriceFeed {
    fn markets(&self) -> Vec<Market> {
        self.markets.clone()
    }

    fn unit_price(&self, card_name: &str, market: &Market) -> Option<f64> {
        self.prices
            .get(market)
            .and_then(|table| table.get(card_name))
            .copied()
    }
}
