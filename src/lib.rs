pub mod analysis;
pub mod api;
pub mod cache;
pub mod catalog;
pub mod constraints;
pub mod cost;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod pricing;
pub mod replacements;
pub mod roles;

// Re-export commonly used items
pub use analysis::{persona_note, DeckAnalyzer};
pub use cache::{unit_price_cached, PriceCache};
pub use catalog::{CardCatalog, InMemoryCatalog};
pub use constraints::check_card;
pub use cost::cost_to_finish;
pub use error::{EngineError, EngineResult};
pub use formatters::format_report;
pub use io::{read_decklist, read_owned_cards, validate_decklist};
pub use models::{
    CardRecord, Color, ColorIdentity, Constraints, DeckEntry, IssueKind, Report, Role, Suggestion,
    Violation,
};
pub use pricing::{InMemoryPriceFeed, Market, MarketEntry, PriceFeed};
pub use replacements::{default_tiers, recommend, PriceTier};
pub use roles::roles_of;
