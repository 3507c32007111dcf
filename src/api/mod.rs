//! Clients for external card-data services (Scryfall)

pub mod scryfall;

#[cfg(test)]
mod scryfall_tests;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use scryfall::{fetch_card_named, load_catalog, ScryfallCard};
