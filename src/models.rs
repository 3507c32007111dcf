use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The five mana colours. Colourless cards carry an empty identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    W,
    U,
    B,
    R,
    G,
}

impl Color {
    /// Returns the single-letter colour symbol (e.g., "U")
    pub fn as_symbol(&self) -> &'static str {
        match self {
            Color::W => "W",
            Color::U => "U",
            Color::B => "B",
            Color::R => "R",
            Color::G => "G",
        }
    }

    /// Parse a colour symbol (case-insensitive) into a Color
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "W" => Some(Color::W),
            "U" => Some(Color::U),
            "B" => Some(Color::B),
            "R" => Some(Color::R),
            "G" => Some(Color::G),
            _ => None,
        }
    }

    /// Returns all colours in WUBRG order
    pub fn all() -> &'static [Color] {
        &[Color::W, Color::U, Color::B, Color::R, Color::G]
    }
}

/// A card's colour identity: the set of colour symbols in its cost and
/// rules text. Deck membership is always a subset test against the allowed
/// colours, never an equality test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorIdentity(BTreeSet<Color>);

impl ColorIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colorless() -> Self {
        Self::default()
    }

    /// Build an identity from colour symbols, e.g. `["U", "R"]`.
    /// Unknown symbols are rejected so bad snapshot data surfaces early.
    pub fn from_symbols<'a, I>(symbols: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut colors = BTreeSet::new();
        for s in symbols {
            match Color::from_symbol(s) {
                Some(c) => {
                    colors.insert(c);
                }
                None => return Err(s.to_string()),
            }
        }
        Ok(Self(colors))
    }

    pub fn insert(&mut self, color: Color) {
        self.0.insert(color);
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    pub fn is_subset_of(&self, other: &ColorIdentity) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorIdentity {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Functional role a card plays in a deck. Replacements must share at
/// least one role with the card they stand in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Ramp,
    Draw,
    Removal,
    Fixing,
    Protection,
    Control,
    #[serde(rename = "Combo Piece")]
    ComboPiece,
    Wincon,
    Utility,
}

impl Role {
    /// Returns the display name of the role (e.g., "Ramp", "Combo Piece")
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ramp => "Ramp",
            Role::Draw => "Draw",
            Role::Removal => "Removal",
            Role::Fixing => "Fixing",
            Role::Protection => "Protection",
            Role::Control => "Control",
            Role::ComboPiece => "Combo Piece",
            Role::Wincon => "Wincon",
            Role::Utility => "Utility",
        }
    }

    /// Parse a display name into a Role
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ramp" => Some(Role::Ramp),
            "draw" => Some(Role::Draw),
            "removal" => Some(Role::Removal),
            "fixing" => Some(Role::Fixing),
            "protection" => Some(Role::Protection),
            "control" => Some(Role::Control),
            "combo piece" => Some(Role::ComboPiece),
            "wincon" => Some(Role::Wincon),
            "utility" => Some(Role::Utility),
            _ => None,
        }
    }
}

/// Static reference data for one card. Populated once from a catalog
/// source at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub oracle_id: String,
    #[serde(default)]
    pub color_identity: ColorIdentity,
    /// Cheapest-printing price in the canonical currency (GBP)
    #[serde(default)]
    pub reference_price: f64,
    #[serde(default)]
    pub banned_in: BTreeSet<String>,
    /// Recorded roles in priority order. May be empty in a snapshot;
    /// the role assigner substitutes Utility in that case.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl CardRecord {
    pub fn is_banned_in(&self, format: &str) -> bool {
        self.banned_in.contains(format)
    }
}

/// One line of a decklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card_name: String,
    pub quantity: u32,
}

impl DeckEntry {
    pub fn new(card_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            card_name: card_name.into(),
            quantity,
        }
    }
}

/// Deck-level constraints the analysis runs against
#[derive(Debug, Clone)]
pub struct Constraints {
    pub format: String,
    pub budget_per_card: f64,
    pub color_identity: ColorIdentity,
    /// Free-form player persona label, only used for advisory notes
    pub persona: String,
}

/// Kind of constraint a card violates. Evaluation order is fixed:
/// Price, then Format, then Color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    Price,
    Format,
    Color,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Price => "Price",
            IssueKind::Format => "Format",
            IssueKind::Color => "Color",
        }
    }
}

/// A proposed replacement for a violating card
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub card_name: String,
    pub oracle_id: String,
    /// Label of the price tier the suggestion was accepted into
    pub tier: String,
    /// Rationale, hard-capped at 25 words
    pub reason: String,
    pub price: f64,
    pub roles: Vec<Role>,
}

/// A card that failed one or more constraint checks, with replacements
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub original_card: String,
    pub issue_kinds: Vec<IssueKind>,
    pub replacements: Vec<Suggestion>,
}

/// Full analysis output
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub violations: Vec<Violation>,
    pub cost_to_finish_by_market: Vec<crate::pricing::MarketEntry>,
    /// Cheapest market basket; absent when the feed covers no markets
    pub best_basket: Option<crate::pricing::MarketEntry>,
    pub notes: String,
}
