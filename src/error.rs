use std::fmt;

/// Unified error type for boundary operations (I/O, parsing, validation).
///
/// The analysis core itself never errors: unknown cards and missing prices
/// degrade to safe defaults. Everything here is raised before input reaches
/// the core or while talking to external services.
#[derive(Debug)]
pub enum EngineError {
    /// File I/O error
    Io(std::io::Error),
    /// Failed to parse JSON snapshot or response
    Parse(serde_json::Error),
    /// Failed to read a CSV collection export
    Csv(csv::Error),
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// API returned an error response
    ApiResponse { code: String, details: String },
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Decklist line could not be parsed
    MalformedDeckLine { line_number: usize, line: String },
    /// Decklist entry with a zero quantity
    InvalidQuantity { card_name: String },
    /// Decklist entry with an empty card name
    EmptyCardName { line_number: usize },
    /// Snapshot contained an unknown colour symbol
    UnknownColor { card_name: String, symbol: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io(e) => write!(f, "I/O error: {}", e),
            EngineError::Parse(e) => write!(f, "Parse error: {}", e),
            EngineError::Csv(e) => write!(f, "CSV error: {}", e),
            EngineError::Network(e) => write!(f, "Network error: {}", e),
            EngineError::ApiResponse { code, details } => write!(f, "{}: {}", code, details),
            EngineError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            EngineError::MalformedDeckLine { line_number, line } => {
                write!(f, "Malformed decklist line {}: '{}'", line_number, line)
            }
            EngineError::InvalidQuantity { card_name } => {
                write!(f, "Quantity must be positive for card: {}", card_name)
            }
            EngineError::EmptyCardName { line_number } => {
                write!(f, "Empty card name on decklist line {}", line_number)
            }
            EngineError::UnknownColor { card_name, symbol } => {
                write!(f, "Unknown colour symbol '{}' for card: {}", symbol, card_name)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            EngineError::Parse(e) => Some(e),
            EngineError::Csv(e) => Some(e),
            EngineError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Parse(err)
    }
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::Csv(err)
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::Network(err)
    }
}

/// Result type alias for boundary operations
pub type EngineResult<T> = Result<T, EngineError>;
