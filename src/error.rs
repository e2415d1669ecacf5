use std::fmt;

/// Rejections from the economy engine. State is left untouched in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum EconomyError {
    /// The id is not part of the upgrade catalog.
    UnknownUpgrade(String),
    /// The player holds less currency than the next unit costs.
    InsufficientFunds { cost: u64, available: f64 },
}

impl fmt::Display for EconomyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EconomyError::UnknownUpgrade(id) => write!(f, "Unknown upgrade: {id}"),
            EconomyError::InsufficientFunds { cost, available } => write!(
                f,
                "Insufficient funds: need {cost}, have {}",
                available.floor()
            ),
        }
    }
}

impl std::error::Error for EconomyError {}

/// A field of a persisted save that had to be replaced with a default.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveIssue {
    /// The text was not JSON at all.
    NotJson(String),
    /// The JSON root was not an object (null, number, string, array...).
    NotAnObject,
    /// `cookies` was missing, non-numeric or negative.
    BadCurrency,
    /// `owned` was present but not an object.
    BadOwned,
    /// `owned.<id>` was present but not a usable count.
    BadCount(String),
}

impl fmt::Display for SaveIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveIssue::NotJson(msg) => write!(f, "save is not valid JSON: {msg}"),
            SaveIssue::NotAnObject => write!(f, "save root is not an object"),
            SaveIssue::BadCurrency => write!(f, "cookies is not a valid amount, using 0"),
            SaveIssue::BadOwned => write!(f, "owned is not an object, using empty"),
            SaveIssue::BadCount(id) => write!(f, "owned.{id} is not a valid count, using 0"),
        }
    }
}

/// Failures talking to the browser key-value store.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No window or localStorage is disabled.
    Unavailable,
    /// `setItem` threw (typically the quota was exceeded).
    WriteFailed(String),
    /// The game could not be encoded.
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {msg}"),
            StorageError::Encode(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Encode(e.to_string())
    }
}
