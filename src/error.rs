// Central error type for rowbind
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowbindError {
    #[error("No such element: the sequence is exhausted")]
    NoSuchElement,
    #[error("Item {0} not found")]
    ItemNotFound(String),
    #[error("Row is bound to {count} selectors; use the selector-qualified form")]
    MultipleSelectors { count: usize },
    #[error("Value not a {expected} (stored as {found})")]
    ValueFormat { expected: &'static str, found: &'static str },
    #[error("Repository error: {0}")]
    Repository(String),
    #[error("Malformed tuple: expected {expected} values, found {found}")]
    MalformedTuple { expected: usize, found: usize },
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Load error: {0}")]
    Load(String),
}

pub type Result<T> = std::result::Result<T, RowbindError>;

// Helper conversions
impl From<config::ConfigError> for RowbindError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for RowbindError {
    fn from(e: serde_json::Error) -> Self { Self::Load(e.to_string()) }
}
impl From<std::io::Error> for RowbindError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
