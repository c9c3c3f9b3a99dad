use thiserror::Error;

/// Errors raised by the form's state operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("'{0}' is not a valid category. Choose one of: Fruits, Vegetables.")]
    InvalidCategory(String),
}
