//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a group or a member does not exist.
//! - [`InvalidInput`] thrown when a required field is missing or a reference
//!   does not point to a current member.
//! - [`InvalidAmount`] thrown when an amount cannot be turned into [`Money`].
//! - [`Conflict`] thrown when a member still has expenses attached.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`Conflict`]: EngineError::Conflict
//!  [`Money`]: super::money::Money
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("{0}")]
    Conflict(String),
}
