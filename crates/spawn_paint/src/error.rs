//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Only wiring mistakes surface here: invalid editor configuration and a host
//! simulation that breaks its species contract. Ordinary editing input never
//! produces an error.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("host simulation exposes no species list")]
    MissingSpecies,

    #[error("host reports {reported} species but exposes {available} species records")]
    SpeciesCountMismatch { reported: usize, available: usize },
}
