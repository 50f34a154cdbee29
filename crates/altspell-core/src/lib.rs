//! Shared types for restoring native letters from alternative spellings.
//!
//! - [`mapping`] -- native character to alternative spelling table
//! - [`lookup`] -- known-word sets used to validate candidates
//! - [`span`] -- spans and occurrences of alternative spellings in a word
//! - [`token`] / [`enums`] -- word and non-word tokens
//! - [`case`] / [`character`] -- case classification and conversion

pub mod case;
pub mod character;
pub mod enums;
pub mod lookup;
pub mod mapping;
pub mod span;
pub mod token;

pub use lookup::{Dictionary, WordLookup};
pub use mapping::{LanguageMapping, MappingError};
pub use span::{Occurrence, Span};
