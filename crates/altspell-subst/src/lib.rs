//! Substitution engine restoring native letters from alternative spellings.
//!
//! Text typed without a proper keyboard layout spells German umlauts and
//! the eszett as "ae", "oe", "ue" and "ss". Restoring them is ambiguous
//! ("Abenteuer" must stay as it is), so the forward direction tests every
//! combination of substitutions against a dictionary of legal words.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- lossless split into word and non-word tokens
//! - [`substitution`] -- forward direction: occurrence finding, subset
//!   enumeration, span substitution, validation and policies
//! - [`reverse`] -- backward direction: one-pass character table
//!
//! All entry points are pure functions of their inputs. Mappings and word
//! lookups are owned by the caller and only borrowed here.

pub mod reverse;
pub mod substitution;
pub mod tokenizer;

pub use reverse::{TransliterationTable, backward};
pub use substitution::forward::{ForwardTokens, Substituter, forward, forward_tokens};
pub use substitution::{Alternatives, Policy};
