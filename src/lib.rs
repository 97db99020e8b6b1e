#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Static character-name alias table for external correction passes.
pub mod aliases;
/// Writer-string normalization helpers.
pub mod cleaning;
/// Centralized constants used across cleaning and encoding.
pub mod constants;
/// One-hot indicator encoding for writer credits.
pub mod encoding;
/// Boolean indicator frame produced by the encoder.
pub mod frame;
/// Shared type aliases.
pub mod types;

mod errors;

pub use aliases::{AliasPair, AliasTable, character_aliases};
pub use cleaning::{
    DEFAULT_DELIMITER, REPLACE_PAIRS, Replacement, apply_replacements, clean_writers,
    clean_writers_with_delimiter,
};
pub use encoding::{EncoderConfig, one_hot_writers, one_hot_writers_with_config};
pub use errors::PrepError;
pub use frame::BoolFrame;
pub use types::{AliasText, CanonicalName, ColumnName, RawCredit, WriterName};
