//! One-hot indicator encoding for writer-credit columns.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::debug;

use crate::cleaning::{apply_replacements, clean_writers_with_delimiter};
use crate::constants::cleaning::DEFAULT_DELIMITER;
use crate::constants::encoding::INDICATOR_PREFIX;
use crate::errors::PrepError;
use crate::frame::BoolFrame;
use crate::types::{RawCredit, WriterName};

/// Controls how the one-hot encoder discovers and matches writer names.
#[derive(Clone, Debug)]
pub struct EncoderConfig {
    /// Delimiter separating individual writers in a credit string.
    pub delimiter: char,
    /// Prefix prepended to writer names to form indicator column names.
    pub indicator_prefix: Cow<'static, str>,
    /// Match writer names against the cleaned credit string instead of the
    /// raw one.
    ///
    /// The historical behavior (and the default) tests each discovered name
    /// against the record's original, un-normalized string, so names altered
    /// by the cleaning rules may never match their own record. Enable this to
    /// match against the same cleaned text the names were derived from.
    pub match_cleaned: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            indicator_prefix: Cow::Borrowed(INDICATOR_PREFIX),
            match_cleaned: false,
        }
    }
}

/// One-hot encode a writer-credit column with the default configuration.
pub fn one_hot_writers(column: &[RawCredit]) -> Result<BoolFrame, PrepError> {
    one_hot_writers_with_config(column, &EncoderConfig::default())
}

/// One-hot encode a writer-credit column.
///
/// The writer universe is discovered by cleaning the column's distinct raw
/// strings. Each discovered name becomes one boolean column, named
/// `{prefix}{name}`, true for every record whose credit string contains the
/// name as a substring. Columns are emitted in sorted name order so output is
/// deterministic; the raw column itself is never part of the output.
///
/// Substring containment means a name that is a prefix of another (`"An"` vs
/// `"Anna"`) marks both columns true; this matches the source dataset's
/// historical encoding and is kept deliberately.
pub fn one_hot_writers_with_config(
    column: &[RawCredit],
    config: &EncoderConfig,
) -> Result<BoolFrame, PrepError> {
    let distinct: HashSet<&str> = column.iter().map(String::as_str).collect();
    let mut writers: Vec<WriterName> =
        clean_writers_with_delimiter(distinct, config.delimiter).into_iter().collect();
    writers.sort();

    debug!(
        records = column.len(),
        writers = writers.len(),
        match_cleaned = config.match_cleaned,
        "building writer indicator frame"
    );

    let haystacks: Vec<Cow<'_, str>> = column
        .iter()
        .map(|raw| {
            if config.match_cleaned {
                Cow::Owned(apply_replacements(raw, config.delimiter))
            } else {
                Cow::Borrowed(raw.as_str())
            }
        })
        .collect();

    let mut frame = BoolFrame::with_rows(column.len());
    for writer in &writers {
        let values: Vec<bool> = haystacks
            .iter()
            .map(|haystack| haystack.contains(writer.as_str()))
            .collect();
        frame.push_column(format!("{}{}", config.indicator_prefix, writer), values)?;
    }
    Ok(frame)
}
