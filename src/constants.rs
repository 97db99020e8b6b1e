use crate::cleaning::Replacement;

/// Constants used by the writer-string normalizer.
pub mod cleaning {
    use super::Replacement;

    /// Default delimiter separating individual writers in a credit string.
    pub const DEFAULT_DELIMITER: char = '&';

    /// Fixed, ordered replacement rules applied to every credit string before
    /// splitting. Each rule replaces all occurrences of its pattern; rules run
    /// in listed order, and that order is part of the contract (the `and`
    /// rule must see text already freed of non-breaking spaces).
    pub const REPLACE_PAIRS: [(&str, Replacement); 4] = [
        // Non-breaking space.
        ("\u{a0}", Replacement::Literal(" ")),
        // Hair space followed by a colon.
        ("\u{200a}:", Replacement::Literal(" ")),
        // The conjunction becomes the split delimiter.
        ("and", Replacement::Delimiter),
        // Credit boilerplate, removed wherever it occurs.
        ("Story by ", Replacement::Literal("")),
    ];
}

/// Constants used by the one-hot encoder.
pub mod encoding {
    /// Prefix prepended to writer names to form indicator column names.
    pub const INDICATOR_PREFIX: &str = "Writer_";
}
