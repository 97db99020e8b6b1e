/// Raw writer-credit string as it appears in the source dataset.
/// Example: `Story by Jane\u{a0}and Bo`
pub type RawCredit = String;
/// Canonical writer name after cleaning (trimmed, delimiter-free).
/// Examples: `Jane`, `Bo`
pub type WriterName = String;
/// Name of an indicator column in the output frame.
/// Example: `Writer_Jane`
pub type ColumnName = String;
/// Misspelled or variant character name, as found in dialogue records.
/// Examples: `ersei`, `sandor`
pub type AliasText = String;
/// Canonical character name an alias maps to.
/// Examples: `cersei`, `sandor clegane`
pub type CanonicalName = String;
