//! Static character-name alias table for external correction passes.
//!
//! Dialogue records in the source dataset credit the same character under
//! many variant spellings. This module holds the ordered list of
//! `(alias, canonical)` corrections authored for that dataset. The list is
//! pure data: this crate never applies it, it only exposes it read-only for
//! a caller-side correction pass that scans the pairs in listed order and
//! replaces matching alias substrings with their canonical form.
//!
//! Duplicate and overlapping aliases are present on purpose; order is
//! significant, and later entries may re-map the output of earlier ones when
//! chained by the consumer.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::{AliasText, CanonicalName};

/// One correction: a variant spelling and the canonical name it maps to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasPair {
    /// Variant spelling as found in the data.
    pub alias: AliasText,
    /// Canonical replacement.
    pub canonical: CanonicalName,
}

/// An ordered, read-only sequence of alias corrections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTable {
    pairs: Vec<AliasPair>,
}

impl AliasTable {
    /// Build a table from `(alias, canonical)` pairs, preserving order.
    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<AliasText>,
        C: Into<CanonicalName>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(alias, canonical)| AliasPair {
                    alias: alias.into(),
                    canonical: canonical.into(),
                })
                .collect(),
        }
    }

    /// Iterate the corrections in listed order.
    pub fn pairs(&self) -> impl Iterator<Item = &AliasPair> {
        self.pairs.iter()
    }

    /// Number of corrections in the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when the table holds no corrections.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a AliasTable {
    type Item = &'a AliasPair;
    type IntoIter = std::slice::Iter<'a, AliasPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Process-wide character-name correction table, built once on first use.
pub fn character_aliases() -> &'static AliasTable {
    static TABLE: LazyLock<AliasTable> =
        LazyLock::new(|| AliasTable::from_pairs(CHARACTER_ALIAS_PAIRS.iter().copied()));
    &TABLE
}

/// Raw correction data, in authored order.
const CHARACTER_ALIAS_PAIRS: &[(&str, &str)] = &[
    ("missandei", "mereen missandei"),
    ("alliser", "alliser thorne"),
    ("alliser thorn", "alliser thorne"),
    ("alliser throne", "alliser thorne"),
    ("alliser", "alliser thorne"),
    ("robin", "robin arryn"),
    ("tanner", "karl tanner"),
    ("beric", "beric dondarrion"),
    ("priestess", "red priestess"),
    ("hodor", "hodor luwin"),
    ("watch brother", "nights watch brother"),
    ("owner", "slave owner"),
    ("ersei", "cersei"),
    ("yohn", "yohn royce"),
    ("sandor", "sandor clegane"),
    ("lollys", "lollys stokeworth"),
    ("kraznys", "kraznys mo nakloz"),
    ("lysa", "lysa arryn"),
    ("mordane", "septa mordane"),
    ("buyer", "slave buyer"),
    ("olenna", "lady olenna"),
    ("red priest", "red priestess"),
    ("drogo", "khal drogo"),
    ("roose", "roose bolton"),
    ("yarwyck", "othell yarwyck"),
    ("yarwick", "othell yarwick"),
    ("janos", "janos slunt"),
    ("aemon", "maester aemon"),
    ("pie", "hot pie"),
    ("sparrow", "high sparrow"),
    ("wolkan", "maester wolkan"),
    ("bron", "bronn"),
    ("meryn", "meryn trant"),
    ("maester pycell", "maester pycelle"),
    ("robett", "robett glover"),
    ("illyrio", "illyrio mopatis"),
    ("pycelle", "maester pycelle"),
    ("jora", "jorah"),
    ("walder", "walder frey"),
    ("barristan", "barristan selmy"),
    ("worm", "grey worm"),
    ("pycell", "maester pycelle"),
    ("mord", "septa mordane"),
    ("a young melara", "melara"),
    ("knight of house frey", "knight"),
    ("knight of house bracken", "knight"),
    ("knight of house whent", "knight"),
    ("vale knight", "knight"),
    ("army closed in loras", "loras"),
    ("its starting to tickler", "tickler"),
    ("thenn warg", "warg"),
    ("davos sighs davos", "davos"),
    ("davo davos", "davos"),
    ("blackwater bay davos", "davos"),
    ("night davos", "davos"),
    ("voices outside", "voice"),
    ("male voice", "voice"),
    ("a voice", "voice"),
    ("all together", "together"),
    ("nights watch brother", "nights watch"),
    ("quarantine rooms marwyn", "marwyn"),
    ("thronekhal drogo", "khal drogo"),
    ("i just couldnt qhorin", "qhorin"),
    ("kingsguard septa mordane", "septa mordane"),
    ("theon theon", "theon"),
    ("why would theon roose", "theon"),
    ("and then theon", "theon"),
    ("sraw theon", "theon"),
    ("third time bronn", "bronn"),
    ("brand", "bran"),
    ("brans voice", "bran"),
    ("qyburns", "qyburn"),
    ("dungeons qyburn", "qyburn"),
    ("jaimes quarters jaime", "jaime"),
    ("yaras ship nymeria", "nymeria"),
    ("night watch stable boy", "boy"),
    ("stable boy", "boy"),
    ("vile thin man", "thin man"),
    ("sansa master of arms", "sansa"),
    ("so sansa", "sansa"),
    ("and so xaro", "xaro"),
    ("but talisa", "talisa"),
    ("shhh talisa", "talisa"),
    ("steward of house", "steward"),
    ("dothraki woman", "woman"),
    ("lhazareen woman", "woman"),
    ("yaras ship nymeria", "yara"),
    ("ings road brienne", "brienne"),
    ("streets euron", "euron"),
    ("wine merchant", "merchant"),
    ("grand maester pycelle", "maester pycelle"),
    ("elder meereen slave", "meereen slave"),
    ("bring me lancel", "lancel"),
    ("i lancel", "lancel"),
    ("captains quarters ellaria", "ellaria"),
    ("ser jorah", "jorah"),
    ("wildling elder", "wildling"),
    ("and remember littlefinger", "littlefinger"),
    ("day podrick", "podrick"),
    ("frey soldier", "soldier"),
    ("wounded soldier", "soldier"),
    ("unphased melisandre", "melisandre"),
    ("oh stannis", "stannis"),
    ("stannis dwarf", "stannis"),
    ("manservant", "man"),
    ("thin man", "man"),
    ("old man", "man"),
    ("young man", "man"),
    ("bolton bannerman", "man"),
    ("frey man", "man"),
    ("watchman", "man"),
    ("dying man", "man"),
    ("go man", "man"),
    ("head man", "man"),
    ("robb robb", "robb"),
    ("she robb", "robb"),
    ("robb dwarf", "robb"),
    ("i cant lose robb", "robb"),
    ("too much robb", "robb"),
    ("ingsgua meryn trant", "meryn trant"),
    ("ned", "ned stark"),
    ("blonde prostitute", "prostitute"),
    ("head prostitute", "prostitute"),
    ("black haired prostitute", "prostitute"),
    ("it sounded margaery", "margaery"),
    ("medicine margaery", "margaery"),
    ("joffrey dwarf", "joffrey"),
    ("king joffrey", "joffrey"),
    ("the crowd laughs joffrey", "joffrey"),
    ("please joffrey", "joffrey"),
    ("ll be safe gilly", "gilly"),
    ("guard captain", "captain"),
    ("of dorne captain", "captain"),
    ("kings guard", "guard"),
    ("frey guard", "guard"),
    ("kingsguard", "guard"),
    ("not guard", "guard"),
    ("bolton guard", "guard"),
    ("yohn royce", "john royce"),
    ("lord royce", "john royce"),
    ("thr young rodrik", "rodrik cassal"),
    ("a younger melara", "melara"),
    ("young ned", "ned"),
    ("quaithe", "quaith"),
    ("watchmen", "men"),
    ("bannermen", "men"),
    ("frey men", "men"),
    ("moles town whore", "whore"),
    ("but shae", "shae"),
    ("we pray shae", "shae"),
    ("young lyanna", "lyanna"),
    ("well catelyn", "catelyn"),
    ("our orders catelyn", "catelyn"),
    ("but catelyn", "catelyn"),
    ("luwin", "maester luwin"),
    ("ros", "roslin"),
    ("dany", "daenerys"),
    ("ayra", "arya"),
    ("brinenne", "brienne"),
    ("catelyin", "catelyn"),
    ("cersel", "cersei"),
    ("cersie", "cersei"),
    ("daerneys", "daenerys"),
    ("dav os", "davos"),
    ("doloroud edd", "dolorous edd"),
    ("dolrous edd", "dolorous edd"),
    ("darrio", "dario"),
    ("ed", "eddark"),
    ("edd", "eddark"),
    ("eddision", "eddison tollett"),
    ("eddison", "eddison tollett"),
    ("father arya", "arya"),
    ("ill arya", "arya"),
    ("grand maester pyrcelle", "maester pycelle"),
    ("great hall jon", "jon"),
    ("greyworm", "grey worm"),
    ("hodor luwin", "hodor"),
    ("young hodor", "hodor"),
    ("gold cloack", "gold cloak"),
    ("jaime", "jamie"),
    ("jofffrey", "joffrey"),
    ("kings quarters jon", "jon"),
    ("maryn trant", "meryn trant"),
    ("melisdandre", "melisandre"),
    ("mountian", "mountain"),
    ("mhaegan", "mhaegen"),
    ("mosador", "mossador"),
    ("othell yarwyck", "othell yarwick"),
    ("pyat pree", "pyatt pree"),
    ("ramsey", "ramsay"),
    ("rickon", "rikon"),
    ("rodrick cassel", "rodrik cassal"),
    ("rodrik", "rodrik cassal"),
    ("roz", "roslin"),
    ("sallador", "salladhor"),
    ("twyin", "tywin"),
    ("tyriom", "tyrion"),
    ("tyron", "tyrion"),
    ("t daario", "daario naharis"),
    ("daaerio", "darrio naharis"),
    ("daario", "daario naharis"),
    ("walkways jon", "jon"),
    ("and grenn", "grenn"),
    ("janos slynt", "janos slunt"),
    ("allister", "alliser thorne"),
    ("melisdandre", "melisandre"),
    ("waldery frey", "walder frey"),
    ("ser barristan", "barristan selmy"),
    ("ser alliser", "alliser thorne"),
    ("hizdahr", "hizdahr zo loraq"),
    ("lorren", "black lorren"),
    ("john", "john royce"),
    ("maid", "handmaiden"),
    ("karl", "karl tanner"),
    ("waif", "beat waif"),
    ("nakloz", "kraznys mo nakloz"),
    ("walda", "lady walda"),
    ("rickard", "rickard kar"),
    ("cassel", "jory cassel"),
    ("council room tycho", "tycho"),
    ("anguy", "fat anguy"),
    ("lock him up dagmer", "dagmer"),
    ("lommy", "lommy greenhands"),
    ("kar", "rickard kar"),
    ("lord kar", "rickard kar"),
    ("loboda loboda", "loboda"),
    ("aerson", "aeron"),
    ("rakharo", "rhakaro"),
];
