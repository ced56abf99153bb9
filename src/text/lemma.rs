// Noun lemmatization with WordNet-style morphology.
//
// WordNet's morphy reduces a noun by trying a handful of suffix substitutions
// and keeping whichever candidate exists in its dictionary. We ship no
// dictionary, so the rules are ordered longest suffix first and guarded by an
// exception table (irregular plurals) and an invariant list (words that end
// in "s" but are not plurals). Only noun rules apply: "jumps" becomes "jump",
// "jumped" stays "jumped".

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::traits::Lemmatizer;

/// Irregular plurals and plurals the suffix rules would get wrong.
const ENGLISH_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("alumni", "alumnus"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("syllabi", "syllabus"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("axes", "axis"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("lenses", "lens"),
    ("quizzes", "quiz"),
    ("viruses", "virus"),
    ("focuses", "focus"),
    ("bonuses", "bonus"),
    ("campuses", "campus"),
    ("statuses", "status"),
    ("censuses", "census"),
    ("choruses", "chorus"),
    ("circuses", "circus"),
    ("geniuses", "genius"),
    ("consensuses", "consensus"),
    ("apparatuses", "apparatus"),
    ("prospectuses", "prospectus"),
    ("corpuses", "corpus"),
    ("surpluses", "surplus"),
    ("minuses", "minus"),
    ("pluses", "plus"),
    ("onuses", "onus"),
    ("sinuses", "sinus"),
    ("fetuses", "fetus"),
    ("hiatuses", "hiatus"),
    ("walruses", "walrus"),
    ("octopuses", "octopus"),
    ("platypuses", "platypus"),
    ("cactuses", "cactus"),
    ("syllabuses", "syllabus"),
    ("irises", "iris"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wives", "wife"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("selves", "self"),
    ("elves", "elf"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("aches", "ache"),
    ("headaches", "headache"),
    ("avalanches", "avalanche"),
    ("moustaches", "moustache"),
    ("cliches", "cliche"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("zombies", "zombie"),
    ("calories", "calorie"),
    ("rookies", "rookie"),
    ("hoodies", "hoodie"),
    ("selfies", "selfie"),
    ("brownies", "brownie"),
];

/// Words left untouched even though a suffix rule matches them.
const ENGLISH_INVARIANTS: &[&str] = &[
    "news", "series", "species", "lens", "atlas", "canvas", "bias", "alias", "chaos", "cosmos",
    "ethos", "pathos", "always", "perhaps", "towards", "afterwards", "besides", "sometimes",
    "whereas", "overseas", "nowadays", "specimen", "abdomen", "acumen", "regimen", "omen",
    "stamen", "semen", "bitumen", "albumen", "lumen", "dolmen", "cyclamen",
];

/// Suffix substitutions, longest suffix first. The first rule whose suffix
/// matches and whose guard accepts the stem wins.
const NOUN_RULES: &[SuffixRule] = &[
    SuffixRule::new("sses", "ss", 1),
    SuffixRule::new("shes", "sh", 1),
    SuffixRule::new("ches", "ch", 1),
    SuffixRule::new("zzes", "zz", 1),
    SuffixRule::new("ies", "y", 2),
    SuffixRule::new("xes", "x", 1),
    SuffixRule::new("men", "man", 1),
    SuffixRule::new("s", "", 3),
];

/// Endings that look plural but are not ("glass", "bonus", "analysis").
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Words this short are returned unchanged.
const MIN_INFLECTED_CHARS: usize = 4;

struct SuffixRule {
    suffix: &'static str,
    replacement: &'static str,
    min_stem_chars: usize,
}

impl SuffixRule {
    const fn new(suffix: &'static str, replacement: &'static str, min_stem_chars: usize) -> Self {
        Self {
            suffix,
            replacement,
            min_stem_chars,
        }
    }

    fn apply(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.suffix)?;
        if stem.chars().count() < self.min_stem_chars {
            return None;
        }
        if self.suffix == "s" && SINGULAR_S_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return None;
        }
        Some(format!("{stem}{}", self.replacement))
    }
}

/// Exception and invariant tables backing [`NounLemmatizer`].
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
    exceptions: HashMap<String, String>,
    invariants: HashSet<String>,
}

impl LemmaTable {
    /// The bundled English table.
    pub fn english() -> Self {
        Self {
            exceptions: ENGLISH_EXCEPTIONS
                .iter()
                .map(|(inflected, lemma)| (inflected.to_string(), lemma.to_string()))
                .collect(),
            invariants: ENGLISH_INVARIANTS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parse a lemma file body.
    ///
    /// Each line is either `inflected lemma` (an exception) or a single word
    /// (an invariant). `#` starts a comment. Lines with more fields, or with
    /// anything other than letters, are rejected with their line number.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut table = Self::default();
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default();
            let fields: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
            if let Some(bad) = fields
                .iter()
                .find(|f| !f.chars().all(char::is_alphabetic))
            {
                anyhow::bail!(
                    "Invalid lemma entry {bad:?} on line {}: entries must be alphabetic words",
                    lineno + 1
                );
            }
            match fields.as_slice() {
                [] => {}
                [word] => {
                    table.invariants.insert(word.clone());
                }
                [inflected, lemma] => {
                    table.exceptions.insert(inflected.clone(), lemma.clone());
                }
                _ => anyhow::bail!(
                    "Malformed lemma entry on line {}: expected `inflected lemma` or a single word",
                    lineno + 1
                ),
            }
        }
        Ok(table)
    }

    /// Load a lemma file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lemma file {}", path.display()))?;
        let table = Self::parse(&contents)
            .with_context(|| format!("Failed to parse lemma file {}", path.display()))?;
        info!(
            path = %path.display(),
            exceptions = table.exceptions.len(),
            invariants = table.invariants.len(),
            "Loaded lemma entries from file"
        );
        Ok(table)
    }

    /// Merge another table over this one. Entries from `other` win.
    pub fn extend(&mut self, other: LemmaTable) {
        self.exceptions.extend(other.exceptions);
        self.invariants.extend(other.invariants);
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn invariant_count(&self) -> usize {
        self.invariants.len()
    }
}

/// Part-of-speech agnostic lemmatizer using noun morphology.
#[derive(Debug, Clone)]
pub struct NounLemmatizer {
    table: LemmaTable,
}

impl NounLemmatizer {
    pub fn new(table: LemmaTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LemmaTable {
        &self.table
    }
}

impl Default for NounLemmatizer {
    fn default() -> Self {
        Self::new(LemmaTable::english())
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.table.exceptions.get(word) {
            return lemma.clone();
        }
        if self.table.invariants.contains(word) || word.chars().count() < MIN_INFLECTED_CHARS {
            return word.to_string();
        }
        NOUN_RULES
            .iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_string())
    }
}
