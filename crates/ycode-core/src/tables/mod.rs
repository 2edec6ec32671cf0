//! Rule tables for ycode conversion.
//!
//! `RuleTables` holds the Yiddish ↔ ycode code-pair bijection, the ordered
//! combination rules, and the YIVO single-character, cluster, and
//! non-phonetic word tables. Tables are built once from tab-separated text
//! and are read-only afterwards.

mod combination;
mod parse;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, debug_span};

use parse::YivoRow;

pub use combination::{CombinationRule, COMBINATIONS};

pub const YCODE_ASCII_TABLE: &str = "ycode-table-ascii.txt";
pub const YCODE_TABLE: &str = "ycode-table.txt";
pub const YIVO_TABLE: &str = "yivo-ycode.txt";
pub const NONPHONETIC_TABLE: &str = "nonphonetic_yivo2ycode.txt";

const EMBEDDED_YCODE_ASCII: &str = include_str!("data/ycode-table-ascii.txt");
const EMBEDDED_YCODE: &str = include_str!("data/ycode-table.txt");
const EMBEDDED_YIVO: &str = include_str!("data/yivo-ycode.txt");
const EMBEDDED_NONPHONETIC: &str = include_str!("data/nonphonetic_yivo2ycode.txt");

/// Errors raised while building [`RuleTables`]. Any error aborts construction.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{table}:{line}: expected {expected} columns, found {found}")]
    ColumnCount {
        table: &'static str,
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("{table}:{line}: ycode field {field:?} must be exactly one character")]
    YcodeWidth {
        table: &'static str,
        line: usize,
        field: String,
    },

    #[error("{table}:{line}: invalid code point {field:?}")]
    CodePoint {
        table: &'static str,
        line: usize,
        field: String,
    },

    #[error("{table}:{line}: {reason}")]
    InvalidField {
        table: &'static str,
        line: usize,
        reason: String,
    },

    #[error("{table}:{line}: ycode character {ycode:?} is already mapped")]
    DuplicateYcode {
        table: &'static str,
        line: usize,
        ycode: char,
    },

    #[error("{table}:{line}: code point U+{code:04X} is already mapped")]
    DuplicateCodePoint {
        table: &'static str,
        line: usize,
        code: u32,
    },

    #[error("{table}:{line}: placeholder U+{code:04X} collides with {other}")]
    PlaceholderCollision {
        table: &'static str,
        line: usize,
        code: u32,
        other: String,
    },
}

/// One Yiddish code point and its ycode character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePair {
    pub ycode: char,
    pub yiddish: char,
}

/// A YIVO cluster that must be translated as a unit.
///
/// `placeholder` stands in for the cluster between the cluster and
/// single-character passes and never occurs in YIVO or ycode text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRule {
    pub yivo: String,
    pub placeholder: char,
    pub ycode: String,
}

/// Text of the four table resources.
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    /// ASCII characters that stand for themselves.
    pub ycode_ascii: &'a str,
    /// Yiddish letters and points.
    pub ycode: &'a str,
    /// YIVO single-character and cluster rules.
    pub yivo: &'a str,
    /// Whole-word overrides for non-phonetic words.
    pub nonphonetic: &'a str,
}

impl TableSources<'static> {
    /// The tables compiled into the library.
    pub fn embedded() -> Self {
        Self {
            ycode_ascii: EMBEDDED_YCODE_ASCII,
            ycode: EMBEDDED_YCODE,
            yivo: EMBEDDED_YIVO,
            nonphonetic: EMBEDDED_NONPHONETIC,
        }
    }
}

/// Entry counts, for diagnostics and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub code_pairs: usize,
    pub combinations: usize,
    pub yivo_singles: usize,
    pub clusters: usize,
    pub nonphonetic: usize,
}

pub struct RuleTables {
    to_ycode: HashMap<char, char>,
    to_yiddish: HashMap<char, char>,
    combinations: Vec<CombinationRule>,
    yivo_singles: HashMap<char, String>,
    clusters: Vec<ClusterRule>,
    placeholders: HashSet<char>,
    nonphonetic: HashMap<String, String>,
}

impl RuleTables {
    /// Build tables from the copies compiled into the library.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_sources(TableSources::embedded())
    }

    /// Read the four table files by name from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, TableError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| TableError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let ycode_ascii = read(YCODE_ASCII_TABLE)?;
        let ycode = read(YCODE_TABLE)?;
        let yivo = read(YIVO_TABLE)?;
        let nonphonetic = read(NONPHONETIC_TABLE)?;
        Self::from_sources(TableSources {
            ycode_ascii: &ycode_ascii,
            ycode: &ycode,
            yivo: &yivo,
            nonphonetic: &nonphonetic,
        })
    }

    pub fn from_sources(sources: TableSources<'_>) -> Result<Self, TableError> {
        let _span = debug_span!("build_tables").entered();

        let mut to_ycode = HashMap::new();
        let mut to_yiddish = HashMap::new();
        for (table, text) in [
            (YCODE_ASCII_TABLE, sources.ycode_ascii),
            (YCODE_TABLE, sources.ycode),
        ] {
            for (line, pair) in parse::parse_code_pairs(table, text)? {
                if to_yiddish.insert(pair.ycode, pair.yiddish).is_some() {
                    return Err(TableError::DuplicateYcode {
                        table,
                        line,
                        ycode: pair.ycode,
                    });
                }
                if to_ycode.insert(pair.yiddish, pair.ycode).is_some() {
                    return Err(TableError::DuplicateCodePoint {
                        table,
                        line,
                        code: pair.yiddish as u32,
                    });
                }
            }
        }

        let mut yivo_singles = HashMap::new();
        let mut clusters = Vec::new();
        let mut cluster_lines = Vec::new();
        for (line, row) in parse::parse_yivo_rows(YIVO_TABLE, sources.yivo)? {
            match row {
                YivoRow::Single { yivo, ycode } => {
                    if yivo_singles.insert(yivo, ycode).is_some() {
                        return Err(TableError::InvalidField {
                            table: YIVO_TABLE,
                            line,
                            reason: format!("YIVO character {yivo:?} is already mapped"),
                        });
                    }
                }
                YivoRow::Cluster(rule) => {
                    clusters.push(rule);
                    cluster_lines.push(line);
                }
            }
        }
        let placeholders =
            check_placeholders(&clusters, &cluster_lines, &yivo_singles, &to_yiddish)?;

        let mut nonphonetic = HashMap::new();
        let rows = parse::parse_nonphonetic(NONPHONETIC_TABLE, sources.nonphonetic)?;
        for (line, yivo, ycode) in rows {
            if let Some(previous) = nonphonetic.insert(yivo, ycode) {
                debug!(line, previous = %previous, "non-phonetic entry replaced");
            }
        }

        let tables = Self {
            to_ycode,
            to_yiddish,
            combinations: COMBINATIONS.to_vec(),
            yivo_singles,
            clusters,
            placeholders,
            nonphonetic,
        };
        let stats = tables.stats();
        debug!(
            code_pairs = stats.code_pairs,
            yivo_singles = stats.yivo_singles,
            clusters = stats.clusters,
            nonphonetic = stats.nonphonetic,
            "rule tables built"
        );
        Ok(tables)
    }

    /// ycode character for a Yiddish code point.
    pub fn ycode_for(&self, yiddish: char) -> Option<char> {
        self.to_ycode.get(&yiddish).copied()
    }

    /// Yiddish code point for a ycode character.
    pub fn yiddish_for(&self, ycode: char) -> Option<char> {
        self.to_yiddish.get(&ycode).copied()
    }

    /// All code pairs, in no particular order.
    pub fn code_pairs(&self) -> impl Iterator<Item = CodePair> + '_ {
        self.to_ycode.iter().map(|(&yiddish, &ycode)| CodePair { ycode, yiddish })
    }

    pub fn combinations(&self) -> &[CombinationRule] {
        &self.combinations
    }

    /// ycode for a YIVO character not covered by a cluster rule.
    pub fn yivo_single(&self, yivo: char) -> Option<&str> {
        self.yivo_singles.get(&yivo).map(String::as_str)
    }

    /// Cluster rules, in substitution order.
    pub fn cluster_rules(&self) -> &[ClusterRule] {
        &self.clusters
    }

    pub fn is_placeholder(&self, c: char) -> bool {
        self.placeholders.contains(&c)
    }

    /// Stored ycode rendering of a non-phonetic YIVO word.
    pub fn nonphonetic(&self, yivo: &str) -> Option<&str> {
        self.nonphonetic.get(yivo).map(String::as_str)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            code_pairs: self.to_ycode.len(),
            combinations: self.combinations.len(),
            yivo_singles: self.yivo_singles.len(),
            clusters: self.clusters.len(),
            nonphonetic: self.nonphonetic.len(),
        }
    }
}

/// Placeholders must be pairwise distinct and must not occur in any text the
/// YIVO pipeline reads or writes.
fn check_placeholders(
    clusters: &[ClusterRule],
    lines: &[usize],
    singles: &HashMap<char, String>,
    ycode_chars: &HashMap<char, char>,
) -> Result<HashSet<char>, TableError> {
    let mut occupied: HashMap<char, String> = HashMap::new();
    for (&yivo, ycode) in singles {
        occupied.insert(yivo, format!("YIVO character {yivo:?}"));
        for c in ycode.chars() {
            occupied.entry(c).or_insert_with(|| format!("ycode for {yivo:?}"));
        }
    }
    for rule in clusters {
        for c in rule.yivo.chars() {
            occupied.entry(c).or_insert_with(|| format!("cluster {:?}", rule.yivo));
        }
        for c in rule.ycode.chars() {
            occupied.entry(c).or_insert_with(|| format!("ycode for cluster {:?}", rule.yivo));
        }
    }
    for &c in ycode_chars.keys() {
        occupied.entry(c).or_insert_with(|| format!("ycode character {c:?}"));
    }

    let mut placeholders = HashSet::new();
    for (rule, &line) in clusters.iter().zip(lines) {
        let collision = |other: String| TableError::PlaceholderCollision {
            table: YIVO_TABLE,
            line,
            code: rule.placeholder as u32,
            other,
        };
        if let Some(other) = occupied.get(&rule.placeholder) {
            return Err(collision(other.clone()));
        }
        if !placeholders.insert(rule.placeholder) {
            return Err(collision("an earlier placeholder".to_string()));
        }
    }
    Ok(placeholders)
}
