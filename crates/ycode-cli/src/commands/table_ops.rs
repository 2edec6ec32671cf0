use std::fs;
use std::path::Path;
use std::process;

use ycode_core::{RuleTables, Transliterator};

use super::convert_ops::{open_transliterator, Resources};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn validate(dir: &str) {
    let tables = die!(RuleTables::from_dir(Path::new(dir)), "Error: {}");
    let s = tables.stats();
    println!(
        "OK: {} code pairs, {} combinations, {} YIVO letters, {} clusters, {} non-phonetic words",
        s.code_pairs, s.combinations, s.yivo_singles, s.clusters, s.nonphonetic
    );
}

/// A line whose Yiddish → ycode → Yiddish round trip changed it.
#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub line: usize,
    pub original: String,
    pub ycode: String,
    pub restored: String,
}

pub fn roundtrip_mismatches(t: &Transliterator, text: &str) -> Vec<Mismatch> {
    text.lines()
        .enumerate()
        .filter_map(|(i, original)| {
            let ycode = t.yiddish_to_ycode(original);
            let restored = t.ycode_to_yiddish(&ycode);
            (restored != original).then(|| Mismatch {
                line: i + 1,
                original: original.to_string(),
                ycode,
                restored,
            })
        })
        .collect()
}

pub fn check_roundtrip(file: &str, tables: Option<&str>) {
    let text = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let t = open_transliterator(Resources {
        tables,
        settings: None,
    });

    let mismatches = roundtrip_mismatches(&t, &text);
    for m in &mismatches {
        println!("{file}:{}: {}", m.line, m.original);
        println!("  ycode:    {}", m.ycode);
        println!("  restored: {}", m.restored);
    }

    let total = text.lines().count();
    if mismatches.is_empty() {
        println!("OK: {total} lines round-trip");
    } else {
        eprintln!("{} of {total} lines did not round-trip", mismatches.len());
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_clean_text() {
        let t = Transliterator::embedded().unwrap();
        // "vos iz" and a word with pey dagesh, in pointed Yiddish
        let text = "\u{05F0}\u{05D0}\u{05B8}\u{05E1} \u{05D0}\u{05D9}\u{05D6}\n\
                    \u{05E4}\u{05BC}\u{05E8}\u{05D0}\u{05B8}\u{05D1}\u{05E2}\n";
        assert!(roundtrip_mismatches(&t, text).is_empty());
    }

    #[test]
    fn test_roundtrip_reports_line() {
        let t = Transliterator::embedded().unwrap();
        // A literal '~' passes through forward but reads back as bet with rafe.
        let text = "\u{05D0}\n~\n";
        let mismatches = roundtrip_mismatches(&t, text);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].line, 2);
        assert_eq!(mismatches[0].ycode, "~");
        assert_eq!(mismatches[0].restored, "\u{05D1}\u{05BF}");
    }
}
