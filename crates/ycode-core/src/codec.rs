//! Reversible Yiddish ↔ ycode conversion.
//!
//! Yiddish → ycode maps each code point through the code-pair table, then
//! contracts combinations in list order. ycode → Yiddish expands
//! combinations in the same list order, then maps back.

use crate::tables::RuleTables;

/// Converts between Yiddish script and ycode. Cheap to construct; borrows
/// the tables.
#[derive(Clone, Copy)]
pub struct CharacterCodec<'t> {
    tables: &'t RuleTables,
}

impl<'t> CharacterCodec<'t> {
    pub fn new(tables: &'t RuleTables) -> Self {
        Self { tables }
    }

    /// Convert Yiddish text (canonically composed) to ycode.
    ///
    /// Characters with no code pair pass through unchanged.
    pub fn yiddish_to_ycode(&self, text: &str) -> String {
        let mut ycode: String = text
            .chars()
            .map(|c| self.tables.ycode_for(c).unwrap_or(c))
            .collect();
        for rule in self.tables.combinations() {
            if ycode.contains(rule.composed) {
                ycode = ycode.replace(rule.composed, rule.contracted);
            }
        }
        ycode
    }

    /// Convert ycode back to Yiddish text.
    pub fn ycode_to_yiddish(&self, text: &str) -> String {
        let mut ycode = text.to_string();
        for rule in self.tables.combinations() {
            if ycode.contains(rule.contracted) {
                ycode = ycode.replace(rule.contracted, rule.composed);
            }
        }
        ycode
            .chars()
            .map(|c| self.tables.yiddish_for(c).unwrap_or(c))
            .collect()
    }
}
