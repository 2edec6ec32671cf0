/// A base letter plus diacritics and its contracted ycode form.
///
/// Forward conversion (Yiddish → ycode) replaces `composed` with
/// `contracted`; reverse conversion replaces `contracted` with `composed`.
/// Both directions walk [`COMBINATIONS`] in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationRule {
    pub composed: &'static str,
    pub contracted: &'static str,
}

const fn rule(composed: &'static str, contracted: &'static str) -> CombinationRule {
    CombinationRule {
        composed,
        contracted,
    }
}

/// Ordered combination rules over ycode characters.
///
/// `@` is dagesh, `^` rafe, `#` sin dot, `a`/`o` patah/qamats.
pub const COMBINATIONS: &[CombinationRule] = &[
    // Canonical ordering puts patah/qamats before dagesh, so beys + vowel +
    // dagesh must be contracted before the plain beys + dagesh rule. The
    // reverse direction then expands `Ba` before `B`.
    rule("ba@", "Ba"),
    rule("bo@", "Bo"),
    // dagesh
    rule("b@", "B"),
    rule("v@", "U"),
    rule("&@", "p"),
    rule("x@", "K"),
    rule("S@", "T"),
    rule("V@", "Z"),
    // rafe
    rule("b^", "~"),
    rule("&^", "f"),
    rule("x^", "R"),
    // sin dot
    rule("$#", "C"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracted_forms_are_ascii() {
        for rule in COMBINATIONS {
            assert!(rule.contracted.is_ascii(), "{rule:?}");
            assert!(rule.composed.chars().count() > 1, "{rule:?}");
        }
    }

    #[test]
    fn vowel_rules_precede_plain_dagesh() {
        let pos = |composed: &str| COMBINATIONS.iter().position(|r| r.composed == composed);
        assert!(pos("ba@") < pos("b@"));
        assert!(pos("bo@") < pos("b@"));
    }

    #[test]
    fn dagesh_rules_precede_rafe() {
        let pos = |composed: &str| COMBINATIONS.iter().position(|r| r.composed == composed);
        assert_eq!(COMBINATIONS.len(), 12);
        assert_eq!(pos("V@"), Some(7));
        assert!(pos("V@") < pos("b^"));
    }

    #[test]
    fn contracted_forms_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for rule in COMBINATIONS {
            assert!(seen.insert(rule.contracted), "duplicate {:?}", rule.contracted);
        }
    }
}
