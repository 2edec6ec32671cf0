use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::tables::RuleTables;

/// Converts one hyphen-free YIVO word to raw ycode.
///
/// Three passes over the word:
/// 1. every cluster is replaced by its placeholder, in rule order;
/// 2. every remaining character is mapped through the single-character table;
/// 3. every placeholder is replaced by the cluster's ycode.
///
/// Final forms and the leading glide are left to [`super::YivoConverter`].
#[derive(Clone, Copy)]
pub struct ClusterResolver<'t> {
    tables: &'t RuleTables,
    sink: &'t dyn DiagnosticSink,
}

impl<'t> ClusterResolver<'t> {
    pub fn new(tables: &'t RuleTables, sink: &'t dyn DiagnosticSink) -> Self {
        Self { tables, sink }
    }

    pub fn resolve(&self, word: &str) -> String {
        self.resolve_within(word, word)
    }

    /// Resolve `part` of `word`; diagnostics name the whole word.
    ///
    /// A placeholder already present in the input is reported and kept
    /// verbatim, and the text on either side of it is resolved on its own.
    pub(super) fn resolve_within(&self, part: &str, word: &str) -> String {
        let mut ycode = String::with_capacity(part.len() * 2);
        let mut rest = part;
        let is_placeholder = |&(_, c): &(usize, char)| self.tables.is_placeholder(c);
        while let Some((i, c)) = rest.char_indices().find(is_placeholder) {
            ycode.push_str(&self.resolve_clusters(&rest[..i], word));
            self.report(c, word);
            ycode.push(c);
            rest = &rest[i + c.len_utf8()..];
        }
        ycode.push_str(&self.resolve_clusters(rest, word));
        ycode
    }

    fn resolve_clusters(&self, part: &str, word: &str) -> String {
        let mut buf = [0u8; 4];

        let mut marked = part.to_string();
        for rule in self.tables.cluster_rules() {
            if marked.contains(rule.yivo.as_str()) {
                marked = marked.replace(rule.yivo.as_str(), rule.placeholder.encode_utf8(&mut buf));
            }
        }

        let mut ycode = String::with_capacity(marked.len() * 2);
        for c in marked.chars() {
            if let Some(mapped) = self.tables.yivo_single(c) {
                ycode.push_str(mapped);
                continue;
            }
            if !self.tables.is_placeholder(c) {
                self.report(c, word);
            }
            ycode.push(c);
        }

        for rule in self.tables.cluster_rules() {
            let placeholder = rule.placeholder.encode_utf8(&mut buf);
            if ycode.contains(&*placeholder) {
                ycode = ycode.replace(&*placeholder, &rule.ycode);
            }
        }
        ycode
    }

    fn report(&self, ch: char, word: &str) {
        self.sink.report(&Diagnostic::UnknownCharacter {
            ch,
            word: word.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CollectingSink;

    fn resolve(word: &str) -> (String, Vec<Diagnostic>) {
        let tables = RuleTables::embedded().unwrap();
        let sink = CollectingSink::new();
        let ycode = ClusterResolver::new(&tables, &sink).resolve(word);
        (ycode, sink.take())
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(resolve("vos").0, "wAos");
        assert_eq!(resolve("nadn").0, "nAadn");
    }

    #[test]
    fn test_clusters() {
        assert_eq!(resolve("shoyn").0, "$Wn");
        assert_eq!(resolve("kh").0, "x");
        assert_eq!(resolve("eyn").0, "Yn");
        assert_eq!(resolve("ayz").0, "Yaz");
    }

    #[test]
    fn test_longer_cluster_wins() {
        // tsh must not split into ts + h or t + sh.
        assert_eq!(resolve("kontshn").0, "kAont$n");
        assert_eq!(resolve("dzhez").0, "dz$ez");
    }

    #[test]
    fn test_cluster_output_not_remapped() {
        // "ay" yields "Ya"; the 'a' of the output must not become "Aa".
        assert_eq!(resolve("tay").0, "tYa");
    }

    #[test]
    fn test_no_fixups_applied() {
        let (ycode, diags) = resolve("ingantsn");
        assert_eq!(ycode, "yngAanqn");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_apostrophe_passes() {
        assert_eq!(resolve("s'vet").0, "s'wet");
    }

    #[test]
    fn test_unknown_character_reported() {
        let (ycode, diags) = resolve("kwas");
        assert_eq!(ycode, "kwAas");
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownCharacter {
                ch: 'w',
                word: "kwas".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_word() {
        let (ycode, diags) = resolve("");
        assert_eq!(ycode, "");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_placeholder_in_input_is_reported() {
        let (ycode, diags) = resolve("a\u{E000}");
        assert_eq!(ycode, "Aa\u{E000}");
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownCharacter {
                ch: '\u{E000}',
                word: "a\u{E000}".to_string()
            }]
        );
    }

    #[test]
    fn test_placeholder_splits_clusters() {
        // "s", placeholder, "h" is not the cluster "sh".
        let (ycode, diags) = resolve("s\u{E004}h");
        assert_eq!(ycode, "s\u{E004}h");
        assert_eq!(diags.len(), 1);
        // Clusters on either side still resolve.
        assert_eq!(resolve("kh\u{E001}sh").0, "x\u{E001}$");
    }
}
