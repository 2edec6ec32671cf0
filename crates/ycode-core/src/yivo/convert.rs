use std::borrow::Cow;

use tracing::{debug, debug_span};

use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::settings::YivoSettings;
use crate::tables::RuleTables;

use super::cluster::ClusterResolver;
use super::fixup::{apply_final_form, insert_glide, GLIDE};

/// Token that stands for an exclamation mark in YIVO sources.
pub const EXCLAMATION_MARKER: &str = "%EXCL%";

const DEFAULT_SILENT_CHARS: &[char] = &['~'];

static DEFAULT_SINK: TracingSink = TracingSink;

/// Tokens the phonetic rules get wrong around the apostrophe, with their
/// fixed renderings.
const LEXICAL_EXCEPTIONS: &[(&str, &str)] = &[
    ("s'iz", "s'Ayz"),
    ("s'i'", "s'Ay'"),
    ("i'", "Ay'"),
    (EXCLAMATION_MARKER, "!"),
];

fn is_hyphen_run(token: &str) -> bool {
    (1..=4).contains(&token.len()) && token.bytes().all(|b| b == b'-')
}

fn lexical_exception(token: &str) -> Option<&'static str> {
    LEXICAL_EXCEPTIONS
        .iter()
        .find(|(yivo, _)| *yivo == token)
        .map(|&(_, ycode)| ycode)
}

/// `oys` followed by vowel `i` keeps the `i` in a new syllable, which needs
/// an alef the single-character rules cannot infer. Returns the prefix and
/// the rest of the word so the alef can go between them.
fn split_oys_prefix(word: &str) -> Option<(&str, &str)> {
    ["oys", "oysge"].into_iter().find_map(|prefix| {
        let rest = word.strip_prefix(prefix)?;
        rest.starts_with('i').then(|| (&word[..prefix.len()], rest))
    })
}

/// YIVO romanization → ycode.
///
/// Per token, in order, stopping at the first step that applies:
/// 1. drop silent characters (`~` by default);
/// 2. a run of one to four hyphens is returned unchanged;
/// 3. fixed lexical exceptions (`s'iz`, `s'i'`, `i'`, [`EXCLAMATION_MARKER`]);
/// 4. the whole token in the non-phonetic table;
/// 5. otherwise each hyphen-separated word goes through
///    [`convert_single_word`](Self::convert_single_word) and the results are
///    rejoined with hyphens. Empty words are dropped.
#[derive(Clone)]
pub struct YivoConverter<'t> {
    tables: &'t RuleTables,
    sink: &'t dyn DiagnosticSink,
    use_nonphonetic: bool,
    silent_chars: Vec<char>,
}

impl<'t> YivoConverter<'t> {
    /// A converter with default settings, reporting through `tracing`.
    pub fn new(tables: &'t RuleTables) -> Self {
        Self {
            tables,
            sink: &DEFAULT_SINK,
            use_nonphonetic: true,
            silent_chars: DEFAULT_SILENT_CHARS.to_vec(),
        }
    }

    pub fn with_sink(mut self, sink: &'t dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_settings(mut self, settings: &YivoSettings) -> Self {
        self.use_nonphonetic = settings.use_nonphonetic;
        self.silent_chars = settings.silent_chars().to_vec();
        self
    }

    pub fn use_nonphonetic(mut self, enabled: bool) -> Self {
        self.use_nonphonetic = enabled;
        self
    }

    /// Convert one token using the configured non-phonetic setting.
    pub fn convert(&self, token: &str) -> String {
        self.convert_with(token, self.use_nonphonetic)
    }

    /// Convert one token. With `use_nonphonetic` false the non-phonetic
    /// table is ignored for the whole token and for each of its words.
    pub fn convert_with(&self, token: &str, use_nonphonetic: bool) -> String {
        let _span = debug_span!("yivo_to_ycode", token).entered();

        let token: Cow<'_, str> = if token.contains(self.silent_chars.as_slice()) {
            Cow::Owned(token.chars().filter(|c| !self.silent_chars.contains(c)).collect())
        } else {
            Cow::Borrowed(token)
        };

        if is_hyphen_run(&token) {
            return token.into_owned();
        }
        if let Some(ycode) = lexical_exception(&token) {
            return ycode.to_string();
        }
        if use_nonphonetic {
            if let Some(ycode) = self.tables.nonphonetic(&token) {
                debug!(ycode, "non-phonetic token");
                return ycode.to_string();
            }
        }

        if !token.contains('-') {
            return self.convert_word(&token, use_nonphonetic);
        }
        token
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| self.convert_word(word, use_nonphonetic))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Convert a single hyphen-free word, with final-form and glide fixups.
    pub fn convert_single_word(&self, word: &str) -> String {
        self.convert_word(word, self.use_nonphonetic)
    }

    fn convert_word(&self, word: &str, use_nonphonetic: bool) -> String {
        if use_nonphonetic {
            if let Some(ycode) = self.tables.nonphonetic(word) {
                debug!(word, ycode, "non-phonetic word");
                return ycode.to_string();
            }
        }
        let Some(yivo_first) = word.chars().next() else {
            return String::new();
        };

        let resolver = ClusterResolver::new(self.tables, self.sink);
        let mut ycode = match split_oys_prefix(word) {
            Some((prefix, rest)) => {
                let mut ycode = resolver.resolve_within(prefix, word);
                ycode.push(GLIDE);
                ycode.push_str(&resolver.resolve_within(rest, word));
                ycode
            }
            None => resolver.resolve(word),
        };
        apply_final_form(&mut ycode);
        insert_glide(&mut ycode, yivo_first);
        ycode
    }

    /// Convert running text token by token, keeping the whitespace between
    /// tokens as it was.
    pub fn convert_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut start: Option<usize> = None;
        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    out.push_str(&self.convert(&text[s..i]));
                }
                out.push(c);
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            out.push_str(&self.convert(&text[s..]));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_run() {
        assert!(is_hyphen_run("-"));
        assert!(is_hyphen_run("----"));
        assert!(!is_hyphen_run("-----"));
        assert!(!is_hyphen_run(""));
        assert!(!is_hyphen_run("-a-"));
    }

    #[test]
    fn test_lexical_exception_lookup() {
        assert_eq!(lexical_exception("s'iz"), Some("s'Ayz"));
        assert_eq!(lexical_exception("%EXCL%"), Some("!"));
        assert_eq!(lexical_exception("siz"), None);
    }

    #[test]
    fn test_oys_prefix() {
        assert_eq!(split_oys_prefix("oysisn"), Some(("oys", "isn")));
        assert_eq!(split_oys_prefix("oysgeirt"), Some(("oysge", "irt")));
        assert_eq!(split_oys_prefix("oysgekratst"), None);
        assert_eq!(split_oys_prefix("oys"), None);
        assert_eq!(split_oys_prefix("vos"), None);
    }
}
