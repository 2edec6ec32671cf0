use std::sync::Arc;

use crate::codec::CharacterCodec;
use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::settings::Settings;
use crate::tables::{RuleTables, TableError};
use crate::yivo::YivoConverter;

/// Owns one table set and hands out converters that borrow it.
///
/// Immutable after construction, so a single instance can be shared across
/// threads (e.g. behind an `Arc`).
pub struct Transliterator {
    tables: RuleTables,
    settings: Settings,
    sink: Arc<dyn DiagnosticSink>,
}

impl Transliterator {
    pub fn new(tables: RuleTables) -> Self {
        Self {
            tables,
            settings: Settings::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// A transliterator over the tables compiled into the library.
    pub fn embedded() -> Result<Self, TableError> {
        RuleTables::embedded().map(Self::new)
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn codec(&self) -> CharacterCodec<'_> {
        CharacterCodec::new(&self.tables)
    }

    pub fn yivo(&self) -> YivoConverter<'_> {
        YivoConverter::new(&self.tables)
            .with_settings(&self.settings.yivo)
            .with_sink(self.sink.as_ref())
    }

    pub fn yiddish_to_ycode(&self, text: &str) -> String {
        self.codec().yiddish_to_ycode(text)
    }

    pub fn ycode_to_yiddish(&self, text: &str) -> String {
        self.codec().ycode_to_yiddish(text)
    }

    /// Convert one YIVO token.
    pub fn yivo_to_ycode(&self, token: &str, use_nonphonetic: bool) -> String {
        self.yivo().convert_with(token, use_nonphonetic)
    }

    /// Convert whitespace-separated YIVO text with the configured settings.
    pub fn yivo_text_to_ycode(&self, text: &str) -> String {
        self.yivo().convert_text(text)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::diagnostic::CollectingSink;
    use crate::settings::parse_settings_toml;

    #[test]
    fn test_facade_conversions() {
        let t = Transliterator::embedded().unwrap();
        assert_eq!(t.yivo_to_ycode("vos", true), "wAos");
        assert_eq!(t.ycode_to_yiddish("wAos"), "\u{05F0}\u{05D0}\u{05B8}\u{05E1}");
        assert_eq!(t.yiddish_to_ycode("\u{05F0}\u{05D0}\u{05B8}\u{05E1}"), "wAos");
        assert_eq!(t.yivo_text_to_ycode("s'iz shabes"), "s'Ayz $bS");
    }

    #[test]
    fn test_yivo_to_yiddish_via_ycode() {
        let t = Transliterator::embedded().unwrap();
        let ycode = t.yivo_to_ycode("shabes", true);
        assert_eq!(t.ycode_to_yiddish(&ycode), "\u{05E9}\u{05D1}\u{05EA}");
    }

    #[test]
    fn test_settings_flow_into_yivo() {
        let settings = parse_settings_toml(
            r#"
[yivo]
use_nonphonetic = false
silent_chars = []
"#,
        )
        .unwrap();
        let t = Transliterator::embedded().unwrap().with_settings(settings);
        assert!(!t.settings().yivo.use_nonphonetic);
        assert_eq!(t.yivo_text_to_ycode("shabes"), "$Aabes");
        // The explicit argument wins over settings.
        assert_eq!(t.yivo_to_ycode("shabes", true), "$bS");
    }

    #[test]
    fn test_injected_sink_receives_diagnostics() {
        let sink = Arc::new(CollectingSink::new());
        let t = Transliterator::embedded()
            .unwrap()
            .with_sink(sink.clone());
        assert_eq!(t.yivo_to_ycode("kwas", true), "kwAas");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let t = Arc::new(Transliterator::embedded().unwrap());
        thread::scope(|s| {
            for _ in 0..4 {
                let t = Arc::clone(&t);
                s.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(t.yivo_to_ycode("ingantsn", true), "AyngAanqN");
                        let ycode = t.yiddish_to_ycode("\u{05E4}\u{05BC}");
                        assert_eq!(ycode, "p");
                    }
                });
            }
        });
    }
}
