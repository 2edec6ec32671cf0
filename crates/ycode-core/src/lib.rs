//! Yiddish transliteration engine.
//!
//! Converts between Yiddish script, ycode (a one-to-one ASCII encoding of
//! the Yiddish alphabet and its pointed letters), and YIVO romanization
//! (one way, YIVO → ycode).
//!
//! ```no_run
//! use ycode_core::Transliterator;
//!
//! let t = Transliterator::embedded().expect("embedded tables are valid");
//! let ycode = t.yivo_to_ycode("shoyn", true);
//! let yiddish = t.ycode_to_yiddish(&ycode);
//! ```

pub mod codec;
pub mod diagnostic;
pub mod settings;
pub mod tables;
mod transliterator;
pub mod yivo;

pub use codec::CharacterCodec;
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use settings::{parse_settings_toml, Settings, SettingsError, YivoSettings};
pub use tables::{RuleTables, TableError, TableSources};
pub use transliterator::Transliterator;
pub use yivo::{ClusterResolver, YivoConverter};
