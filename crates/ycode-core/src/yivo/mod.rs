//! YIVO romanization → ycode conversion.
//!
//! YIVO is phonetic and does not mark which Yiddish letters a sound is
//! spelled with. The converter resolves multi-letter clusters before single
//! letters, looks up words of Hebrew/Aramaic origin in the non-phonetic
//! table, and applies final-form and shtumer-alef fixups per word.

mod cluster;
mod convert;
pub mod fixup;

pub use cluster::ClusterResolver;
pub use convert::{YivoConverter, EXCLAMATION_MARKER};
