//! Character-to-token lexer for ASN.1 (X.680-series) module text.
//!
//! The lexer produces one token at a time, on demand, under a caller
//! supplied [`LexContext`](asn_token::LexContext). Context changes how
//! raw characters are classified, so a pushed-back token whose recorded
//! context differs from the newly requested one is discarded and the
//! character stream is re-tokenized from that token's start offset.
//!
//! The [`iri`] module holds the nested mini-lexer for the body of
//! OID-IRI / Relative-OID-IRI string values.

mod error;
pub mod iri;
mod lexer;
mod source_stream;

pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use source_stream::SourceStream;
