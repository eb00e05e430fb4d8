//! Shared syntax data types for the ASN.1 compiler front-end.
//!
//! This crate is standalone (no internal dependencies) so that external
//! tools can consume tokens without pulling in the lexer or parser.

mod context;
mod flags;
mod keywords;
mod kind;
mod position;
mod token;

pub use context::LexContext;
pub use flags::StringFlags;
pub use keywords::{is_encoding_reference, keyword_lookup};
pub use kind::TokenKind;
pub use position::Position;
pub use token::Token;
