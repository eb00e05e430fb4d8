//! Lexical contexts.
//!
//! The context is explicit input to every lex request; it is never global
//! state. The parser engine keeps a stack of contexts which grammar rules
//! push and pop around sub-rules that need different tokenization.

/// Context governing how the lexer classifies ambiguous input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexContext {
    /// Ordinary module-body tokenization.
    #[default]
    Normal,
    /// An encoding reference is expected: an uppercase word must be a
    /// known encoding name or the match is rejected outright.
    Encoding,
    /// An object class reference is expected: an all-uppercase word
    /// becomes `ObjectClassReference`.
    ObjectClass,
    /// Inside a `WITH SYNTAX` literal specification: all-uppercase,
    /// digit-free words become `Word`, and `[`/`]` never pair into
    /// version brackets.
    Syntax,
    /// A `&Type` field reference is expected: `&` splices the following
    /// typereference into one `TypeFieldReference` token.
    TypeField,
    /// A `&value` field reference is expected: `&` splices the following
    /// identifier into one `ValueFieldReference` token.
    ValueField,
    /// A whole-number level/version is the only legal reading: digit
    /// runs lex as `Number` with no REAL promotion.
    Level,
    /// Inside a property-settings value: `=` lexes as its own token.
    PropertySettings,
}
