//! The closed set of token kinds produced by the lexer.
//!
//! One flat enum covers punctuation, the full X.680 reserved-word list,
//! and the structural kinds whose spelling is carried in `Token::text`.
//! Keywords are unit variants; resolution happens through the
//! length-bucketed table in [`crate::keywords`].

/// Kind of a lexed token.
///
/// Two reserved words collide with structural kinds and carry a
/// `Keyword` suffix: `IDENTIFIER` (the word in `OBJECT IDENTIFIER`) is
/// [`TokenKind::IdentifierKeyword`], and `STRING` (as in `OCTET STRING`)
/// is [`TokenKind::StringKeyword`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ─── Punctuation ────────────────────────────────────────────────────
    /// `::=`
    Assign,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `[[` (version brackets; never produced in `Syntax` context)
    LeftVersionBrackets,
    /// `]]`
    RightVersionBrackets,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    Range,
    /// `...`
    Ellipsis,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `|`
    Pipe,
    /// `!`
    Exclamation,
    /// `^`
    Caret,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `@`
    At,
    /// `'` — only produced as the fallback when a bstring/hstring
    /// literal fails to close properly.
    Apostrophe,
    /// `&` outside of `TypeField`/`ValueField` context.
    Ampersand,
    /// `-`
    Minus,
    /// `=` — only produced in `PropertySettings` context.
    Equals,

    // ─── Structural kinds (spelling in `Token::text`) ───────────────────
    /// Integer literal.
    Number,
    /// Real literal (fraction, exponent, or the leading-zero legacy rule).
    RealNumber,
    /// `'0101'B`
    BString,
    /// `'DEAD'H`
    HString,
    /// `"…"` quoted string; sub-grammar membership in `Token::flags`.
    CString,
    /// Lowercase-initial name.
    Identifier,
    /// Uppercase-initial name.
    TypeReference,
    /// All-uppercase name in `ObjectClass` context.
    ObjectClassReference,
    /// Known encoding name in `Encoding` context.
    EncodingReference,
    /// All-uppercase, digit-free name in `Syntax` context.
    Word,
    /// `&Name` spliced in `TypeField` context.
    TypeFieldReference,
    /// `&name` spliced in `ValueField` context.
    ValueFieldReference,
    /// `PLUS-INFINITY`
    PlusInfinity,
    /// `MINUS-INFINITY`
    MinusInfinity,
    /// `NOT-A-NUMBER`
    NotANumber,

    // ─── Reserved words (X.680 §12.38) ──────────────────────────────────
    Absent,
    AbstractSyntax,
    All,
    Application,
    Automatic,
    Begin,
    Bit,
    BmpString,
    Boolean,
    By,
    Character,
    Choice,
    Class,
    Component,
    Components,
    Constrained,
    Containing,
    Date,
    DateTime,
    Default,
    Definitions,
    Duration,
    Embedded,
    Encoded,
    EncodingControl,
    End,
    Enumerated,
    Except,
    Explicit,
    Exports,
    Extensibility,
    External,
    False,
    From,
    GeneralizedTime,
    GeneralString,
    GraphicString,
    Ia5String,
    IdentifierKeyword,
    Implicit,
    Implied,
    Imports,
    Includes,
    Instance,
    Instructions,
    Integer,
    Intersection,
    Iso646String,
    Max,
    Min,
    Null,
    NumericString,
    Object,
    ObjectDescriptor,
    Octet,
    Of,
    OidIri,
    Optional,
    Pattern,
    Pdv,
    PrintableString,
    Present,
    Private,
    Real,
    RelativeOid,
    RelativeOidIri,
    Sequence,
    Set,
    Settings,
    Size,
    StringKeyword,
    Syntax,
    T61String,
    Tags,
    TeletexString,
    Time,
    TimeOfDay,
    True,
    TypeIdentifier,
    Union,
    Unique,
    Universal,
    UniversalString,
    UtcTime,
    Utf8String,
    VideotexString,
    VisibleString,
    With,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    ///
    /// Punctuation and keywords render as their source spelling;
    /// structural kinds render as their lowercase grammar name.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Assign => "::=",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftVersionBrackets => "[[",
            TokenKind::RightVersionBrackets => "]]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Range => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Pipe => "|",
            TokenKind::Exclamation => "!",
            TokenKind::Caret => "^",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::At => "@",
            TokenKind::Apostrophe => "'",
            TokenKind::Ampersand => "&",
            TokenKind::Minus => "-",
            TokenKind::Equals => "=",
            TokenKind::Number => "number",
            TokenKind::RealNumber => "realnumber",
            TokenKind::BString => "bstring",
            TokenKind::HString => "hstring",
            TokenKind::CString => "cstring",
            TokenKind::Identifier => "identifier",
            TokenKind::TypeReference => "typereference",
            TokenKind::ObjectClassReference => "objectclassreference",
            TokenKind::EncodingReference => "encodingreference",
            TokenKind::Word => "word",
            TokenKind::TypeFieldReference => "typefieldreference",
            TokenKind::ValueFieldReference => "valuefieldreference",
            TokenKind::PlusInfinity => "PLUS-INFINITY",
            TokenKind::MinusInfinity => "MINUS-INFINITY",
            TokenKind::NotANumber => "NOT-A-NUMBER",
            TokenKind::Absent => "ABSENT",
            TokenKind::AbstractSyntax => "ABSTRACT-SYNTAX",
            TokenKind::All => "ALL",
            TokenKind::Application => "APPLICATION",
            TokenKind::Automatic => "AUTOMATIC",
            TokenKind::Begin => "BEGIN",
            TokenKind::Bit => "BIT",
            TokenKind::BmpString => "BMPString",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::By => "BY",
            TokenKind::Character => "CHARACTER",
            TokenKind::Choice => "CHOICE",
            TokenKind::Class => "CLASS",
            TokenKind::Component => "COMPONENT",
            TokenKind::Components => "COMPONENTS",
            TokenKind::Constrained => "CONSTRAINED",
            TokenKind::Containing => "CONTAINING",
            TokenKind::Date => "DATE",
            TokenKind::DateTime => "DATE-TIME",
            TokenKind::Default => "DEFAULT",
            TokenKind::Definitions => "DEFINITIONS",
            TokenKind::Duration => "DURATION",
            TokenKind::Embedded => "EMBEDDED",
            TokenKind::Encoded => "ENCODED",
            TokenKind::EncodingControl => "ENCODING-CONTROL",
            TokenKind::End => "END",
            TokenKind::Enumerated => "ENUMERATED",
            TokenKind::Except => "EXCEPT",
            TokenKind::Explicit => "EXPLICIT",
            TokenKind::Exports => "EXPORTS",
            TokenKind::Extensibility => "EXTENSIBILITY",
            TokenKind::External => "EXTERNAL",
            TokenKind::False => "FALSE",
            TokenKind::From => "FROM",
            TokenKind::GeneralizedTime => "GeneralizedTime",
            TokenKind::GeneralString => "GeneralString",
            TokenKind::GraphicString => "GraphicString",
            TokenKind::Ia5String => "IA5String",
            TokenKind::IdentifierKeyword => "IDENTIFIER",
            TokenKind::Implicit => "IMPLICIT",
            TokenKind::Implied => "IMPLIED",
            TokenKind::Imports => "IMPORTS",
            TokenKind::Includes => "INCLUDES",
            TokenKind::Instance => "INSTANCE",
            TokenKind::Instructions => "INSTRUCTIONS",
            TokenKind::Integer => "INTEGER",
            TokenKind::Intersection => "INTERSECTION",
            TokenKind::Iso646String => "ISO646String",
            TokenKind::Max => "MAX",
            TokenKind::Min => "MIN",
            TokenKind::Null => "NULL",
            TokenKind::NumericString => "NumericString",
            TokenKind::Object => "OBJECT",
            TokenKind::ObjectDescriptor => "ObjectDescriptor",
            TokenKind::Octet => "OCTET",
            TokenKind::Of => "OF",
            TokenKind::OidIri => "OID-IRI",
            TokenKind::Optional => "OPTIONAL",
            TokenKind::Pattern => "PATTERN",
            TokenKind::Pdv => "PDV",
            TokenKind::PrintableString => "PrintableString",
            TokenKind::Present => "PRESENT",
            TokenKind::Private => "PRIVATE",
            TokenKind::Real => "REAL",
            TokenKind::RelativeOid => "RELATIVE-OID",
            TokenKind::RelativeOidIri => "RELATIVE-OID-IRI",
            TokenKind::Sequence => "SEQUENCE",
            TokenKind::Set => "SET",
            TokenKind::Settings => "SETTINGS",
            TokenKind::Size => "SIZE",
            TokenKind::StringKeyword => "STRING",
            TokenKind::Syntax => "SYNTAX",
            TokenKind::T61String => "T61String",
            TokenKind::Tags => "TAGS",
            TokenKind::TeletexString => "TeletexString",
            TokenKind::Time => "TIME",
            TokenKind::TimeOfDay => "TIME-OF-DAY",
            TokenKind::True => "TRUE",
            TokenKind::TypeIdentifier => "TYPE-IDENTIFIER",
            TokenKind::Union => "UNION",
            TokenKind::Unique => "UNIQUE",
            TokenKind::Universal => "UNIVERSAL",
            TokenKind::UniversalString => "UniversalString",
            TokenKind::UtcTime => "UTCTime",
            TokenKind::Utf8String => "UTF8String",
            TokenKind::VideotexString => "VideotexString",
            TokenKind::VisibleString => "VisibleString",
            TokenKind::With => "WITH",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_spelling() {
        assert_eq!(TokenKind::Assign.display_name(), "::=");
        assert_eq!(TokenKind::AbstractSyntax.display_name(), "ABSTRACT-SYNTAX");
        assert_eq!(TokenKind::IdentifierKeyword.display_name(), "IDENTIFIER");
        assert_eq!(TokenKind::Identifier.display_name(), "identifier");
    }

    #[test]
    fn kind_is_small_and_copyable() {
        assert!(std::mem::size_of::<TokenKind>() <= 2);
        let k = TokenKind::Begin;
        let copy = k;
        assert_eq!(k, copy);
    }
}
