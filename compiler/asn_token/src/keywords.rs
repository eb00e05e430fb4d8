//! Reserved-word and encoding-reference resolution.
//!
//! The keyword table is read-only shared data, implemented as a static
//! length-bucketed `match`: the word's length is a first-pass filter
//! (keywords range from 2 to 16 characters), then the word is compared
//! against the keywords of that length only.
//!
//! The three special value spellings `PLUS-INFINITY`, `MINUS-INFINITY`
//! and `NOT-A-NUMBER` live in the same table and resolve to their
//! dedicated literal kinds regardless of lexical context.

use crate::TokenKind;

/// Look up a reserved word by its exact spelling.
///
/// Returns `None` for ordinary identifiers and type references.
pub fn keyword_lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=16).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "BY" => Some(TokenKind::By),
            "OF" => Some(TokenKind::Of),
            _ => None,
        },
        3 => match text {
            "ALL" => Some(TokenKind::All),
            "BIT" => Some(TokenKind::Bit),
            "END" => Some(TokenKind::End),
            "MAX" => Some(TokenKind::Max),
            "MIN" => Some(TokenKind::Min),
            "PDV" => Some(TokenKind::Pdv),
            "SET" => Some(TokenKind::Set),
            _ => None,
        },
        4 => match text {
            "DATE" => Some(TokenKind::Date),
            "FROM" => Some(TokenKind::From),
            "NULL" => Some(TokenKind::Null),
            "REAL" => Some(TokenKind::Real),
            "SIZE" => Some(TokenKind::Size),
            "TAGS" => Some(TokenKind::Tags),
            "TIME" => Some(TokenKind::Time),
            "TRUE" => Some(TokenKind::True),
            "WITH" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "BEGIN" => Some(TokenKind::Begin),
            "CLASS" => Some(TokenKind::Class),
            "FALSE" => Some(TokenKind::False),
            "OCTET" => Some(TokenKind::Octet),
            "UNION" => Some(TokenKind::Union),
            _ => None,
        },
        6 => match text {
            "ABSENT" => Some(TokenKind::Absent),
            "CHOICE" => Some(TokenKind::Choice),
            "EXCEPT" => Some(TokenKind::Except),
            "OBJECT" => Some(TokenKind::Object),
            "STRING" => Some(TokenKind::StringKeyword),
            "SYNTAX" => Some(TokenKind::Syntax),
            "UNIQUE" => Some(TokenKind::Unique),
            _ => None,
        },
        7 => match text {
            "BOOLEAN" => Some(TokenKind::Boolean),
            "DEFAULT" => Some(TokenKind::Default),
            "ENCODED" => Some(TokenKind::Encoded),
            "EXPORTS" => Some(TokenKind::Exports),
            "IMPLIED" => Some(TokenKind::Implied),
            "IMPORTS" => Some(TokenKind::Imports),
            "INTEGER" => Some(TokenKind::Integer),
            "OID-IRI" => Some(TokenKind::OidIri),
            "PATTERN" => Some(TokenKind::Pattern),
            "PRESENT" => Some(TokenKind::Present),
            "PRIVATE" => Some(TokenKind::Private),
            "UTCTime" => Some(TokenKind::UtcTime),
            _ => None,
        },
        8 => match text {
            "DURATION" => Some(TokenKind::Duration),
            "EMBEDDED" => Some(TokenKind::Embedded),
            "EXPLICIT" => Some(TokenKind::Explicit),
            "EXTERNAL" => Some(TokenKind::External),
            "IMPLICIT" => Some(TokenKind::Implicit),
            "INCLUDES" => Some(TokenKind::Includes),
            "INSTANCE" => Some(TokenKind::Instance),
            "OPTIONAL" => Some(TokenKind::Optional),
            "SEQUENCE" => Some(TokenKind::Sequence),
            "SETTINGS" => Some(TokenKind::Settings),
            _ => None,
        },
        9 => match text {
            "AUTOMATIC" => Some(TokenKind::Automatic),
            "BMPString" => Some(TokenKind::BmpString),
            "CHARACTER" => Some(TokenKind::Character),
            "COMPONENT" => Some(TokenKind::Component),
            "DATE-TIME" => Some(TokenKind::DateTime),
            "IA5String" => Some(TokenKind::Ia5String),
            "T61String" => Some(TokenKind::T61String),
            "UNIVERSAL" => Some(TokenKind::Universal),
            _ => None,
        },
        10 => match text {
            "COMPONENTS" => Some(TokenKind::Components),
            "CONTAINING" => Some(TokenKind::Containing),
            "ENUMERATED" => Some(TokenKind::Enumerated),
            "IDENTIFIER" => Some(TokenKind::IdentifierKeyword),
            "UTF8String" => Some(TokenKind::Utf8String),
            _ => None,
        },
        11 => match text {
            "APPLICATION" => Some(TokenKind::Application),
            "CONSTRAINED" => Some(TokenKind::Constrained),
            "DEFINITIONS" => Some(TokenKind::Definitions),
            "TIME-OF-DAY" => Some(TokenKind::TimeOfDay),
            _ => None,
        },
        12 => match text {
            "INSTRUCTIONS" => Some(TokenKind::Instructions),
            "INTERSECTION" => Some(TokenKind::Intersection),
            "ISO646String" => Some(TokenKind::Iso646String),
            "NOT-A-NUMBER" => Some(TokenKind::NotANumber),
            "RELATIVE-OID" => Some(TokenKind::RelativeOid),
            _ => None,
        },
        13 => match text {
            "EXTENSIBILITY" => Some(TokenKind::Extensibility),
            "GeneralString" => Some(TokenKind::GeneralString),
            "GraphicString" => Some(TokenKind::GraphicString),
            "NumericString" => Some(TokenKind::NumericString),
            "PLUS-INFINITY" => Some(TokenKind::PlusInfinity),
            "TeletexString" => Some(TokenKind::TeletexString),
            "VisibleString" => Some(TokenKind::VisibleString),
            _ => None,
        },
        14 => match text {
            "MINUS-INFINITY" => Some(TokenKind::MinusInfinity),
            "VideotexString" => Some(TokenKind::VideotexString),
            _ => None,
        },
        15 => match text {
            "ABSTRACT-SYNTAX" => Some(TokenKind::AbstractSyntax),
            "GeneralizedTime" => Some(TokenKind::GeneralizedTime),
            "PrintableString" => Some(TokenKind::PrintableString),
            "TYPE-IDENTIFIER" => Some(TokenKind::TypeIdentifier),
            "UniversalString" => Some(TokenKind::UniversalString),
            _ => None,
        },
        16 => match text {
            "ENCODING-CONTROL" => Some(TokenKind::EncodingControl),
            "ObjectDescriptor" => Some(TokenKind::ObjectDescriptor),
            "RELATIVE-OID-IRI" => Some(TokenKind::RelativeOidIri),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `text` names a known encoding reference.
///
/// Only consulted in `Encoding` context, where any other uppercase word
/// is rejected outright.
pub fn is_encoding_reference(text: &str) -> bool {
    matches!(
        text,
        "BER" | "CER" | "DER" | "PER" | "UPER" | "CPER" | "CUPER" | "OER" | "COER" | "XER"
            | "CXER" | "EXER" | "GSER"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_keywords_of_every_bucket() {
        assert_eq!(keyword_lookup("OF"), Some(TokenKind::Of));
        assert_eq!(keyword_lookup("END"), Some(TokenKind::End));
        assert_eq!(keyword_lookup("TRUE"), Some(TokenKind::True));
        assert_eq!(keyword_lookup("BEGIN"), Some(TokenKind::Begin));
        assert_eq!(keyword_lookup("STRING"), Some(TokenKind::StringKeyword));
        assert_eq!(keyword_lookup("OID-IRI"), Some(TokenKind::OidIri));
        assert_eq!(keyword_lookup("SEQUENCE"), Some(TokenKind::Sequence));
        assert_eq!(keyword_lookup("IA5String"), Some(TokenKind::Ia5String));
        assert_eq!(
            keyword_lookup("IDENTIFIER"),
            Some(TokenKind::IdentifierKeyword)
        );
        assert_eq!(keyword_lookup("DEFINITIONS"), Some(TokenKind::Definitions));
        assert_eq!(
            keyword_lookup("RELATIVE-OID"),
            Some(TokenKind::RelativeOid)
        );
        assert_eq!(
            keyword_lookup("EXTENSIBILITY"),
            Some(TokenKind::Extensibility)
        );
        assert_eq!(
            keyword_lookup("VideotexString"),
            Some(TokenKind::VideotexString)
        );
        assert_eq!(
            keyword_lookup("ABSTRACT-SYNTAX"),
            Some(TokenKind::AbstractSyntax)
        );
        assert_eq!(
            keyword_lookup("ENCODING-CONTROL"),
            Some(TokenKind::EncodingControl)
        );
    }

    #[test]
    fn special_value_spellings_resolve_to_literal_kinds() {
        assert_eq!(keyword_lookup("PLUS-INFINITY"), Some(TokenKind::PlusInfinity));
        assert_eq!(
            keyword_lookup("MINUS-INFINITY"),
            Some(TokenKind::MinusInfinity)
        );
        assert_eq!(keyword_lookup("NOT-A-NUMBER"), Some(TokenKind::NotANumber));
    }

    #[test]
    fn rejects_non_keywords() {
        assert_eq!(keyword_lookup("MyModule"), None);
        assert_eq!(keyword_lookup("sequence"), None);
        assert_eq!(keyword_lookup("X"), None);
        assert_eq!(keyword_lookup(""), None);
    }

    #[test]
    fn encoding_references() {
        assert!(is_encoding_reference("BER"));
        assert!(is_encoding_reference("UPER"));
        assert!(is_encoding_reference("GSER"));
        assert!(!is_encoding_reference("TAGS"));
        assert!(!is_encoding_reference("ber"));
    }
}
