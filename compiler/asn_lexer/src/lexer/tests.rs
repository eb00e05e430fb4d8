use pretty_assertions::assert_eq;
use proptest::prelude::*;

use asn_token::{LexContext, StringFlags, Token, TokenKind};

use crate::error::LexErrorKind;
use crate::lexer::Lexer;

fn lex_all(source: &str, context: LexContext) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(t) = lexer.next_token(context).unwrap() {
        tokens.push(t);
    }
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source, LexContext::Normal)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn one(source: &str, context: LexContext) -> Token {
    Lexer::new(source)
        .next_token(context)
        .unwrap()
        .expect("expected a token")
}

fn err(source: &str, context: LexContext) -> LexErrorKind {
    Lexer::new(source)
        .next_token(context)
        .expect_err("expected a lexical error")
        .kind
}

// === Trivia ===

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds("  \t\r\n  BEGIN  "), vec![TokenKind::Begin]);
}

#[test]
fn line_comment_closes_on_double_hyphen() {
    let tokens = lex_all("a -- comment -- b", LexContext::Normal);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text_str(), "a");
    assert_eq!(tokens[1].text_str(), "b");
}

#[test]
fn line_comment_closes_on_newline() {
    assert_eq!(
        kinds("a -- open until here\nb"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn line_comment_runs_to_end_of_input() {
    assert_eq!(kinds("A-- trailing"), vec![TokenKind::TypeReference]);
}

#[test]
fn block_comments_nest() {
    assert_eq!(
        kinds("/* a /* nested */ still comment */ END"),
        vec![TokenKind::End]
    );
}

#[test]
fn unterminated_block_comment_is_an_error() {
    let e = Lexer::new("  /* never closed")
        .next_token(LexContext::Normal)
        .unwrap_err();
    assert_eq!(e.kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!((e.line, e.column), (1, 3));
}

// === Words ===

#[test]
fn case_of_first_letter_classifies_names() {
    assert_eq!(one("fieldName", LexContext::Normal).kind, TokenKind::Identifier);
    assert_eq!(one("TypeName", LexContext::Normal).kind, TokenKind::TypeReference);
}

#[test]
fn hyphenated_names_keep_their_spelling() {
    let t = one("value-ref-2", LexContext::Normal);
    assert_eq!(t.kind, TokenKind::Identifier);
    assert_eq!(t.text_str(), "value-ref-2");
}

#[test]
fn trailing_hyphen_is_a_recoverable_error() {
    assert_eq!(err("bad-", LexContext::Normal), LexErrorKind::TrailingHyphen);
    assert_eq!(err("bad- x", LexContext::Normal), LexErrorKind::TrailingHyphen);
}

#[test]
fn double_hyphen_terminates_the_word() {
    // `a--b` is the identifier `a` followed by a comment.
    assert_eq!(kinds("a--b"), vec![TokenKind::Identifier]);
}

#[test]
fn keywords_resolve_to_their_kinds() {
    assert_eq!(one("BEGIN", LexContext::Normal).kind, TokenKind::Begin);
    assert_eq!(one("INTEGER", LexContext::Normal).kind, TokenKind::Integer);
    assert_eq!(
        one("ABSTRACT-SYNTAX", LexContext::Normal).kind,
        TokenKind::AbstractSyntax
    );
    assert_eq!(one("BMPString", LexContext::Normal).kind, TokenKind::BmpString);
    // Keywords carry no payload; the spelling lives in the kind.
    assert_eq!(one("BEGIN", LexContext::Normal).text, None);
}

#[test]
fn special_real_values_have_dedicated_kinds() {
    assert_eq!(
        kinds("PLUS-INFINITY MINUS-INFINITY NOT-A-NUMBER"),
        vec![
            TokenKind::PlusInfinity,
            TokenKind::MinusInfinity,
            TokenKind::NotANumber
        ]
    );
}

// === Context-driven classification ===

#[test]
fn encoding_context_accepts_known_references() {
    let t = one("PER", LexContext::Encoding);
    assert_eq!(t.kind, TokenKind::EncodingReference);
    assert_eq!(t.text_str(), "PER");
}

#[test]
fn encoding_context_rejects_unknown_references() {
    assert_eq!(
        err("FOO", LexContext::Encoding),
        LexErrorKind::UnknownEncodingReference("FOO".into())
    );
}

#[test]
fn object_class_context_promotes_all_uppercase_names() {
    assert_eq!(
        one("MY-CLASS", LexContext::ObjectClass).kind,
        TokenKind::ObjectClassReference
    );
    // Mixed case stays a typereference even in class position.
    assert_eq!(
        one("MyType", LexContext::ObjectClass).kind,
        TokenKind::TypeReference
    );
}

#[test]
fn syntax_context_produces_words() {
    assert_eq!(one("ARGUMENT", LexContext::Syntax).kind, TokenKind::Word);
    // Digits disqualify a word.
    assert_eq!(one("ARG2", LexContext::Syntax).kind, TokenKind::TypeReference);
}

#[test]
fn level_context_reads_plain_numbers() {
    // No leading-zero promotion when lexing a version/level slot.
    let t = one("007", LexContext::Level);
    assert_eq!(t.kind, TokenKind::Number);
    assert_eq!(t.text_str(), "007");
}

#[test]
fn equals_only_exists_in_property_settings() {
    assert_eq!(one("=", LexContext::PropertySettings).kind, TokenKind::Equals);
    assert_eq!(
        err("=", LexContext::Normal),
        LexErrorKind::InvalidToken("=".into())
    );
}

// === Numbers ===

#[test]
fn integer_literals() {
    let t = one("42", LexContext::Normal);
    assert_eq!(t.kind, TokenKind::Number);
    assert_eq!(t.text_str(), "42");
    assert_eq!(one("0", LexContext::Normal).kind, TokenKind::Number);
}

#[test]
fn fraction_promotes_to_real() {
    let t = one("3.14", LexContext::Normal);
    assert_eq!(t.kind, TokenKind::RealNumber);
    assert_eq!(t.text_str(), "3.14");
}

#[test]
fn exponent_promotes_to_real() {
    assert_eq!(one("5e10", LexContext::Normal).text_str(), "5e10");
    assert_eq!(one("5E-3", LexContext::Normal).text_str(), "5E-3");
    assert_eq!(one("1.5e+2", LexContext::Normal).kind, TokenKind::RealNumber);
}

#[test]
fn bare_exponent_marker_is_not_consumed() {
    // `5e` with no digits: number 5, then the identifier `e`.
    assert_eq!(kinds("5e"), vec![TokenKind::Number, TokenKind::Identifier]);
}

#[test]
fn leading_zero_promotes_multi_digit_literals() {
    assert_eq!(one("007", LexContext::Normal).kind, TokenKind::RealNumber);
    assert_eq!(one("0", LexContext::Normal).kind, TokenKind::Number);
}

#[test]
fn range_dots_are_not_a_fraction() {
    assert_eq!(
        kinds("5..10"),
        vec![TokenKind::Number, TokenKind::Range, TokenKind::Number]
    );
}

// === Punctuation ===

#[test]
fn assignment_and_dots() {
    assert_eq!(kinds("::="), vec![TokenKind::Assign]);
    assert_eq!(kinds(":"), vec![TokenKind::Colon]);
    assert_eq!(kinds("."), vec![TokenKind::Dot]);
    assert_eq!(kinds(".."), vec![TokenKind::Range]);
    assert_eq!(kinds("..."), vec![TokenKind::Ellipsis]);
}

#[test]
fn version_brackets_outside_syntax_context() {
    assert_eq!(
        kinds("[[1]]"),
        vec![
            TokenKind::LeftVersionBrackets,
            TokenKind::Number,
            TokenKind::RightVersionBrackets
        ]
    );
}

#[test]
fn syntax_context_never_pairs_brackets() {
    let tokens = lex_all("[[", LexContext::Syntax);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::LeftBracket, TokenKind::LeftBracket]
    );
}

// === Bit and hex strings ===

#[test]
fn bstring_and_hstring() {
    let b = one("'0101'B", LexContext::Normal);
    assert_eq!(b.kind, TokenKind::BString);
    assert_eq!(b.text_str(), "0101");

    let h = one("'1AF0'H", LexContext::Normal);
    assert_eq!(h.kind, TokenKind::HString);
    assert_eq!(h.text_str(), "1AF0");
}

#[test]
fn whitespace_inside_binary_strings_is_dropped() {
    assert_eq!(one("'01 10\n 11'B", LexContext::Normal).text_str(), "011011");
}

#[test]
fn hex_content_with_binary_suffix_falls_back_to_apostrophe() {
    // '2'B is not a valid bstring; the quote becomes a lone apostrophe
    // and lexing resumes right after it.
    assert_eq!(
        kinds("'2'B"),
        vec![
            TokenKind::Apostrophe,
            TokenKind::Number,
            TokenKind::Apostrophe,
            TokenKind::TypeReference
        ]
    );
}

#[test]
fn unclosed_quote_falls_back_to_apostrophe() {
    assert_eq!(kinds("' x"), vec![TokenKind::Apostrophe, TokenKind::Identifier]);
}

// === Character strings ===

#[test]
fn plain_ascii_string_keeps_all_flags() {
    let t = one("\"Printable\"", LexContext::Normal);
    assert_eq!(t.kind, TokenKind::CString);
    assert_eq!(t.text_str(), "Printable");
    assert_eq!(t.flags, StringFlags::all_candidates());
}

#[test]
fn doubled_quote_escapes_and_narrows_to_cstring() {
    let t = one("\"say \"\"hi\"\"\"", LexContext::Normal);
    assert_eq!(t.text_str(), "say \"hi\"");
    assert_eq!(t.flags, StringFlags::CSTRING);
}

#[test]
fn non_ascii_clears_simple_string() {
    let t = one("\"héllo\"", LexContext::Normal);
    assert_eq!(t.flags, StringFlags::CSTRING | StringFlags::TSTRING);
}

#[test]
fn line_break_narrows_to_cstring() {
    let t = one("\"two\nlines\"", LexContext::Normal);
    assert_eq!(t.flags, StringFlags::CSTRING);
}

#[test]
fn empty_string_is_cstring_only() {
    let t = one("\"\"", LexContext::Normal);
    assert_eq!(t.text_str(), "");
    assert_eq!(t.flags, StringFlags::CSTRING);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(err("\"open", LexContext::Normal), LexErrorKind::UnterminatedString);
}

// === Field references ===

#[test]
fn ampersand_splices_a_type_field_reference() {
    let t = one("&ArgumentType", LexContext::TypeField);
    assert_eq!(t.kind, TokenKind::TypeFieldReference);
    assert_eq!(t.text_str(), "&ArgumentType");
    assert_eq!(t.offset, 0);
    assert_eq!((t.line, t.column), (1, 1));
}

#[test]
fn ampersand_splices_a_value_field_reference() {
    let t = one("&minimum", LexContext::ValueField);
    assert_eq!(t.kind, TokenKind::ValueFieldReference);
    assert_eq!(t.text_str(), "&minimum");
}

#[test]
fn field_reference_case_must_match_context() {
    assert_eq!(
        err("&minimum", LexContext::TypeField),
        LexErrorKind::InvalidFieldReference
    );
    assert_eq!(
        err("&Type", LexContext::ValueField),
        LexErrorKind::InvalidFieldReference
    );
    assert_eq!(err("&1", LexContext::TypeField), LexErrorKind::InvalidFieldReference);
}

#[test]
fn ampersand_is_plain_punctuation_outside_field_contexts() {
    assert_eq!(kinds("&Foo"), vec![TokenKind::Ampersand, TokenKind::TypeReference]);
}

// === Positions ===

#[test]
fn tokens_record_line_and_column() {
    let tokens = lex_all("AA\n  bb", LexContext::Normal);
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    assert_eq!(tokens[1].offset, 5);
}

// === Pushback ===

#[test]
fn pushback_replays_under_matching_context() {
    let mut lexer = Lexer::new("BEGIN END");
    let first = lexer.next_token(LexContext::Normal).unwrap().unwrap();
    lexer.push_back(first.clone());
    assert_eq!(lexer.next_token(LexContext::Normal).unwrap(), Some(first));
    assert_eq!(
        lexer.next_token(LexContext::Normal).unwrap().unwrap().kind,
        TokenKind::End
    );
}

#[test]
fn context_mismatch_relexes_from_token_start() {
    let mut lexer = Lexer::new("&Foo rest");
    let amp = lexer.next_token(LexContext::Normal).unwrap().unwrap();
    assert_eq!(amp.kind, TokenKind::Ampersand);
    lexer.push_back(amp);

    let spliced = lexer.next_token(LexContext::TypeField).unwrap().unwrap();
    assert_eq!(spliced.kind, TokenKind::TypeFieldReference);
    assert_eq!(spliced.text_str(), "&Foo");
    assert_eq!(
        lexer.next_token(LexContext::Normal).unwrap().unwrap().text_str(),
        "rest"
    );
}

#[test]
fn context_mismatch_discards_deeper_pushback() {
    let mut lexer = Lexer::new("MY-CLASS second");
    let a = lexer.next_token(LexContext::Normal).unwrap().unwrap();
    let b = lexer.next_token(LexContext::Normal).unwrap().unwrap();
    lexer.push_back(b);
    lexer.push_back(a);

    // The front token re-lexes under the new context; the deeper one is
    // re-scanned from characters, not replayed stale.
    let a2 = lexer.next_token(LexContext::ObjectClass).unwrap().unwrap();
    assert_eq!(a2.kind, TokenKind::ObjectClassReference);
    let b2 = lexer.next_token(LexContext::Normal).unwrap().unwrap();
    assert_eq!(b2.kind, TokenKind::Identifier);
    assert_eq!(b2.text_str(), "second");
}

#[test]
fn relexing_after_mismatch_matches_a_fresh_lexer() {
    let source = "Module DEFINITIONS ::= BEGIN END";
    let mut fresh = Lexer::new(source);
    let expected: Vec<Token> = std::iter::from_fn(|| fresh.next_token(LexContext::Normal).unwrap())
        .collect();

    let mut lexer = Lexer::new(source);
    let t = lexer.next_token(LexContext::Syntax).unwrap().unwrap();
    lexer.push_back(t);
    let relexed: Vec<Token> = std::iter::from_fn(|| lexer.next_token(LexContext::Normal).unwrap())
        .collect();
    assert_eq!(relexed, expected);
}

#[test]
fn recoverable_errors_leave_the_stream_at_token_start() {
    let mut lexer = Lexer::new("bad- ok");
    assert!(lexer.next_token(LexContext::Normal).is_err());
    // Retrying lexes the same error deterministically.
    assert!(lexer.next_token(LexContext::Normal).is_err());
}

#[test]
fn invalid_character_reports_the_whole_run() {
    assert_eq!(
        err("#foo bar", LexContext::Normal),
        LexErrorKind::InvalidToken("#foo".into())
    );
}

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, Option<String>)> {
    lex_all(source, LexContext::Normal)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

proptest! {
    // Comments and whitespace never change the token stream.
    #[test]
    fn trivia_never_changes_the_token_stream(
        words in proptest::collection::vec("[a-z][a-z0-9]{0,5}", 1..8),
    ) {
        let plain = words.join(" ");
        let noisy = words.join(" -- noise --\n/* outer /* inner */ */ ");
        prop_assert_eq!(kinds_and_texts(&plain), kinds_and_texts(&noisy));
    }
}
