//! The combinator primitives the grammar layer composes rules from.
//!
//! Every combinator that may partially consume input brackets its
//! attempt between `mark()` and either `clear_mark()` (success) or
//! `reset_to_mark()` (failure), so a declined attempt is invisible to
//! the next alternative.

use std::rc::Rc;

use asn_token::{LexContext, TokenKind};
use tracing::trace;

use crate::parser::Parser;
use crate::rule::{Matched, ParseResult, Rule};

// ─── SingleToken ────────────────────────────────────────────────────────

/// Matches exactly one token of the given kind.
///
/// With a context attached, that context is pushed for the duration of
/// this one lookahead — the spot in the grammar where a single token
/// must be lexed differently than its surroundings.
pub struct SingleToken {
    kind: TokenKind,
    context: Option<LexContext>,
}

impl SingleToken {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub fn with_context(kind: TokenKind, context: LexContext) -> Self {
        Self {
            kind,
            context: Some(context),
        }
    }
}

impl<N> Rule<N> for SingleToken {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        if let Some(context) = self.context {
            parser.push_context(context);
        }
        let result = self.read(parser);
        if self.context.is_some() {
            parser.pop_context();
        }
        result
    }
}

impl SingleToken {
    fn read<N>(&self, parser: &mut Parser) -> ParseResult<N> {
        match parser.read_token() {
            Ok(Some(t)) if t.kind == self.kind => Ok(Some(Matched::Token(t))),
            Ok(Some(t)) => {
                parser.record_mismatch(self.kind, t.clone());
                parser.unread_token(t);
                Ok(None)
            }
            Ok(None) => {
                parser.record_eof(self.kind);
                Ok(None)
            }
            Err(e) => {
                parser.record_lex_failure(&e);
                Err(e.into())
            }
        }
    }
}

// ─── Sequence ───────────────────────────────────────────────────────────

/// Evaluates its elements in order.
///
/// An optional element that fails contributes `None` at its slot and
/// parsing continues; a mandatory element that fails aborts the whole
/// sequence (rewound, `Ok(None)`). A lexical error inside a mandatory
/// element propagates after the rewind.
pub struct Sequence<N> {
    rules: Vec<Rc<dyn Rule<N>>>,
    mandatory: Vec<bool>,
}

impl<N> Sequence<N> {
    /// # Panics
    ///
    /// Panics when the flag list does not match the rule list in length
    /// (structural misuse by the grammar layer).
    pub fn new(rules: Vec<Rc<dyn Rule<N>>>, mandatory: Vec<bool>) -> Self {
        assert_eq!(
            rules.len(),
            mandatory.len(),
            "sequence rules and mandatory flags differ in length"
        );
        Self { rules, mandatory }
    }
}

impl<N> Rule<N> for Sequence<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        parser.mark();
        let mut slots = Vec::with_capacity(self.rules.len());
        for (rule, &mandatory) in self.rules.iter().zip(&self.mandatory) {
            if mandatory {
                match rule.parse(parser) {
                    Ok(Some(m)) => slots.push(Some(m)),
                    Ok(None) => {
                        parser.reset_to_mark();
                        return Ok(None);
                    }
                    Err(e) => {
                        parser.reset_to_mark();
                        return Err(e);
                    }
                }
            } else {
                parser.mark();
                match rule.parse(parser) {
                    Ok(Some(m)) => {
                        parser.clear_mark();
                        slots.push(Some(m));
                    }
                    Ok(None) => {
                        parser.clear_mark();
                        slots.push(None);
                    }
                    Err(_) => {
                        // The failure is already recorded; a malformed
                        // optional element is simply absent.
                        parser.reset_to_mark();
                        slots.push(None);
                    }
                }
            }
        }
        parser.clear_mark();
        Ok(Some(Matched::Sequence(slots)))
    }
}

// ─── Choice ─────────────────────────────────────────────────────────────

/// Ordered choice: alternatives are tried in the given priority order
/// and the first match wins immediately, so author-specified ordering is
/// semantically significant for ambiguous prefixes. Each failed
/// alternative — including one aborted by a lexical error — is fully
/// rewound before the next is tried.
pub struct Choice<N> {
    alternatives: Vec<Rc<dyn Rule<N>>>,
}

impl<N> Choice<N> {
    pub fn new(alternatives: Vec<Rc<dyn Rule<N>>>) -> Self {
        Self { alternatives }
    }

    /// Choice over raw token kinds.
    pub fn of_kinds(kinds: &[TokenKind]) -> Self {
        Self {
            alternatives: kinds
                .iter()
                .map(|&k| Rc::new(SingleToken::new(k)) as Rc<dyn Rule<N>>)
                .collect(),
        }
    }
}

impl<N> Rule<N> for Choice<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        for (index, alternative) in self.alternatives.iter().enumerate() {
            parser.mark();
            match alternative.parse(parser) {
                Ok(Some(m)) => {
                    parser.clear_mark();
                    return Ok(Some(m));
                }
                Ok(None) => parser.clear_mark(),
                Err(_) => {
                    trace!(index, "alternative aborted by lexical error");
                    parser.reset_to_mark();
                }
            }
        }
        Ok(None)
    }
}

// ─── AmbiguousChoice ────────────────────────────────────────────────────

/// Tries every alternative and keeps the ones with maximal token
/// consumption. A single winner behaves like [`Choice`]; a tie returns
/// all tied results as [`Matched::Ambiguous`]. Either way, one winning
/// alternative is re-run so the primary position advances past the
/// longest match.
pub struct AmbiguousChoice<N> {
    alternatives: Vec<Rc<dyn Rule<N>>>,
}

impl<N> AmbiguousChoice<N> {
    pub fn new(alternatives: Vec<Rc<dyn Rule<N>>>) -> Self {
        Self { alternatives }
    }
}

impl<N> Rule<N> for AmbiguousChoice<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        let mut matches: Vec<(usize, usize, Matched<N>)> = Vec::new();
        for (index, alternative) in self.alternatives.iter().enumerate() {
            parser.mark();
            match alternative.parse(parser) {
                Ok(Some(m)) => {
                    let consumed = parser.consumed_since_mark();
                    matches.push((index, consumed, m));
                    parser.reset_to_mark();
                }
                Ok(None) => parser.clear_mark(),
                Err(_) => parser.reset_to_mark(),
            }
        }

        let Some(max) = matches.iter().map(|&(_, consumed, _)| consumed).max() else {
            return Ok(None);
        };
        let winners: Vec<(usize, Matched<N>)> = matches
            .into_iter()
            .filter(|&(_, consumed, _)| consumed == max)
            .map(|(index, _, m)| (index, m))
            .collect();
        trace!(winners = winners.len(), consumed = max, "ambiguous choice resolved");

        // Advance the primary position by re-running one winner. Rules
        // are deterministic, so the re-run reproduces the stored result.
        let first_index = winners[0].0;
        parser.mark();
        match self.alternatives[first_index].parse(parser) {
            Ok(Some(rerun)) => {
                parser.clear_mark();
                if winners.len() == 1 {
                    Ok(Some(rerun))
                } else {
                    Ok(Some(Matched::Ambiguous(
                        winners.into_iter().map(|(_, m)| m).collect(),
                    )))
                }
            }
            Ok(None) => {
                parser.clear_mark();
                Ok(None)
            }
            Err(e) => {
                parser.reset_to_mark();
                Err(e)
            }
        }
    }
}

// ─── Repetition ─────────────────────────────────────────────────────────

/// Applies the rule until it declines. Zero repetitions yield `None`,
/// not an empty list, so callers can tell "rule family absent" from a
/// present-but-empty construct.
///
/// # Contract
///
/// The sub-rule must consume at least one token when it matches; a rule
/// that can succeed on empty input (a lookahead, a sequence of only
/// optional slots) would repeat forever. Debug builds catch this as a
/// programmer error.
pub struct Repetition<N> {
    rule: Rc<dyn Rule<N>>,
}

impl<N> Repetition<N> {
    pub fn new(rule: Rc<dyn Rule<N>>) -> Self {
        Self { rule }
    }
}

impl<N> Rule<N> for Repetition<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        let mut items = Vec::new();
        loop {
            parser.mark();
            match self.rule.parse(parser) {
                Ok(Some(m)) => {
                    debug_assert!(
                        parser.consumed_since_mark() > 0,
                        "repetition sub-rule matched without consuming input"
                    );
                    parser.clear_mark();
                    items.push(m);
                }
                Ok(None) => {
                    parser.clear_mark();
                    break;
                }
                Err(e) => {
                    parser.reset_to_mark();
                    return Err(e);
                }
            }
        }
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Matched::Repetition(items)))
        }
    }
}

// ─── TokenSeparated ─────────────────────────────────────────────────────

/// One-or-more occurrences of the rule separated by any of the given
/// token kinds. Declines if even the first occurrence fails; a
/// separator not followed by another occurrence is replayed and the
/// list ends before it.
pub struct TokenSeparated<N> {
    rule: Rc<dyn Rule<N>>,
    separators: Vec<TokenKind>,
}

impl<N> TokenSeparated<N> {
    pub fn new(rule: Rc<dyn Rule<N>>, separators: Vec<TokenKind>) -> Self {
        Self { rule, separators }
    }

    pub fn comma(rule: Rc<dyn Rule<N>>) -> Self {
        Self::new(rule, vec![TokenKind::Comma])
    }
}

impl<N> Rule<N> for TokenSeparated<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        let first = match self.rule.parse(parser)? {
            Some(m) => m,
            None => return Ok(None),
        };
        let mut items = vec![first];
        loop {
            parser.mark();
            let separated = match parser.read_token() {
                Ok(Some(t)) if self.separators.contains(&t.kind) => true,
                Ok(Some(t)) => {
                    parser.unread_token(t);
                    false
                }
                Ok(None) => false,
                // A lexical error where a separator would sit just ends
                // the list; the text after it belongs to the caller.
                Err(_) => false,
            };
            if !separated {
                parser.clear_mark();
                break;
            }
            match self.rule.parse(parser) {
                Ok(Some(m)) => {
                    parser.clear_mark();
                    items.push(m);
                }
                Ok(None) => {
                    // Trailing separator: replay it for the caller.
                    parser.reset_to_mark();
                    break;
                }
                Err(e) => {
                    parser.reset_to_mark();
                    return Err(e);
                }
            }
        }
        Ok(Some(Matched::Repetition(items)))
    }
}

// ─── NegativeLookahead ──────────────────────────────────────────────────

/// Peeks one token without consuming it; succeeds iff the peeked kind is
/// not one of the given kinds, or the input is exhausted.
pub struct NegativeLookahead {
    kinds: Vec<TokenKind>,
}

impl NegativeLookahead {
    pub fn new(kinds: Vec<TokenKind>) -> Self {
        Self { kinds }
    }
}

impl<N> Rule<N> for NegativeLookahead {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        match parser.read_token() {
            Ok(None) => Ok(Some(Matched::Lookahead)),
            Ok(Some(t)) => {
                let forbidden = self.kinds.contains(&t.kind);
                parser.unread_token(t);
                if forbidden {
                    Ok(None)
                } else {
                    Ok(Some(Matched::Lookahead))
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ─── ValueExtractor ─────────────────────────────────────────────────────

/// Projects one slot out of a sequence result. A skipped optional slot
/// projects to `None`.
pub struct ValueExtractor<N> {
    index: usize,
    rule: Rc<dyn Rule<N>>,
}

impl<N> ValueExtractor<N> {
    pub fn new(index: usize, rule: Rc<dyn Rule<N>>) -> Self {
        Self { index, rule }
    }
}

impl<N> Rule<N> for ValueExtractor<N> {
    /// # Panics
    ///
    /// Panics when the inner rule yields a non-sequence result or the
    /// index is out of range (structural misuse by the grammar layer).
    fn parse(&self, parser: &mut Parser) -> ParseResult<N> {
        match self.rule.parse(parser)? {
            None => Ok(None),
            Some(Matched::Sequence(mut slots)) => {
                assert!(
                    self.index < slots.len(),
                    "extractor index {} out of range for {} slots",
                    self.index,
                    slots.len()
                );
                Ok(slots[self.index].take())
            }
            Some(_) => panic!("value extractor applied to a non-sequence rule"),
        }
    }
}
