//! Parser for chord tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer) into
//! a [`ChordTree`]. The public entry point is [`build_tree`].
//!
//! The entry production is an ordered choice between a progression and a
//! single chord. It is resolved without backtracking: the first chord is
//! parsed, and only a following `-` commits to a progression. A chord with no
//! `-` after it is returned as a chord, never as a one-element progression.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{opt, peek},
    error::{ContextError, ErrMode, ModalResult},
    stream::TokenSlice,
    token::any,
};

use chordal_core::{Accidental, ChordNode, ChordTree, NoteLetter, ProgressionNode, Quality, RootNote};

use crate::{
    error::{ParseError, Result},
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'src> = ChordTokenSlice<'src>;
type IResult<O> = ModalResult<O>;
/// Type alias for winnow TokenSlice with our positioned tokens
type ChordTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

/// Peek at the next token without consuming it
fn current<'src>(input: &mut Input<'src>) -> Option<&'src PositionedToken<'src>> {
    peek(any::<_, ErrMode<ContextError>>).parse_next(input).ok()
}

/// Build the error for whatever token sits at the current position
fn unexpected(input: &mut Input<'_>) -> ParseError {
    match current(input) {
        Some(token) => match token.first_char() {
            Some(found) => ParseError::UnexpectedChar {
                offset: token.span.start(),
                found,
            },
            None => ParseError::UnexpectedEnd {
                offset: token.span.start(),
            },
        },
        // Streams from the lexer always end with `EndOfInput`
        None => ParseError::UnexpectedEnd { offset: 0 },
    }
}

/// Parse a note letter
fn letter<'src>(input: &mut Input<'src>) -> IResult<(NoteLetter, Span)> {
    any.verify_map(|token: &'src PositionedToken<'src>| match token.token {
        Token::Letter(letter) => Some((letter, token.span)),
        _ => None,
    })
    .parse_next(input)
}

/// Parse an accidental
fn accidental<'src>(input: &mut Input<'src>) -> IResult<Accidental> {
    any.verify_map(|token: &'src PositionedToken<'src>| match token.token {
        Token::Accidental(accidental) => Some(accidental),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a quality-shaped word with its span
fn quality_word<'src>(input: &mut Input<'src>) -> IResult<(&'src str, Span)> {
    any.verify_map(|token: &'src PositionedToken<'src>| match token.token {
        Token::QualityWord(word) => Some((word, token.span)),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a `/`, returning its span
fn slash<'src>(input: &mut Input<'src>) -> IResult<Span> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Slash))
        .map(|token: &'src PositionedToken<'src>| token.span)
        .parse_next(input)
}

/// Parse a `-`
fn hyphen<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Hyphen))
        .void()
        .parse_next(input)
}

/// Parse the end of input marker
fn end_of_input<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::EndOfInput))
        .void()
        .parse_next(input)
}

/// Parse a root: a letter and an optional accidental
fn root<'src>(input: &mut Input<'src>) -> IResult<RootNote> {
    (letter, opt(accidental))
        .map(|((letter, _), accidental)| RootNote::new(letter, accidental))
        .parse_next(input)
}

/// Parse an optional quality, rejecting unknown spellings
fn quality(input: &mut Input<'_>) -> Result<Option<Quality>> {
    let Some((word, span)) = opt(quality_word)
        .parse_next(input)
        .map_err(|_| unexpected(input))?
    else {
        return Ok(None);
    };

    Quality::from_spelling(word)
        .map(Some)
        .ok_or_else(|| ParseError::UnknownQuality {
            offset: span.start(),
            word: word.to_string(),
        })
}

/// Parse an optional `/bass`, where the bass must be a bare root
fn bass(input: &mut Input<'_>) -> Result<Option<RootNote>> {
    let Some(slash_span) = opt(slash).parse_next(input).map_err(|_| unexpected(input))? else {
        return Ok(None);
    };

    let bass = root.parse_next(input).map_err(|_| unexpected(input))?;

    // A bass note cannot carry a quality or a bass of its own
    if let Some(next) = current(input) {
        if let (Token::QualityWord(_) | Token::Slash, Some(found)) = (&next.token, next.first_char()) {
            return Err(ParseError::InvalidBassRoot {
                offset: next.span.start(),
                found,
                slash: slash_span.start(),
            });
        }
    }

    Ok(Some(bass))
}

/// Parse exactly one chord: root, optional quality, optional bass
fn chord(input: &mut Input<'_>) -> Result<ChordNode> {
    let root = root.parse_next(input).map_err(|_| unexpected(input))?;

    let mut chord = ChordNode::new(root);
    if let Some(quality) = quality(input)? {
        chord = chord.with_quality(quality);
    }
    if let Some(bass) = bass(input)? {
        chord = chord.with_bass(bass);
    }

    trace!(chord:% = chord; "Parsed chord");
    Ok(chord)
}

/// Consume a `-` if one follows; `false` means the chord sequence is over
fn separator(input: &mut Input<'_>) -> Result<bool> {
    opt(hyphen)
        .parse_next(input)
        .map(|hyphen| hyphen.is_some())
        .map_err(|_| unexpected(input))
}

/// Require the end of input after the last chord
fn end(input: &mut Input<'_>) -> Result<()> {
    end_of_input.parse_next(input).map_err(|_| unexpected(input))
}

/// Parse a progression or, failing a `-` after the first chord, a single chord
fn chord_tree(input: &mut Input<'_>) -> Result<ChordTree> {
    let first = chord(input)?;

    if !separator(input)? {
        end(input)?;
        return Ok(ChordTree::Chord(first));
    }

    let second = chord(input)?;
    let mut rest = Vec::new();
    while separator(input)? {
        rest.push(chord(input)?);
    }
    end(input)?;

    let progression = ProgressionNode::new(first, second, rest);
    debug!(chords = progression.len(); "Parsed progression");
    Ok(ChordTree::Progression(progression))
}

/// Build a chord tree from a token stream produced by [`tokenize`](crate::lexer::tokenize).
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is returned.
pub fn build_tree<'src>(tokens: &'src [PositionedToken<'src>]) -> Result<ChordTree> {
    let mut token_slice = TokenSlice::new(tokens);
    chord_tree(&mut token_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_tokens(input: &str) -> Vec<PositionedToken<'_>> {
        tokenize(input).expect("Failed to tokenize input")
    }

    /// Helper to create a token at a specific position
    fn make_token<'a>(token: Token<'a>, offset: usize, length: usize) -> PositionedToken<'a> {
        PositionedToken {
            token,
            span: Span::new(offset..offset + length),
        }
    }

    #[test]
    fn test_root_with_accidental() {
        let tokens = parse_tokens("Eb");
        let mut slice = TokenSlice::new(&tokens);
        let result = root.parse_next(&mut slice).expect("root should parse");

        assert_eq!(result.letter(), NoteLetter::E);
        assert_eq!(result.accidental(), Some(Accidental::Flat));
    }

    #[test]
    fn test_quality_is_optional() {
        let tokens = parse_tokens("C");
        let mut slice = TokenSlice::new(&tokens);
        root.parse_next(&mut slice).expect("root should parse");

        assert_eq!(quality(&mut slice), Ok(None));
        // Nothing was consumed
        assert_eq!(end(&mut slice), Ok(()));
    }

    #[test]
    fn test_unknown_quality_word() {
        let tokens = parse_tokens("Cm");
        let mut slice = TokenSlice::new(&tokens);
        root.parse_next(&mut slice).expect("root should parse");
        assert_eq!(quality(&mut slice), Ok(Some(Quality::Minor)));

        // A known spelling at the start of a longer word is not split off
        let tokens = parse_tokens("Cmin");
        let mut slice = TokenSlice::new(&tokens);
        root.parse_next(&mut slice).expect("root should parse");
        assert_eq!(
            quality(&mut slice),
            Err(ParseError::UnknownQuality {
                offset: 1,
                word: "min".to_string()
            })
        );

        let tokens = parse_tokens("Cx");
        let mut slice = TokenSlice::new(&tokens);
        root.parse_next(&mut slice).expect("root should parse");
        assert_eq!(
            quality(&mut slice),
            Err(ParseError::UnknownQuality {
                offset: 1,
                word: "x".to_string()
            })
        );
    }

    #[test]
    fn test_bass_with_slash_inside_bass() {
        let tokens = parse_tokens("C/E/G");
        let mut slice = TokenSlice::new(&tokens);
        root.parse_next(&mut slice).expect("root should parse");

        assert_eq!(
            bass(&mut slice),
            Err(ParseError::InvalidBassRoot {
                offset: 3,
                found: '/',
                slash: 1
            })
        );
    }

    #[test]
    fn test_chord_tree_single_chord_is_not_wrapped() {
        let tokens = parse_tokens("G7");
        let tree = build_tree(&tokens).expect("G7 should parse");

        assert_eq!(
            tree,
            ChordTree::Chord(ChordNode::new(NoteLetter::G).with_quality(Quality::Dominant7))
        );
    }

    #[test]
    fn test_trailing_hyphen_fails_at_end() {
        let tokens = parse_tokens("C-F-");
        assert_eq!(
            build_tree(&tokens),
            Err(ParseError::UnexpectedEnd { offset: 4 })
        );
    }

    #[test]
    fn test_hand_built_tokens() {
        let tokens = vec![
            make_token(Token::Letter(NoteLetter::A), 0, 1),
            make_token(Token::QualityWord("m"), 1, 1),
            make_token(Token::Hyphen, 2, 1),
            make_token(Token::Letter(NoteLetter::E), 3, 1),
            make_token(Token::EndOfInput, 4, 0),
        ];

        let tree = build_tree(&tokens).expect("hand-built tokens should parse");
        assert!(tree.is_progression());
        assert_eq!(tree.to_string(), "Am-E");
    }

    #[test]
    fn test_missing_end_marker_reports_end() {
        let tokens = vec![make_token(Token::Letter(NoteLetter::A), 0, 1)];

        assert_eq!(
            build_tree(&tokens),
            Err(ParseError::UnexpectedEnd { offset: 0 })
        );
    }
}
