//! Lexical analyzer for chord notation.
//!
//! The lexer converts source text into a stream of [`Token`]s for parsing.
//! The letter `b` is overloaded: it is the flat accidental directly after a
//! note letter and never a note itself (note letters are uppercase). The
//! lexer therefore scans in modes that track where it is inside a chord
//! rather than running a context-free pass.
//!
//! A quality is lexed as the whole run of quality-shaped characters and is
//! not checked against the known spellings here, so `Cmin` yields the single
//! word `min` for the parser to reject.
//!
//! The public entry point is [`tokenize`]. Every successful token stream ends
//! with [`Token::EndOfInput`].

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, not, preceded},
    error::ModalResult,
    stream::{LocatingSlice, Location},
    token::{one_of, take_while},
};

use chordal_core::{Accidental, NoteLetter};

use crate::{
    error::ParseError,
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

/// Where the lexer is inside the current chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Start of input, or after `/` or `-`: only a note letter may follow.
    Root,
    /// Directly after a note letter: an accidental may follow.
    AfterLetter,
    /// Directly after an accidental: a second one may not.
    AfterAccidental,
    /// After a complete root or quality.
    Suffix,
}

/// Parse a note letter `A`..`G`
fn note_letter<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    one_of('A'..='G')
        .verify_map(|c: char| NoteLetter::try_from(c).ok())
        .map(Token::Letter)
        .parse_next(input)
}

/// Parse a sharp or flat accidental
fn accidental<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    one_of(['#', 'b'])
        .verify_map(Accidental::from_symbol)
        .map(Token::Accidental)
        .parse_next(input)
}

/// Parse a quality word: a run starting with a lowercase letter, digit, `+`
/// or `M` and continuing with alphanumerics or `+`
fn quality_word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        one_of(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c == 'M'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '+'),
    )
        .take()
        .map(Token::QualityWord)
        .parse_next(input)
}

/// Parse structural punctuation
fn punctuation<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt(('/'.value(Token::Slash), '-'.value(Token::Hyphen))).parse_next(input)
}

/// Parse the next token allowed in `mode`
fn mode_token<'a>(input: &mut Input<'a>, mode: Mode) -> IResult<Token<'a>> {
    match mode {
        Mode::Root => note_letter.parse_next(input),
        Mode::AfterLetter => alt((accidental, quality_word, punctuation)).parse_next(input),
        Mode::AfterAccidental => {
            preceded(not(one_of(['#', 'b'])), alt((quality_word, punctuation))).parse_next(input)
        }
        Mode::Suffix => alt((quality_word, punctuation)).parse_next(input),
    }
}

/// Lexer that accumulates tokens while tracking its position in a chord.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            mode: Mode::Root,
        }
    }

    /// Tokenize the input, stopping at the first unexpected character.
    fn tokenize(&mut self, mut input: Input<'a>) -> Result<(), ParseError> {
        while let Some(next) = input.chars().next() {
            let start_pos = input.current_token_start();

            let token = mode_token(&mut input, self.mode).map_err(|_| {
                ParseError::UnexpectedChar {
                    offset: start_pos,
                    found: next,
                }
            })?;

            let end_pos = input.current_token_start();
            trace!(token:% = token, start = start_pos, end = end_pos; "Lexed token");

            self.mode = match token {
                Token::Letter(_) => Mode::AfterLetter,
                Token::Slash | Token::Hyphen => Mode::Root,
                Token::Accidental(_) => Mode::AfterAccidental,
                Token::QualityWord(_) | Token::EndOfInput => Mode::Suffix,
            };
            self.tokens
                .push(PositionedToken::new(token, Span::new(start_pos..end_pos)));
        }

        let end = input.current_token_start();
        self.tokens
            .push(PositionedToken::new(Token::EndOfInput, Span::empty(end)));
        Ok(())
    }

    /// Finish lexing and return the tokens.
    fn finish(self) -> Vec<PositionedToken<'a>> {
        self.tokens
    }
}

/// Split chord text into positioned tokens.
///
/// # Returns
///
/// - `Ok(tokens)` - All input tokenized; the last token is [`Token::EndOfInput`]
/// - `Err(ParseError::UnexpectedChar)` - A character is not valid where it appears
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let located_input = LocatingSlice::new(input);
    let mut lexer = Lexer::new();
    lexer.tokenize(located_input)?;
    Ok(lexer.finish())
}
