use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::Error, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{is_keyword, Token, TokenKind};

/// Target for the lexer's `tracing` events.
pub const LOG_TARGET: &str = "clex::lexer";

pub type ScanHandler = fn(&mut Lexer, &Regex) -> Result<Token, Error>;

pub struct ScanPattern {
    regex: Regex,
    handler: ScanHandler,
}

lazy_static! {
    // C `isspace`: space, \t, \n, \v, \f, \r
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\n\x0B\x0C\r]+").unwrap();

    // Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<ScanPattern> = vec![
        ScanPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        ScanPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        ScanPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        ScanPattern { regex: Regex::new("^\"").unwrap(), handler: unterminated_string_handler },
        ScanPattern { regex: Regex::new("^(<=|>=|==|!=|[-+*/%=!<>])").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        ScanPattern { regex: Regex::new("^[()]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Parenthesis) },
        ScanPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ending) },
    ];
}

/// Scans tokens out of an owned source string, one at a time.
///
/// The cursor is a byte offset into the source. Every pattern consumes either
/// ASCII bytes or a whole string literal ending in `"`, so the cursor always
/// sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Produces the token starting at the cursor, after skipping whitespace.
    ///
    /// Returns an `EndOfInput` token once the source is exhausted, and keeps
    /// returning it on every later call. On error the cursor is left where
    /// the failing token would have started.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let Some(character) = self.at() else {
            trace!(target: LOG_TARGET, pos = self.pos, "end of input");
            return Ok(Token::end_of_input());
        };

        for pattern in PATTERNS.iter() {
            if !pattern.regex.is_match(self.remainder()) {
                continue;
            }

            return match (pattern.handler)(self, &pattern.regex) {
                Ok(token) => {
                    trace!(target: LOG_TARGET, kind = %token.kind, value = %token.value, pos = self.pos, "token");
                    Ok(token)
                }
                Err(error) => {
                    debug!(target: LOG_TARGET, %error, "lexing failed");
                    Err(error)
                }
            };
        }

        let error = Error::unexpected_character(character, self.pos);
        debug!(target: LOG_TARGET, %error, "lexing failed");
        Err(error)
    }

    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Token, Error> {
    let value = lexer.matched(regex);
    lexer.advance_n(value.len());

    if is_keyword(&value) {
        Ok(MK_TOKEN!(TokenKind::Keyword, value))
    } else {
        Ok(MK_TOKEN!(TokenKind::Identifier, value))
    }
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Token, Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());

    let string_literal = matched[1..matched.len() - 1].to_string();
    Ok(MK_TOKEN!(TokenKind::String, string_literal))
}

// Reached only when the complete-literal pattern failed, so no closing quote exists.
fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<Token, Error> {
    Err(Error::unterminated_string(lexer.source.len()))
}

/// Iterator over the tokens of a [`Lexer`], excluding `EndOfInput`.
///
/// Stops after the first error.
pub struct Tokens<'a> {
    lexer: &'a mut Lexer,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.lexer.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Lexes the whole source, returning every token up to and including
/// `EndOfInput`, or the first error encountered.
pub fn tokenize(source: impl Into<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let finished = token.is_end_of_input();
        tokens.push(token);

        if finished {
            break;
        }
    }

    Ok(tokens)
}
