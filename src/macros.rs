//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for tokens whose
//!   value is exactly the matched text
//!
//! These macros reduce boilerplate in the scan pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a default lexer handler for patterns whose whole match is the token.
///
/// Generates a handler function that creates a token of the given kind from
/// the text matched at the cursor and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// ScanPattern {
///     regex: Regex::new("^[()]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Parenthesis),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| -> Result<Token, Error> {
            let value = lexer.matched(regex);
            lexer.advance_n(value.len());
            Ok(MK_TOKEN!($kind, value))
        }
    };
}
