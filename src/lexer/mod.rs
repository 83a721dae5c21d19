//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Offset reporting for errors
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
