//! Error types for lexical analysis.
//!
//! This module defines the errors returned by the lexer when no token can be
//! formed at the cursor:
//!
//! - Error structure carrying the source offset of the failure
//! - Specific error variants for each way scanning can fail
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
