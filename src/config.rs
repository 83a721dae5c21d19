//! CLI configuration: logging levels and read-loop behaviour.

use tracing::Level;

pub use clex::lexer::lexer::LOG_TARGET as LEXER_TARGET;

pub const CLI_TARGET: &str = "clex::cli";

/// Log levels, globally and per target.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            LEXER_TARGET => self.lexer.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Print prompts before reading input
    pub prompt: bool,
    /// Report lexical errors and keep reading instead of stopping
    pub keep_going: bool,
}
