//! clex - tokenize C-like source from a file or an interactive prompt.

mod config;
mod logging;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use clex::{
    errors::errors::Error,
    format_error,
    lexer::{lexer::Lexer, tokens::Token},
};
use tracing::{debug, info, Level};

use config::{LogConfig, RunConfig, CLI_TARGET};
use logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize source code for a small C-like language", long_about = None)]
struct Cli {
    /// Source file to tokenize; lines are read interactively when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Global log level
    #[arg(long, env = "CLEX_LOG", default_value = "warn")]
    log_level: Level,

    /// Log level for the lexer, overriding --log-level
    #[arg(long)]
    lexer_log_level: Option<Level>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Do not print prompts
    #[arg(long)]
    no_prompt: bool,

    /// Report lexical errors and continue with the next line
    #[arg(long)]
    keep_going: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        global: cli.log_level,
        lexer: cli.lexer_log_level,
    };
    if let Err(e) = logging::init(&log_config, cli.log_format) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let config = RunConfig {
        prompt: !cli.no_prompt,
        keep_going: cli.keep_going,
    };

    let result = match &cli.file {
        Some(path) => run_file(path),
        None => run_repl(
            &config,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn lex(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).tokens().collect()
}

fn print_tokens<W: Write>(tokens: &[Token], out: &mut W) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Returns `false` when the file held a lexical error.
fn run_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    info!(target: CLI_TARGET, path = %path.display(), bytes = source.len(), "tokenizing file");

    match lex(&source) {
        Ok(tokens) => {
            print_tokens(&tokens, &mut io::stdout().lock())?;
            Ok(true)
        }
        Err(error) => {
            let name = path.display().to_string();
            eprint!("{}", format_error(&error, &source, Some(&name)));
            Ok(false)
        }
    }
}

/// Returns `false` when the loop stopped on an empty line or a lexical error.
fn run_repl<R: BufRead, W: Write, E: Write>(
    config: &RunConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    loop {
        prompt(config, out, "Enter the source code: ")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        if line.is_empty() {
            writeln!(err, "Error: No input provided.")?;
            return Ok(false);
        }

        match lex(&line) {
            Ok(tokens) => {
                debug!(target: CLI_TARGET, tokens = tokens.len(), "line tokenized");
                print_tokens(&tokens, out)?;
            }
            Err(error) => {
                write!(err, "{}", format_error(&error, &line, None))?;
                if !config.keep_going {
                    return Ok(false);
                }
            }
        }

        prompt(config, out, "Do you want to continue (y/n)? ")?;
        let answer = read_line(&mut input)?;
        match answer.as_deref().and_then(|a| a.trim().chars().next()) {
            Some('y') => continue,
            Some('n') => {
                writeln!(out, "Exiting the program.")?;
                break;
            }
            _ => break,
        }
    }

    Ok(true)
}

fn prompt<W: Write>(config: &RunConfig, out: &mut W, text: &str) -> io::Result<()> {
    if config.prompt {
        write!(out, "{}", text)?;
        out.flush()?;
    }
    Ok(())
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERACTIVE: RunConfig = RunConfig { prompt: true, keep_going: false };

    fn repl(config: RunConfig, input: &str) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = run_repl(&config, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_repl_prints_tokens_and_exits() {
        let (ok, out, err) = repl(INTERACTIVE, "int x = 42;\nn\n");

        assert!(ok);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "Enter the source code: \
             Token Type: KEYWORD, Value: int\n\
             Token Type: IDENTIFIER, Value: x\n\
             Token Type: OPERATOR, Value: =\n\
             Token Type: NUMBER, Value: 42\n\
             Token Type: ENDING, Value: ;\n\
             Do you want to continue (y/n)? Exiting the program.\n"
        );
    }

    #[test]
    fn test_repl_continues_on_yes() {
        let config = RunConfig { prompt: false, keep_going: false };
        let (ok, out, _) = repl(config, "a\ny\n\"s\"\nn\n");

        assert!(ok);
        assert_eq!(
            out,
            "Token Type: IDENTIFIER, Value: a\n\
             Token Type: STRING, Value: s\n\
             Exiting the program.\n"
        );
    }

    #[test]
    fn test_repl_empty_line_fails() {
        let (ok, _, err) = repl(INTERACTIVE, "\n");

        assert!(!ok);
        assert_eq!(err, "Error: No input provided.\n");
    }

    #[test]
    fn test_repl_stops_on_lexical_error() {
        let config = RunConfig { prompt: false, keep_going: false };
        let (ok, out, err) = repl(config, "x = @\ny\nz\n");

        assert!(!ok);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: UnexpectedCharacter\n"));
    }

    #[test]
    fn test_repl_keep_going_after_error() {
        let config = RunConfig { prompt: false, keep_going: true };
        let (ok, out, err) = repl(config, "\"open\ny\nz\n");

        assert!(ok);
        assert_eq!(out, "Token Type: IDENTIFIER, Value: z\n");
        assert!(err.starts_with("Error: UnterminatedString"));
    }

    #[test]
    fn test_repl_end_of_input_stops() {
        let (ok, out, _) = repl(INTERACTIVE, "");

        assert!(ok);
        assert_eq!(out, "Enter the source code: ");
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut input = "abc\r\ndef".as_bytes();

        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("abc"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("def"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
