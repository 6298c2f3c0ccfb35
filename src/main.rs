use std::{io::IsTerminal, process::ExitCode};

use clap::{ArgAction, Parser};
use rpncalc::{Context, Diagnostic, config::Limits, error::ErrorCode};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic expressions built from integers, reals,
/// `+`, `-`, `*` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum accepted input length in bytes.
    #[arg(long, value_name = "BYTES", default_value_t = rpncalc::config::DEFAULT_MAX_INPUT)]
    max_input: usize,

    /// Maximum accepted number of tokens.
    #[arg(long, value_name = "COUNT", default_value_t = rpncalc::config::DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// Also prints the packed error code of a failed evaluation.
    #[arg(short, long)]
    code: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Starts an interactive session when
    /// omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let context = Context::new(Limits::new(args.max_input, args.max_tokens));

    match args.expression {
        Some(expression) => {
            if run_once(&context, &expression, args.code) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => match repl(&context, args.code) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to start the interactive session: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(directive_for_verbosity(verbose))
                             }))
                             .with_ansi(false)
                             .with_writer(std::io::stderr)
                             .init();
}

const fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "rpncalc=warn",
        1 => "rpncalc=debug",
        _ => "rpncalc=trace",
    }
}

/// Evaluates one expression, printing the result or the error report.
///
/// # Returns
/// `true` if the expression evaluated successfully.
fn run_once(context: &Context, source: &str, code: bool) -> bool {
    match context.evaluate(source) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(diagnostic) => {
            report(context, source, diagnostic, code);
            false
        },
    }
}

/// Reads expressions line by line until end of input.
///
/// Errors are reported and the session continues. Ctrl-C discards the
/// current line.
fn repl(context: &Context, code: bool) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                run_once(context, &line, code);
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn report(context: &Context, source: &str, diagnostic: Diagnostic, code: bool) {
    let report = context.explain(source, diagnostic);

    if std::io::stderr().is_terminal() {
        eprintln!("\x1b[31merror:\x1b[0m {report}");
    } else {
        eprintln!("error: {report}");
    }

    if let Some(offset) = diagnostic.offset()
       && let Some((line, caret)) = mark(source, offset, report.width())
    {
        eprintln!("{line}");
        eprintln!("{caret}");
    }

    if code {
        match ErrorCode::try_from(diagnostic) {
            Ok(error_code) => eprintln!("code: {error_code}"),
            Err(e) => eprintln!("code: {e}"),
        }
    }
}

/// Finds the source line containing `offset` and builds a caret line that
/// marks `width` characters starting at it.
///
/// An offset equal to the source length marks the position just past the
/// last character.
///
/// # Returns
/// - `Some((line, caret))`: The line's text and the marker beneath it.
/// - `None`: If `offset` is past the end of `source` or not on a character
///   boundary.
fn mark(source: &str, offset: usize, width: usize) -> Option<(&str, String)> {
    let before = source.get(..offset)?;
    let start = before.rfind('\n').map_or(0, |i| i + 1);
    let end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);

    let column = source[start..offset].chars().count();
    let caret = format!("{}{}", " ".repeat(column), "^".repeat(width.max(1)));

    Some((&source[start..end], caret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "rpncalc=warn");
        assert_eq!(directive_for_verbosity(1), "rpncalc=debug");
        assert_eq!(directive_for_verbosity(2), "rpncalc=trace");
        assert_eq!(directive_for_verbosity(9), "rpncalc=trace");
    }

    #[test]
    fn mark_points_at_offset() {
        let (line, caret) = mark("1 + (2 * 3", 4, 1).unwrap();
        assert_eq!(line, "1 + (2 * 3");
        assert_eq!(caret, "    ^");
    }

    #[test]
    fn mark_spans_width() {
        let (_, caret) = mark("1 + 12.5", 4, 4).unwrap();
        assert_eq!(caret, "    ^^^^");
    }

    #[test]
    fn mark_uses_line_of_offset() {
        let (line, caret) = mark("1 +\n2 * ", 6, 1).unwrap();
        assert_eq!(line, "2 * ");
        assert_eq!(caret, "  ^");
    }

    #[test]
    fn mark_counts_characters() {
        let (_, caret) = mark("é + x", 5, 1).unwrap();
        assert_eq!(caret, "    ^");
    }

    #[test]
    fn mark_rejects_bad_offsets() {
        assert!(mark("1 +", 9, 1).is_none());
        assert!(mark("é", 1, 1).is_none());
        assert!(mark("", 0, 1).is_some());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["rpncalc", "--max-tokens", "8", "-c", "-vv", "1 + 2"]).unwrap();
        assert_eq!(args.max_tokens, 8);
        assert_eq!(args.max_input, rpncalc::config::DEFAULT_MAX_INPUT);
        assert!(args.code);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.expression.as_deref(), Some("1 + 2"));
    }

    #[test]
    fn args_accept_leading_sign() {
        let args = Args::try_parse_from(["rpncalc", "-2 * 3"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("-2 * 3"));
    }
}
