//! Writes command results to stdout in the format the user picked.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const CHECK: &str = "\u{2713}";
const CROSS: &str = "\u{2717}";
const WARN: &str = "\u{26a0}";
const INFO: &str = "\u{2139}";

/// Stdout writer shared by every command.
///
/// Clones write to the same terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            resolved_format: resolve_format(args.output_format, io::stdout().is_terminal()),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unstyled line. Hidden by `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(CHECK, msg, Style::new().green())
    }

    /// Shown even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.styled(CROSS, msg, Style::new().red()))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(WARN, msg, Style::new().yellow())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(INFO, msg, Style::new().blue())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.style(Style::new().cyan().bold()).to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON; written regardless of `--quiet` since it was asked for.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Stdout carries a single JSON document.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    fn marked(&self, glyph: &str, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.styled(glyph, msg, style))
    }

    fn styled(&self, glyph: &str, msg: &str, style: Style) -> String {
        if self.no_color {
            format!("{glyph} {msg}")
        } else {
            format!("{} {}", glyph.style(style.bold()), msg.style(style))
        }
    }
}

/// `auto` becomes human output on a terminal and plain text when piped.
fn resolve_format(requested: OutputFormat, stdout_is_tty: bool) -> OutputFormat {
    match requested {
        OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}
