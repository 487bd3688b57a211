//! Command line parsing and the non-interactive commands.
//!
//! Supports:
//! - `html <src>` → print overlay markup
//! - `tokens <src>` → print one `kind<TAB>text` line per token
//! - `view <vertex-src> <fragment-src>` → open the two-pane viewer
//! - `help`, `-h`, `--help` → usage
//!
//! A source is `@@` (clipboard), `-` (stdin), `@path` or `path`.

use crate::engine::config::Config;
use crate::engine::error::CliError;
use crate::glsl::{tokenize, Token};
use crate::highlight::render_with;
use crate::input::{self, ShaderSource};
use std::io::Write;

pub const USAGE: &str = "\
Usage: shadepad <command> [options]

Commands:
  html <src>                  Print highlighted HTML markup
  tokens <src>                Print the token stream, one token per line
  view <vertex> <fragment>    Browse both shaders side by side (q to quit)
  help                        Show this message

Sources:
  path or @path               Read a file
  @@                          Read the clipboard
  -                           Read standard input

Options:
  --tab-width <n>             Columns per tab stop in the viewer (default 2)
  --class-prefix <prefix>     Class name prefix in markup (default token-)
  --no-trailing-newline       Do not append a newline after the markup
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Html(ShaderSource),
    Tokens(ShaderSource),
    View {
        vertex: ShaderSource,
        fragment: ShaderSource,
    },
    Help,
}

/// A parsed command line: what to do and with which settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub config: Config,
}

/// Parse command line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut config = Config::default();
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Invocation {
                    command: Command::Help,
                    config,
                })
            }
            "--tab-width" => {
                let value = iter.next().ok_or(CliError::MissingArgument("tab width"))?;
                config.view.tab_width = value
                    .parse()
                    .map_err(|_| CliError::InvalidOption(format!("--tab-width {}", value)))?;
            }
            "--class-prefix" => {
                let value = iter.next().ok_or(CliError::MissingArgument("class prefix"))?;
                config.highlight.class_prefix = value.clone();
            }
            "--no-trailing-newline" => config.highlight.trailing_newline = false,
            other if other.starts_with("--") => {
                return Err(CliError::InvalidOption(other.to_string()));
            }
            other => positional.push(other),
        }
    }

    let Some((name, rest)) = positional.split_first() else {
        return Ok(Invocation {
            command: Command::Help,
            config,
        });
    };

    let command = match *name {
        "help" => {
            expect_no_more(rest, 0)?;
            Command::Help
        }
        "html" => {
            expect_no_more(rest, 1)?;
            Command::Html(source_arg(rest.first(), "shader source")?)
        }
        "tokens" => {
            expect_no_more(rest, 1)?;
            Command::Tokens(source_arg(rest.first(), "shader source")?)
        }
        "view" => {
            expect_no_more(rest, 2)?;
            Command::View {
                vertex: source_arg(rest.first(), "vertex shader source")?,
                fragment: source_arg(rest.get(1), "fragment shader source")?,
            }
        }
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    Ok(Invocation { command, config })
}

fn source_arg(arg: Option<&&str>, what: &'static str) -> Result<ShaderSource, CliError> {
    arg.and_then(|a| ShaderSource::parse(a))
        .ok_or(CliError::MissingArgument(what))
}

fn expect_no_more(rest: &[&str], allowed: usize) -> Result<(), CliError> {
    match rest.get(allowed) {
        Some(extra) => Err(CliError::UnexpectedArgument(extra.to_string())),
        None => Ok(()),
    }
}

/// One `kind<TAB>text` line per token, text shown with Rust escapes.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}\t{:?}\n", t.kind, t.text))
        .collect()
}

/// Run a non-interactive command, writing its output to `out`.
///
/// `View` is interactive and handled by the terminal manager; it is
/// rejected here.
pub fn run_batch<W: Write>(invocation: &Invocation, out: &mut W) -> Result<(), CliError> {
    match &invocation.command {
        Command::Help => out.write_all(USAGE.as_bytes())?,
        Command::Html(source) => {
            let shader = input::load(source)?;
            let tokens = tokenize(&shader.text);
            out.write_all(render_with(&tokens, &invocation.config.highlight).as_bytes())?;
        }
        Command::Tokens(source) => {
            let shader = input::load(source)?;
            out.write_all(format_tokens(&tokenize(&shader.text)).as_bytes())?;
        }
        Command::View { .. } => return Err(CliError::UnknownCommand("view".to_string())),
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(list: &[&str]) -> Result<Invocation, CliError> {
        parse_args(&args(list))
    }

    #[test]
    fn test_no_arguments_is_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_help_variants() {
        assert_eq!(parse(&["help"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["-h"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["html", "--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_parse_html_file() {
        let invocation = parse(&["html", "@shader.frag"]).unwrap();
        assert_eq!(
            invocation.command,
            Command::Html(ShaderSource::File(PathBuf::from("shader.frag")))
        );
        assert_eq!(invocation.config, Config::default());
    }

    #[test]
    fn test_parse_tokens_stdin() {
        assert_eq!(
            parse(&["tokens", "-"]).unwrap().command,
            Command::Tokens(ShaderSource::Stdin)
        );
    }

    #[test]
    fn test_parse_view_with_clipboard() {
        assert_eq!(
            parse(&["view", "a.vert", "@@"]).unwrap().command,
            Command::View {
                vertex: ShaderSource::File(PathBuf::from("a.vert")),
                fragment: ShaderSource::Clipboard,
            }
        );
    }

    #[test]
    fn test_parse_options() {
        let invocation = parse(&[
            "--tab-width",
            "4",
            "html",
            "x.frag",
            "--class-prefix",
            "hl-",
            "--no-trailing-newline",
        ])
        .unwrap();
        assert_eq!(invocation.config.view.tab_width, 4);
        assert_eq!(invocation.config.highlight.class_prefix, "hl-");
        assert!(!invocation.config.highlight.trailing_newline);
    }

    #[test]
    fn test_invalid_tab_width() {
        assert!(matches!(
            parse(&["--tab-width", "wide", "html", "x"]),
            Err(CliError::InvalidOption(_))
        ));
        assert!(matches!(
            parse(&["html", "x", "--tab-width"]),
            Err(CliError::MissingArgument("tab width"))
        ));
    }

    #[test]
    fn test_unknown_option() {
        assert!(matches!(
            parse(&["html", "x", "--color"]),
            Err(CliError::InvalidOption(ref o)) if o == "--color"
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse(&["compile", "x"]),
            Err(CliError::UnknownCommand(ref c)) if c == "compile"
        ));
    }

    #[test]
    fn test_missing_sources() {
        assert!(matches!(
            parse(&["html"]),
            Err(CliError::MissingArgument("shader source"))
        ));
        assert!(matches!(
            parse(&["view", "a.vert"]),
            Err(CliError::MissingArgument("fragment shader source"))
        ));
        assert!(matches!(
            parse(&["tokens", "@"]),
            Err(CliError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_extra_argument() {
        assert!(matches!(
            parse(&["html", "a", "b"]),
            Err(CliError::UnexpectedArgument(ref a)) if a == "b"
        ));
    }

    #[test]
    fn test_format_tokens() {
        let listing = format_tokens(&tokenize("x = \"a\";\n"));
        assert_eq!(
            listing,
            "identifier\t\"x\"\nwhitespace\t\" \"\noperator\t\"=\"\nwhitespace\t\" \"\n\
             string\t\"\\\"a\\\"\"\npunctuation\t\";\"\nwhitespace\t\"\\n\"\n"
        );
    }

    #[test]
    fn test_run_batch_help() {
        let mut out = Vec::new();
        run_batch(&parse(&["help"]).unwrap(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), USAGE);
    }

    #[test]
    fn test_run_batch_missing_file() {
        let mut out = Vec::new();
        let result = run_batch(&parse(&["html", "/nonexistent/x.frag"]).unwrap(), &mut out);
        assert!(matches!(result, Err(CliError::Load(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_batch_rejects_view() {
        let mut out = Vec::new();
        let result = run_batch(&parse(&["view", "a", "b"]).unwrap(), &mut out);
        assert!(result.is_err());
    }
}
