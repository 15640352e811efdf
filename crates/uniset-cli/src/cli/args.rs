//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose as needed.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Set pattern (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Set pattern, e.g. '[a-z{ch}]'")
}

/// Text file to scan (positional, `-` for stdin).
pub fn text_path_arg() -> Arg {
    Arg::new("text_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Text file to scan ('-' for stdin)")
}

/// Inline text (-t/--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("text_path")
        .help("Inline text to scan")
}

/// Variable definitions (-D/--define NAME=TEXT).
pub fn define_arg() -> Arg {
    Arg::new("define")
        .short('D')
        .long("define")
        .value_name("NAME=TEXT")
        .action(ArgAction::Append)
        .help("Define a $NAME variable for the pattern")
}

/// Case-insensitive parsing (-i).
pub fn case_insensitive_arg() -> Arg {
    Arg::new("case_insensitive")
        .short('i')
        .long("case-insensitive")
        .action(ArgAction::SetTrue)
        .help("Close bracketed sets over case")
}

/// Keep white space in patterns significant (--no-ignore-space).
pub fn no_ignore_space_arg() -> Arg {
    Arg::new("no_ignore_space")
        .long("no-ignore-space")
        .action(ArgAction::SetTrue)
        .help("Treat white space in the pattern as literal")
}

/// Span condition (--condition).
pub fn condition_arg() -> Arg {
    Arg::new("condition")
        .short('c')
        .long("condition")
        .value_name("COND")
        .default_value("simple")
        .value_parser(["simple", "contained", "not-contained"])
        .help("How spans decide to continue")
}

/// Count method (--method).
pub fn method_arg() -> Arg {
    Arg::new("method")
        .short('m')
        .long("method")
        .value_name("METHOD")
        .default_value("min-elements")
        .value_parser(["whole-span", "min-elements"])
        .help("What counts as one match")
}

/// Trim side (--side).
pub fn side_arg() -> Arg {
    Arg::new("side")
        .long("side")
        .value_name("SIDE")
        .default_value("both")
        .value_parser(["leading", "trailing", "both"])
        .help("Which ends to trim")
}

/// Comparison style (--style).
pub fn style_arg() -> Arg {
    Arg::new("style")
        .long("style")
        .value_name("STYLE")
        .default_value("shorter-first")
        .value_parser(["shorter-first", "longer-first", "lexicographic"])
        .help("How sets are ordered")
}

/// Second pattern for comparisons (--with).
pub fn with_arg() -> Arg {
    Arg::new("with")
        .short('w')
        .long("with")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern to compare against")
}

/// Replacement text (-r/--replacement).
pub fn replacement_arg() -> Arg {
    Arg::new("replacement")
        .short('r')
        .long("replacement")
        .value_name("TEXT")
        .required(true)
        .help("Text written in place of each match")
}

/// Byte offset to start scanning from (--start).
pub fn start_arg() -> Arg {
    Arg::new("start")
        .long("start")
        .value_name("OFFSET")
        .value_parser(value_parser!(usize))
        .help("Byte offset to scan from (the end of the text with --back)")
}

/// Scan backward (--back).
pub fn back_arg() -> Arg {
    Arg::new("back")
        .long("back")
        .action(ArgAction::SetTrue)
        .help("Scan backward from the offset")
}

/// Escape non-printable code points (--escape).
pub fn escape_arg() -> Arg {
    Arg::new("escape")
        .long("escape")
        .action(ArgAction::SetTrue)
        .help("Write non-printable code points as \\u escapes")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the set as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Log parser activity (-vv for more)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
