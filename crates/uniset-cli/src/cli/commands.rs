//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the args every pattern-reading command accepts.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(define_arg())
        .arg(case_insensitive_arg())
        .arg(no_ignore_space_arg())
        .arg(color_arg())
}

/// Add text input args.
fn with_text_args(cmd: Command) -> Command {
    cmd.arg(text_path_arg()).arg(text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("uniset")
        .about("Unicode sets of code points and strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(show_command())
        .subcommand(compare_command())
        .subcommand(span_command())
        .subcommand(count_command())
        .subcommand(replace_command())
        .subcommand(delete_command())
        .subcommand(trim_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage("  uniset check <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  uniset check '[a-z]'                 # silent on success
  uniset check '[z-a]'                 # error with position
  uniset check -D 'v=[a-c]' '[$v x]'   # with a variable"#,
        );
    with_pattern_args(cmd)
}

/// Print the canonical form of a set.
pub fn show_command() -> Command {
    let cmd = Command::new("show")
        .about("Print the canonical pattern of a set")
        .override_usage(
            "\
  uniset show <PATTERN>
  uniset show <PATTERN> --json",
        )
        .after_help(
            r#"EXAMPLES:
  uniset show '[c a b]'                # [a-c]
  uniset show '[\u0000-\u001F]' --escape
  uniset show -i '[k]'                 # [KkK]
  uniset show '[a-c{ch}]' --json       # ranges and strings"#,
        )
        .arg(escape_arg())
        .arg(json_arg());
    with_pattern_args(cmd)
}

/// Order two sets.
pub fn compare_command() -> Command {
    let cmd = Command::new("compare")
        .about("Order two sets")
        .override_usage("  uniset compare <PATTERN> --with <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  uniset compare '[a]' --with '[a-c]'                    # less
  uniset compare '[a]' --with '[a-c]' --style lexicographic"#,
        )
        .arg(with_arg())
        .arg(style_arg());
    with_pattern_args(cmd)
}

/// Span text from an offset.
pub fn span_command() -> Command {
    let cmd = Command::new("span")
        .about("Measure the span of a set in text")
        .override_usage(
            "\
  uniset span <PATTERN> <FILE>
  uniset span <PATTERN> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  uniset span '[a-z]' -t 'abc123'                  # 3 3
  uniset span '[a{ab}]' -t 'aab' -c contained      # 3 2
  uniset span '[0-9]' -t 'abc123' --back           # 3 3"#,
        )
        .arg(condition_arg())
        .arg(start_arg())
        .arg(back_arg());
    with_text_args(with_pattern_args(cmd))
}

/// Count matches in text.
pub fn count_command() -> Command {
    let cmd = Command::new("count")
        .about("Count matches of a set in text")
        .override_usage(
            "\
  uniset count <PATTERN> <FILE>
  uniset count <PATTERN> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  uniset count '[a-z]' -t 'ab 12 cd'                 # 4
  uniset count '[a-z]' -t 'ab 12 cd' -m whole-span   # 2"#,
        )
        .arg(condition_arg())
        .arg(method_arg());
    with_text_args(with_pattern_args(cmd))
}

/// Replace matches in text.
pub fn replace_command() -> Command {
    let cmd = Command::new("replace")
        .about("Replace matches of a set in text")
        .override_usage(
            "\
  uniset replace <PATTERN> <FILE> -r <TEXT>
  uniset replace <PATTERN> -t <TEXT> -r <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  uniset replace '[0-9]' -t '12ab34' -r '#' -m whole-span   # #ab#
  uniset replace '[0-9]' -t '12ab34' -r '#'                 # ##ab##"#,
        )
        .arg(replacement_arg())
        .arg(condition_arg())
        .arg(method_arg());
    with_text_args(with_pattern_args(cmd))
}

/// Delete matches from text.
pub fn delete_command() -> Command {
    let cmd = Command::new("delete")
        .about("Delete matches of a set from text")
        .override_usage(
            "\
  uniset delete <PATTERN> <FILE>
  uniset delete <PATTERN> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  uniset delete '[0-9]' -t 'a1b2'                       # ab
  uniset delete '[0-9]' -t 'a1b2' -c not-contained      # 12"#,
        )
        .arg(condition_arg());
    with_text_args(with_pattern_args(cmd))
}

/// Trim matches from the ends of text.
pub fn trim_command() -> Command {
    let cmd = Command::new("trim")
        .about("Trim matches of a set from the ends of text")
        .override_usage(
            "\
  uniset trim <PATTERN> <FILE>
  uniset trim <PATTERN> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  uniset trim '[\ ]' -t '  ab  '                 # ab
  uniset trim '[\ ]' -t '  ab  ' --side leading  # 'ab  '"#,
        )
        .arg(side_arg())
        .arg(condition_arg());
    with_text_args(with_pattern_args(cmd))
}
