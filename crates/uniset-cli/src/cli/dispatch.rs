//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors for each command
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use uniset_lib::{ComparisonStyle, CountMethod, ParseOptions, SpanCondition, TrimOption};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compare::CompareArgs;
use crate::commands::input::{PatternInput, TextInput};
use crate::commands::show::ShowArgs;
use crate::commands::span::SpanArgs;
use crate::commands::text::{CountArgs, DeleteArgs, ReplaceArgs, TrimArgs};

/// Pattern args shared by every command.
pub struct PatternParams {
    pub pattern: String,
    pub defines: Vec<String>,
    pub case_insensitive: bool,
    pub ignore_space: bool,
    pub color: ColorChoice,
}

impl PatternParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            defines: m
                .get_many::<String>("define")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            case_insensitive: m.get_flag("case_insensitive"),
            ignore_space: !m.get_flag("no_ignore_space"),
            color: parse_color(m),
        }
    }

    fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_ignore_space(self.ignore_space)
            .with_case_insensitive(self.case_insensitive)
    }

    /// Same settings, different pattern text.
    fn with_pattern(&self, pattern: String) -> Self {
        Self {
            pattern,
            defines: self.defines.clone(),
            ..*self
        }
    }
}

impl From<PatternParams> for PatternInput {
    fn from(p: PatternParams) -> Self {
        Self {
            options: p.options(),
            color: p.color.should_colorize(),
            pattern: p.pattern,
            defines: p.defines,
        }
    }
}

/// Text input args.
pub struct TextParams {
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
}

impl TextParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text_path: m.get_one::<PathBuf>("text_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
        }
    }
}

impl From<TextParams> for TextInput {
    fn from(p: TextParams) -> Self {
        Self {
            path: p.text_path,
            text: p.text,
        }
    }
}

pub struct CheckParams {
    pub pattern: PatternParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.pattern.into(),
        }
    }
}

pub struct ShowParams {
    pub pattern: PatternParams,
    pub escape: bool,
    pub json: bool,
}

impl ShowParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            escape: m.get_flag("escape"),
            json: m.get_flag("json"),
        }
    }
}

impl From<ShowParams> for ShowArgs {
    fn from(p: ShowParams) -> Self {
        Self {
            input: p.pattern.into(),
            escape: p.escape,
            json: p.json,
        }
    }
}

pub struct CompareParams {
    pub pattern: PatternParams,
    pub with: String,
    pub style: ComparisonStyle,
}

impl CompareParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            with: m.get_one::<String>("with").cloned().unwrap_or_default(),
            style: parse_style(m),
        }
    }
}

impl From<CompareParams> for CompareArgs {
    fn from(p: CompareParams) -> Self {
        let right = p.pattern.with_pattern(p.with);
        Self {
            left: p.pattern.into(),
            right: right.into(),
            style: p.style,
        }
    }
}

pub struct SpanParams {
    pub pattern: PatternParams,
    pub text: TextParams,
    pub condition: SpanCondition,
    pub start: Option<usize>,
    pub back: bool,
}

impl SpanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            text: TextParams::from_matches(m),
            condition: parse_condition(m),
            start: m.get_one::<usize>("start").copied(),
            back: m.get_flag("back"),
        }
    }
}

impl From<SpanParams> for SpanArgs {
    fn from(p: SpanParams) -> Self {
        Self {
            input: p.pattern.into(),
            text: p.text.into(),
            condition: p.condition,
            start: p.start,
            back: p.back,
        }
    }
}

pub struct CountParams {
    pub pattern: PatternParams,
    pub text: TextParams,
    pub condition: SpanCondition,
    pub method: CountMethod,
}

impl CountParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            text: TextParams::from_matches(m),
            condition: parse_condition(m),
            method: parse_method(m),
        }
    }
}

impl From<CountParams> for CountArgs {
    fn from(p: CountParams) -> Self {
        Self {
            input: p.pattern.into(),
            text: p.text.into(),
            condition: p.condition,
            method: p.method,
        }
    }
}

pub struct ReplaceParams {
    pub pattern: PatternParams,
    pub text: TextParams,
    pub replacement: String,
    pub condition: SpanCondition,
    pub method: CountMethod,
}

impl ReplaceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            text: TextParams::from_matches(m),
            replacement: m.get_one::<String>("replacement").cloned().unwrap_or_default(),
            condition: parse_condition(m),
            method: parse_method(m),
        }
    }
}

impl From<ReplaceParams> for ReplaceArgs {
    fn from(p: ReplaceParams) -> Self {
        Self {
            input: p.pattern.into(),
            text: p.text.into(),
            replacement: p.replacement,
            condition: p.condition,
            method: p.method,
        }
    }
}

pub struct DeleteParams {
    pub pattern: PatternParams,
    pub text: TextParams,
    pub condition: SpanCondition,
}

impl DeleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            text: TextParams::from_matches(m),
            condition: parse_condition(m),
        }
    }
}

impl From<DeleteParams> for DeleteArgs {
    fn from(p: DeleteParams) -> Self {
        Self {
            input: p.pattern.into(),
            text: p.text.into(),
            condition: p.condition,
        }
    }
}

pub struct TrimParams {
    pub pattern: PatternParams,
    pub text: TextParams,
    pub side: TrimOption,
    pub condition: SpanCondition,
}

impl TrimParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            text: TextParams::from_matches(m),
            side: parse_side(m),
            condition: parse_condition(m),
        }
    }
}

impl From<TrimParams> for TrimArgs {
    fn from(p: TrimParams) -> Self {
        Self {
            input: p.pattern.into(),
            text: p.text.into(),
            side: p.side,
            condition: p.condition,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_condition(m: &ArgMatches) -> SpanCondition {
    match m.get_one::<String>("condition").map(|s| s.as_str()) {
        Some("contained") => SpanCondition::Contained,
        Some("not-contained") => SpanCondition::NotContained,
        _ => SpanCondition::Simple,
    }
}

fn parse_method(m: &ArgMatches) -> CountMethod {
    match m.get_one::<String>("method").map(|s| s.as_str()) {
        Some("whole-span") => CountMethod::WholeSpan,
        _ => CountMethod::MinElements,
    }
}

fn parse_side(m: &ArgMatches) -> TrimOption {
    match m.get_one::<String>("side").map(|s| s.as_str()) {
        Some("leading") => TrimOption::Leading,
        Some("trailing") => TrimOption::Trailing,
        _ => TrimOption::Both,
    }
}

fn parse_style(m: &ArgMatches) -> ComparisonStyle {
    match m.get_one::<String>("style").map(|s| s.as_str()) {
        Some("longer-first") => ComparisonStyle::LongerFirst,
        Some("lexicographic") => ComparisonStyle::Lexicographic,
        _ => ComparisonStyle::ShorterFirst,
    }
}
