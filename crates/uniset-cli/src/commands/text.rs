//! Whole-text rewrites: count, replace, delete, trim.

use uniset_lib::{CountMethod, SpanCondition, TrimOption};

use super::input::{PatternInput, TextInput};

pub struct CountArgs {
    pub input: PatternInput,
    pub text: TextInput,
    pub condition: SpanCondition,
    pub method: CountMethod,
}

pub fn run_count(args: CountArgs) {
    let set = args.input.build_or_exit();
    let text = args.text.load_or_exit();
    let count = set.spanner().count_in(&text, args.method, args.condition);
    tracing::debug!(count, "counted matches");
    println!("{}", count);
}

pub struct ReplaceArgs {
    pub input: PatternInput,
    pub text: TextInput,
    pub replacement: String,
    pub condition: SpanCondition,
    pub method: CountMethod,
}

pub fn run_replace(args: ReplaceArgs) {
    let set = args.input.build_or_exit();
    let text = args.text.load_or_exit();
    let out = set
        .spanner()
        .replace_from(&text, &args.replacement, args.method, args.condition);
    println!("{}", out);
}

pub struct DeleteArgs {
    pub input: PatternInput,
    pub text: TextInput,
    pub condition: SpanCondition,
}

pub fn run_delete(args: DeleteArgs) {
    let set = args.input.build_or_exit();
    let text = args.text.load_or_exit();
    println!("{}", set.spanner().delete_from(&text, args.condition));
}

pub struct TrimArgs {
    pub input: PatternInput,
    pub text: TextInput,
    pub side: TrimOption,
    pub condition: SpanCondition,
}

pub fn run_trim(args: TrimArgs) {
    let set = args.input.build_or_exit();
    let text = args.text.load_or_exit();
    println!("{}", set.spanner().trim(&text, args.side, args.condition));
}
