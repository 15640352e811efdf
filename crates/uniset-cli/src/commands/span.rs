use uniset_lib::SpanCondition;

use super::input::{PatternInput, TextInput};

pub struct SpanArgs {
    pub input: PatternInput,
    pub text: TextInput,
    pub condition: SpanCondition,
    pub start: Option<usize>,
    pub back: bool,
}

/// Print the span boundary and its element count.
pub fn run(args: SpanArgs) {
    let set = args.input.build_or_exit();
    let text = args.text.load_or_exit();
    let (offset, count) = if args.back {
        let limit = args.start.unwrap_or(text.len());
        check_offset(&text, limit);
        set.span_back_and_count(&text, limit, args.condition)
    } else {
        let start = args.start.unwrap_or(0);
        check_offset(&text, start);
        set.span_and_count(&text, start, args.condition)
    };
    println!("{} {}", offset, count);
}

fn check_offset(text: &str, offset: usize) {
    if !text.is_char_boundary(offset) {
        eprintln!(
            "error: offset {} is not a character boundary in {} bytes of text",
            offset,
            text.len()
        );
        std::process::exit(1);
    }
}
