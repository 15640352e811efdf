use std::cmp::Ordering;

use uniset_lib::ComparisonStyle;

use super::input::PatternInput;

pub struct CompareArgs {
    pub left: PatternInput,
    pub right: PatternInput,
    pub style: ComparisonStyle,
}

pub fn run(args: CompareArgs) {
    let left = args.left.build_or_exit();
    let right = args.right.build_or_exit();
    let word = match left.compare_with(&right, args.style) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{}", word);
}
