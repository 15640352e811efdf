use super::input::PatternInput;

pub struct CheckArgs {
    pub input: PatternInput,
}

pub fn run(args: CheckArgs) {
    if args.input.pattern.is_empty() {
        eprintln!("error: pattern cannot be empty");
        std::process::exit(1);
    }
    args.input.build_or_exit();
}
