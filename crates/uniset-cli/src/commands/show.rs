use serde::Serialize;
use uniset_lib::UnicodeSet;

use super::input::PatternInput;

pub struct ShowArgs {
    pub input: PatternInput,
    pub escape: bool,
    pub json: bool,
}

pub fn run(args: ShowArgs) {
    let set = args.input.build_or_exit();
    if args.json {
        match serde_json::to_string_pretty(&ShowReport::new(&set, args.escape)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }
    println!("{}", set.to_pattern(args.escape));
}

/// JSON view of a set.
#[derive(Debug, Serialize)]
pub struct ShowReport<'a> {
    pub pattern: String,
    pub size: usize,
    pub ranges: Vec<[u32; 2]>,
    pub strings: Vec<&'a str>,
}

impl<'a> ShowReport<'a> {
    pub fn new(set: &'a UnicodeSet, escape: bool) -> Self {
        Self {
            pattern: set.to_pattern(escape),
            size: set.len(),
            ranges: set.ranges().map(|r| [*r.start(), *r.end()]).collect(),
            strings: set.strings().collect(),
        }
    }
}
