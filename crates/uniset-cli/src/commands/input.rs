use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use uniset_lib::oracle::MapSymbolTable;
use uniset_lib::{Error, ParseOptions, PatternParser, UnicodeSet};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{path}': {source}")]
    File { path: PathBuf, source: io::Error },
    #[error("text is required: use positional argument or -t/--text")]
    MissingText,
    #[error("invalid definition '{0}': expected NAME=TEXT")]
    Definition(String),
}

/// Pattern text plus everything needed to parse it.
pub struct PatternInput {
    pub pattern: String,
    pub defines: Vec<String>,
    pub options: ParseOptions,
    pub color: bool,
}

impl PatternInput {
    /// Parse the pattern, or report why not and exit.
    pub fn build_or_exit(&self) -> UnicodeSet {
        let symbols = match symbol_table(&self.defines) {
            Ok(table) => table,
            Err(e) => exit_with(&e),
        };
        let mut parser = PatternParser::new(&self.pattern).with_options(self.options);
        if let Some(symbols) = &symbols {
            parser = parser.with_symbols(symbols);
        }
        match parser.parse() {
            Ok(set) => set,
            Err(Error::PatternSyntax(err)) => {
                eprint!("{}", err.render(&self.pattern, self.color));
                std::process::exit(1);
            }
            Err(e) => exit_with(&e),
        }
    }
}

/// Where scanned text comes from.
pub struct TextInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

impl TextInput {
    pub fn load_or_exit(&self) -> String {
        match load_text(self.path.as_deref(), self.text.as_deref()) {
            Ok(text) => text,
            Err(e) => exit_with(&e),
        }
    }
}

/// Read inline text, a file, or stdin (`-`).
///
/// One trailing line ending is dropped from file and stdin input.
pub fn load_text(path: Option<&Path>, text: Option<&str>) -> Result<String, InputError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    let Some(path) = path else {
        return Err(InputError::MissingText);
    };
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_owned(),
            source,
        })?
    };
    Ok(strip_line_ending(content))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Build a symbol table from `NAME=TEXT` definitions, if any were given.
pub fn symbol_table(defines: &[String]) -> Result<Option<MapSymbolTable>, InputError> {
    if defines.is_empty() {
        return Ok(None);
    }
    let mut table = MapSymbolTable::new();
    for define in defines {
        let Some((name, text)) = define.split_once('=') else {
            return Err(InputError::Definition(define.clone()));
        };
        if name.is_empty() {
            return Err(InputError::Definition(define.clone()));
        }
        table.define(name, text);
    }
    Ok(Some(table))
}

pub fn exit_with(err: &dyn std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
