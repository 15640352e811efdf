//! Sets back to pattern text.

use uniset_core::{MAX_CODE_POINT, utils};

use super::escape;
use crate::UnicodeSet;

impl UnicodeSet {
    /// Shortest-form pattern that parses back to this set.
    ///
    /// A set covering both ends of the code point space with no strings is
    /// written as a complement (`[^a-z]`). With `escape_unprintable`, every
    /// character outside printable ASCII is written as `\uXXXX` or
    /// `\UXXXXXXXX`. Surrogates are always written `\x{DXXX}`, which the
    /// parser never joins into a pair.
    pub fn to_pattern(&self, escape_unprintable: bool) -> String {
        let ranges = self.inversion_list();
        let count = ranges.range_count();
        let mut out = String::from("[");

        let inverted = count >= 2
            && ranges.range_start(0) == 0
            && ranges.range_end(count - 1) == MAX_CODE_POINT
            && !self.has_strings();
        if inverted {
            out.push('^');
            for i in 1..count {
                let start = ranges.range_end(i - 1) + 1;
                let end = ranges.range_start(i) - 1;
                push_range(&mut out, start, end, escape_unprintable);
            }
        } else {
            for range in ranges.iter_ranges() {
                push_range(&mut out, *range.start(), *range.end(), escape_unprintable);
            }
        }

        for s in self.strings() {
            out.push('{');
            for c in s.chars() {
                push_code_point(&mut out, c as u32, escape_unprintable);
            }
            out.push('}');
        }
        out.push(']');
        out
    }
}

fn push_range(out: &mut String, start: u32, end: u32, escape_unprintable: bool) {
    push_code_point(out, start, escape_unprintable);
    if start == end {
        return;
    }
    if end != start + 1 {
        out.push('-');
    }
    push_code_point(out, end, escape_unprintable);
}

fn push_code_point(out: &mut String, cp: u32, escape_unprintable: bool) {
    let printable_ascii = (0x20..=0x7E).contains(&cp);
    if (escape_unprintable && !printable_ascii) || always_escaped(cp) {
        out.push_str(&escape::escape(cp));
        return;
    }
    let Some(c) = char::from_u32(cp) else {
        out.push_str(&escape::escape(cp));
        return;
    };
    if is_syntax(c) || utils::is_pattern_white_space(cp) {
        out.push('\\');
    }
    out.push(c);
}

/// Controls, C1 controls, surrogates and the two noncharacters at the end of the BMP.
fn always_escaped(cp: u32) -> bool {
    matches!(cp, 0x00..=0x1F | 0x7F..=0x9F | 0xD800..=0xDFFF | 0xFFFE | 0xFFFF)
}

fn is_syntax(c: char) -> bool {
    matches!(c, '[' | ']' | '-' | '^' | '&' | '\\' | '{' | '}' | ':' | '$')
}
