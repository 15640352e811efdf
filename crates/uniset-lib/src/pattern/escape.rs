//! Backslash escapes.

use uniset_core::MAX_CODE_POINT;

/// Decode the escape body that follows a backslash.
///
/// Returns the code point and the number of bytes consumed after the
/// backslash, or `None` if the escape is malformed. A `\uD8xx` lead surrogate
/// directly followed by a `\uDCxx` trail surrogate decodes to one
/// supplementary code point; other spellings such as `\x{D800}` never pair.
/// Unknown escapes stand for the escaped character itself.
pub(crate) fn unescape(text: &str) -> Option<(u32, usize)> {
    let (cp, len) = unescape_one(text)?;
    if text.starts_with('u')
        && (0xD800..=0xDBFF).contains(&cp)
        && text[len..].starts_with("\\u")
        && let Some((trail, trail_len)) = unescape_one(&text[len + 1..])
        && (0xDC00..=0xDFFF).contains(&trail)
    {
        let combined = 0x10000 + ((cp - 0xD800) << 10) + (trail - 0xDC00);
        return Some((combined, len + 1 + trail_len));
    }
    Some((cp, len))
}

fn unescape_one(text: &str) -> Option<(u32, usize)> {
    let c = text.chars().next()?;
    let body = &text[c.len_utf8()..];
    let (cp, body_len) = match c {
        'u' => (hex_exact(body, 4)?, 4),
        'U' => (hex_exact(body, 8)?, 8),
        'x' => match body.strip_prefix('{') {
            Some(inner) => {
                let close = inner.find('}')?;
                let digits = &inner[..close];
                if digits.is_empty() || digits.len() > 8 {
                    return None;
                }
                (hex_exact(digits, digits.len())?, close + 2)
            }
            None => {
                let len = body
                    .bytes()
                    .take(2)
                    .take_while(u8::is_ascii_hexdigit)
                    .count();
                if len == 0 {
                    return None;
                }
                (hex_exact(body, len)?, len)
            }
        },
        'c' => {
            let x = body.chars().next()?;
            ((x as u32) & 0x1F, x.len_utf8())
        }
        'a' => (0x07, 0),
        'b' => (0x08, 0),
        't' => (0x09, 0),
        'n' => (0x0A, 0),
        'v' => (0x0B, 0),
        'f' => (0x0C, 0),
        'r' => (0x0D, 0),
        'e' => (0x1B, 0),
        other => (other as u32, 0),
    };
    if cp > MAX_CODE_POINT {
        return None;
    }
    Some((cp, c.len_utf8() + body_len))
}

/// Parse exactly `len` hex digits at the start of `s`.
fn hex_exact(s: &str, len: usize) -> Option<u32> {
    let digits = s.get(..len)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// `\uXXXX` inside the BMP, `\UXXXXXXXX` beyond it.
///
/// Surrogates are written `\x{D800}` so that a lead followed by a trail
/// reads back as two code points.
pub(crate) fn escape(cp: u32) -> String {
    if (0xD800..=0xDFFF).contains(&cp) {
        format!("\\x{{{cp:04X}}}")
    } else if cp <= 0xFFFF {
        format!("\\u{cp:04X}")
    } else {
        format!("\\U{cp:08X}")
    }
}
