/// The code point of `s` if it is exactly one character long.
///
/// # Examples
/// ```
/// use uniset_core::utils::single_code_point;
/// assert_eq!(single_code_point("a"), Some(0x61));
/// assert_eq!(single_code_point("ab"), None);
/// assert_eq!(single_code_point(""), None);
/// ```
pub fn single_code_point(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    let first = chars.next()?;
    match chars.next() {
        None => Some(first as u32),
        Some(_) => None,
    }
}

/// Whether `s` holds two or more code points.
pub fn is_multi_code_point(s: impl AsRef<str>) -> bool {
    s.as_ref().chars().nth(1).is_some()
}

/// Pattern_White_Space: the characters a pattern may ignore between tokens.
pub fn is_pattern_white_space(cp: u32) -> bool {
    matches!(
        cp,
        0x0009..=0x000D | 0x0020 | 0x0085 | 0x200E | 0x200F | 0x2028 | 0x2029
    )
}
