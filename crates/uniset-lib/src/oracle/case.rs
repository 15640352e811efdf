use std::collections::HashMap;
use std::sync::OnceLock;

use super::CaseClosure;

/// Case closure built from `char::to_lowercase` and `char::to_uppercase`.
///
/// Two characters are equivalent when they lowercase to the same string, so
/// `k`, `K` and KELVIN SIGN form one class. The closure of a character is its
/// class plus its full lowercase and uppercase mappings (`ß` gains `SS`).
/// This is not Unicode case folding: `ß` does not gain `ss`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCaseClosure;

/// Lowercase form -> every character that lowercases to it.
fn classes() -> &'static HashMap<String, Vec<char>> {
    static CLASSES: OnceLock<HashMap<String, Vec<char>>> = OnceLock::new();
    CLASSES.get_or_init(|| {
        let mut classes: HashMap<String, Vec<char>> = HashMap::new();
        for c in (0..=char::MAX as u32).filter_map(char::from_u32) {
            if !(c.is_lowercase() || c.is_uppercase()) && c.to_lowercase().eq([c]) {
                continue;
            }
            classes.entry(c.to_lowercase().collect()).or_default().push(c);
        }
        tracing::trace!(classes = classes.len(), "built case classes");
        classes
    })
}

impl CaseClosure for StdCaseClosure {
    fn code_point_closure(&self, cp: u32) -> Vec<String> {
        let Some(c) = char::from_u32(cp) else {
            return Vec::new();
        };
        let lower: String = c.to_lowercase().collect();
        let upper: String = c.to_uppercase().collect();
        let mut out: Vec<String> = classes()
            .get(&lower)
            .into_iter()
            .flatten()
            .map(|m| m.to_string())
            .collect();
        for form in [lower, upper] {
            if !out.contains(&form) {
                out.push(form);
            }
        }
        out
    }

    fn string_closure(&self, s: &str) -> Vec<String> {
        let mut out = vec![s.to_owned()];
        for form in [s.to_lowercase(), s.to_uppercase()] {
            if !out.contains(&form) {
                out.push(form);
            }
        }
        out
    }
}
