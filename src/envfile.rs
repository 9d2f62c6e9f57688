//! Line-oriented `KEY=VALUE` environment file reading.
//!
//! The format is deliberately literal: newline-separated pairs, no quoting,
//! no escaping, no interpolation. Blank lines and `#` comments are skipped.

/// Look up the value of `key` in `content`.
///
/// Returns the value of the FIRST matching `KEY=VALUE` line. Files with
/// duplicate keys are ambiguous; first match wins and later lines are
/// ignored.
pub fn lookup<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| {
            let (k, v) = line.split_once('=')?;
            if k == key { Some(v) } else { None }
        })
}
