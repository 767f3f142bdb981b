//! Line Recognizers
//!
//! One function per slicer comment convention. Each looks at a single line
//! and returns the value it carries, or `None` when the line does not carry
//! one. None of them fail.

use std::sync::LazyLock;

use regex::Regex;

const FLAVOR_MARKER: &str = ";FLAVOR:";
const TIME_MARKER: &str = ";TIME:";
const FILAMENT_USED_MARKER: &str = ";filament used:";
const LAYER_HEIGHT_MARKER: &str = ";layer height:";
const ESTIMATED_TIME_MARKER: &str = "; estimated printing time";

/// `1d 2h 3m 4s`, every component optional but kept in that order.
static DURATION: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"(?:(\d+)d\s*)?(?:(\d+)h\s*)?(?:(\d+)m\s*)?(?:(\d+)s)?")
});

/// Cura-style `;FLAVOR:Marlin`: everything after the line's first colon.
pub fn flavor(line: &str) -> Option<&str> {
    if !line.contains(FLAVOR_MARKER) {
        return None;
    }

    let (_, value) = line.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Cura-style `;TIME:6543`, in whole seconds.
pub fn time(line: &str) -> Option<u64> {
    let start = line.find(TIME_MARKER)? + TIME_MARKER.len();
    leading_integer(&line[start..])
}

/// `;Filament used: 1.23m`. The unit is whatever the slicer wrote.
pub fn filament_used(line: &str) -> Option<f64> {
    number_after(line, FILAMENT_USED_MARKER)
}

/// `;Layer height: 0.2`, in millimetres.
pub fn layer_height(line: &str) -> Option<f64> {
    number_after(line, LAYER_HEIGHT_MARKER)
}

/// PrusaSlicer-style `; estimated printing time (normal mode) = 1h 2m 3s`.
pub fn estimated_printing_time(line: &str) -> Option<u64> {
    let start = find_ignore_ascii_case(line, ESTIMATED_TIME_MARKER)? + ESTIMATED_TIME_MARKER.len();
    parse_duration(&line[start..])
}

/// Total seconds of the first `<N>d <N>h <N>m <N>s` group in `text`.
pub fn parse_duration(text: &str) -> Option<u64> {
    let pattern = DURATION.as_ref().ok()?;
    let captures = pattern
        .captures_iter(text)
        .find(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))?;

    [86_400u64, 3_600, 60, 1]
        .into_iter()
        .enumerate()
        .try_fold(0u64, |total, (index, unit)| {
            let count = match captures.get(index + 1) {
                Some(m) => m.as_str().parse::<u64>().ok()?,
                None => 0,
            };
            Some(total.saturating_add(count.saturating_mul(unit)))
        })
}

fn number_after(line: &str, marker: &str) -> Option<f64> {
    let start = find_ignore_ascii_case(line, marker)? + marker.len();
    first_number(&line[start..])
}

/// Byte offset of an ASCII `needle` in `haystack`, ignoring ASCII case.
///
/// The offset is always a char boundary since every matched byte is ASCII.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Leading run of digits after optional whitespace.
fn leading_integer(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// First `123`, `1.5` or `.5` style token anywhere in `text`.
fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    })?;

    let mut end = start;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    text[start..end].parse().ok()
}
