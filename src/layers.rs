//! Layer Marker Counting
//!
//! Slicers mark layer starts with comments, in two common styles: a tag such
//! as `;LAYER:12`, or prose such as `; layer change`. Both styles are checked
//! on every line and each one that matches adds to the count, so a line that
//! fits both styles counts twice. The result is a count of markers, not of
//! distinct layers.

use std::sync::LazyLock;

use regex::Regex;

/// `LAYER` opening the comment, then `:` or whitespace.
static LAYER_TAG: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)^LAYER[:\s]"));

/// `layer` as a word of its own, after whitespace.
static LAYER_WORD: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)\slayer\b"));

/// Count layer markers over the whole text.
pub fn count_layers(text: &str) -> usize {
    text.lines().map(layer_marks).sum()
}

/// Markers on one line: 0, 1 or 2.
pub fn layer_marks(line: &str) -> usize {
    usize::from(is_layer_tag(line)) + usize::from(mentions_layer(line))
}

pub fn is_layer_tag(line: &str) -> bool {
    comment(line).is_some_and(|text| matches(&LAYER_TAG, text))
}

pub fn mentions_layer(line: &str) -> bool {
    comment(line).is_some_and(|text| matches(&LAYER_WORD, text))
}

/// Text after the first `;`.
fn comment(line: &str) -> Option<&str> {
    line.split_once(';').map(|(_, text)| text)
}

fn matches(pattern: &LazyLock<Result<Regex, regex::Error>>, text: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(text))
}
