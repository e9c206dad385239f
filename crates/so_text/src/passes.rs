//! Ordered formatting passes.
//!
//! "Wide" below means any code point outside U+0001..U+007E, which stands in for
//! Japanese/CJK script.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_AFTER_WIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\x01-\x7E]) ").expect("valid pattern"));

static SPACE_BEFORE_WIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([^\x01-\x7E])").expect("valid pattern"));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?([。．.!?！？、,\n]) ?").expect("valid pattern"));

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid pattern"));

static LINE_EDGE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ +| +$").expect("valid pattern"));

// Unicode White_Space plus the ASCII information separators.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("valid pattern"));

/// A named formatting pass.
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).finish()
    }
}

/// Passes applied after joining, in order.
pub const PASSES: [Pass; 7] = [
    Pass {
        name: "remove_space_after_wide",
        apply: remove_space_after_wide,
    },
    Pass {
        name: "remove_space_before_wide",
        apply: remove_space_before_wide,
    },
    Pass {
        name: "break_after_punctuation",
        apply: break_after_punctuation,
    },
    Pass {
        name: "collapse_newlines",
        apply: collapse_newlines,
    },
    Pass {
        name: "trim_lines",
        apply: trim_lines,
    },
    Pass {
        name: "collapse_whitespace",
        apply: collapse_whitespace,
    },
    Pass {
        name: "trim_text",
        apply: trim_text,
    },
];

pub fn remove_space_after_wide(text: &str) -> String {
    SPACE_AFTER_WIDE.replace_all(text, "${1}").into_owned()
}

pub fn remove_space_before_wide(text: &str) -> String {
    SPACE_BEFORE_WIDE.replace_all(text, "${1}").into_owned()
}

/// Put a newline after every sentence/clause mark, eating one space on either side.
pub fn break_after_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "${1}\n").into_owned()
}

pub fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUN.replace_all(text, "\n").into_owned()
}

/// Strip spaces at the start and end of every line.
pub fn trim_lines(text: &str) -> String {
    LINE_EDGE_SPACES.replace_all(text, "").into_owned()
}

/// Collapse every whitespace run, newlines included, into one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

pub fn trim_text(text: &str) -> String {
    text.trim_matches(is_ocr_whitespace).to_string()
}

#[inline]
fn is_ocr_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
