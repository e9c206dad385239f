//! Turns raw OCR fragments into one readable display string.
//!
//! The pipeline is a fixed, ordered list of pure `&str -> String` passes. Order matters:
//! later passes rely on the exact output of earlier ones, so [`PASSES`] is applied as-is.

pub mod passes;

pub use passes::{PASSES, Pass};

/// Join fragment texts with a single space.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(fragment.as_ref());
    }
    joined
}

/// Apply every pass of [`PASSES`] in order to an already-joined string.
pub fn format_text(joined: &str) -> String {
    PASSES
        .iter()
        .fold(joined.to_string(), |text, pass| (pass.apply)(&text))
}

/// Format OCR fragment texts, in engine order, into a display string.
///
/// Callers handle the empty case themselves (they show a fixed message instead).
pub fn format_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format_text(&join_fragments(fragments))
}
