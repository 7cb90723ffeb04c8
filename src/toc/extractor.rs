use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::toc::heading::{anchor_id, HeadingCollection};

lazy_static! {
    // Only bare `<h2>` tags match. Attributed, self-closing and multi-line
    // headings are outside the grammar and pass through untouched.
    static ref HEADING_REGEX: Regex = Regex::new(r"(?i)<(h2)>(.*?)</h2>").unwrap();
}

/// Result of one extraction pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Document with every matched heading rewritten to carry its anchor id
    pub content: String,
    /// Headings in document order
    pub headings: HeadingCollection,
}

/// Rewrite every `<h2>` heading with a `title_{index}` id and collect its text.
///
/// Each call starts a fresh count, so documents never share indices.
/// Nested `<h2>` tags inside a heading mis-pair: the first closing tag ends
/// the match.
pub fn extract_headings(content: &str) -> Extraction {
    let mut headings = HeadingCollection::new();

    let rewritten = HEADING_REGEX.replace_all(content, |caps: &Captures| {
        let tag = &caps[1];
        let text = &caps[2];
        let index = headings.push(text);
        format!(r#"<{tag} id="{}">{text}</{tag}>"#, anchor_id(index))
    });

    Extraction {
        content: rewritten.into_owned(),
        headings,
    }
}
