use serde::Serialize;

/// A single heading found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Position of the heading in the document, starting at 0
    pub index: usize,
    /// Inner markup of the heading, exactly as it appeared in the source
    pub text: String,
}

impl Heading {
    /// Anchor identifier shared by the heading id and the TOC link
    pub fn anchor(&self) -> String {
        anchor_id(self.index)
    }
}

/// Build the anchor identifier for a heading index
pub fn anchor_id(index: usize) -> String {
    format!("{}{}", super::ANCHOR_PREFIX, index)
}

/// Headings of one document, in document order.
///
/// Only the extractor appends to a collection, so indices are always
/// contiguous and match the position of each heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeadingCollection {
    headings: Vec<Heading>,
}

impl HeadingCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the next heading and return its index
    pub(crate) fn push(&mut self, text: &str) -> usize {
        let index = self.headings.len();
        self.headings.push(Heading {
            index,
            text: text.to_string(),
        });
        index
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Heading> {
        self.headings.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.headings.iter()
    }

    /// Heading texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.headings.iter().map(|h| h.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a HeadingCollection {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}
