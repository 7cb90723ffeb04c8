mod extractor;
mod heading;
mod renderer;

pub use extractor::{extract_headings, Extraction};
pub use heading::{anchor_id, Heading, HeadingCollection};
pub use renderer::TocRenderer;

/// Prefix of every anchor identifier (`title_0`, `title_1`, ...)
pub const ANCHOR_PREFIX: &str = "title_";

/// Class name of the navigation block container
pub const CONTAINER_CLASS: &str = "post_toc";

/// Untranslated caption of the navigation block
pub const CAPTION: &str = "Table of Contents";

/// Translation domain used to look up the caption
pub const TEXT_DOMAIN: &str = "page-toc";

/// Options for table of contents rendering
#[derive(Debug, Clone, Default)]
pub struct TocOptions {
    /// HTML-escape heading text before using it as a link label
    pub escape_labels: bool,
}

/// Add anchors to the document's headings and prepend the table of contents.
///
/// Documents without headings come back unchanged.
pub fn build_toc(content: &str, renderer: &TocRenderer) -> String {
    let extraction = extract_headings(content);

    match renderer.render(&extraction.headings) {
        Some(toc) => toc + &extraction.content,
        None => extraction.content,
    }
}
