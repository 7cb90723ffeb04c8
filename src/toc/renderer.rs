use crate::i18n::Translator;
use crate::toc::heading::HeadingCollection;
use crate::toc::{TocOptions, CAPTION, CONTAINER_CLASS, TEXT_DOMAIN};

/// Renders the navigation block for a document's headings
#[derive(Debug, Clone)]
pub struct TocRenderer {
    caption: String,
    escape_labels: bool,
}

impl TocRenderer {
    /// Create a renderer with the caption translated for the active locale
    pub fn new(translator: &Translator, options: &TocOptions) -> Self {
        Self {
            caption: translator.translate(TEXT_DOMAIN, CAPTION).to_string(),
            escape_labels: options.escape_labels,
        }
    }

    /// The caption as it will appear in the block, before escaping
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Render the table of contents.
    ///
    /// Returns `None` when there are no headings; the caller should then
    /// leave the document without a navigation block.
    pub fn render(&self, headings: &HeadingCollection) -> Option<String> {
        if headings.is_empty() {
            return None;
        }

        let mut html = String::new();

        html.push_str(&format!("<div class=\"{}\">", CONTAINER_CLASS));
        html.push_str(&format!(
            "  <strong>{}</strong>",
            html_escape::encode_quoted_attribute(&self.caption)
        ));
        html.push_str("  <ol>");

        for heading in headings {
            // Labels are inserted verbatim unless escaping was asked for
            let label = if self.escape_labels {
                html_escape::encode_text(&heading.text)
            } else {
                heading.text.as_str().into()
            };
            html.push_str(&format!(
                "<li><a href='#{}'>{}</a></li>",
                heading.anchor(),
                label
            ));
        }

        html.push_str("  </ol>");
        html.push_str("</div>");

        Some(html)
    }
}

impl Default for TocRenderer {
    fn default() -> Self {
        Self::new(&Translator::default(), &TocOptions::default())
    }
}
