use crate::error::{ParagraphError, ParagraphErrorExt};
use crate::walker::ParagraphWalker;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A Markdown file that may have produced some of the checked HTML.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentSource {
    pub path: PathBuf,
}

impl DocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and returns one fingerprint per non-empty block, in document order.
    pub fn paragraphs<P: ParagraphWalker>(&self) -> Result<Vec<P::Paragraph>, ParagraphError> {
        let text = fs::read_to_string(&self.path)
            .context(format!("Failed to read {}", self.path.display()))?;
        let paragraphs = markdown_paragraphs::<P>(&text);
        trace!(path = %self.path.display(), paragraphs = paragraphs.len(), "Fingerprinted source");
        Ok(paragraphs)
    }
}

const fn opens_block(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::Item
            | Tag::TableCell
            | Tag::BlockQuote { .. }
            | Tag::FootnoteDefinition { .. }
    )
}

const fn closes_block(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Paragraph
            | TagEnd::Heading { .. }
            | TagEnd::Item
            | TagEnd::TableCell
            | TagEnd::BlockQuote { .. }
            | TagEnd::FootnoteDefinition { .. }
    )
}

/// Splits CommonMark text into block fingerprints.
///
/// Every block start and end closes the running paragraph, so nested lists produce one
/// paragraph per item just like the rendered `<li>` elements do. Image alt text is skipped
/// because HTML keeps it in an attribute.
pub fn markdown_paragraphs<P: ParagraphWalker>(text: &str) -> Vec<P::Paragraph> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut walker = P::new();
    let mut paragraphs = Vec::new();
    let mut depth = 0_usize;
    let mut image_depth = 0_usize;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image { .. }) => image_depth = image_depth.saturating_sub(1),
            Event::Start(tag) if opens_block(&tag) => {
                paragraphs.extend(walker.finish_paragraph());
                depth += 1;
            },
            Event::End(tag) if closes_block(&tag) => {
                paragraphs.extend(walker.finish_paragraph());
                depth = depth.saturating_sub(1);
            },
            Event::Text(text) | Event::Code(text) if depth > 0 && image_depth == 0 => {
                walker.update(&text);
            },
            _ => {},
        }
    }

    paragraphs.extend(walker.finish_paragraph());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::{DebugParagraphWalker, ParagraphHasher};

    fn dump(text: &str) -> Vec<String> {
        markdown_paragraphs::<DebugParagraphWalker>(text)
    }

    #[test]
    fn paragraphs_and_headings_are_separate() {
        let text = "# Getting started\n\nInstall with `cargo install`.\nThen run it.\n";
        assert_eq!(dump(text), vec!["gettingstarted", "installwithcargoinstallthenrunit"]);
    }

    #[test]
    fn nested_lists_yield_one_paragraph_per_item() {
        let text = "- outer [link](a.html)\n  - inner\n- last\n";
        assert_eq!(dump(text), vec!["outerlink", "inner", "last"]);
    }

    #[test]
    fn loose_lists_match_tight_lists() {
        assert_eq!(dump("- one\n\n- two\n"), dump("- one\n- two\n"));
    }

    #[test]
    fn image_alt_text_is_skipped() {
        assert_eq!(dump("See ![a diagram](d.png) below.\n"), vec!["seebelow"]);
    }

    #[test]
    fn table_cells_are_paragraphs() {
        let text = "| Name | Link |\n|------|------|\n| docs | [here](d.html) |\n";
        assert_eq!(dump(text), vec!["name", "link", "docs", "here"]);
    }

    #[test]
    fn raw_html_and_code_blocks_are_ignored() {
        let text = "<div>inline html</div>\n\n```\nfn main() {}\n```\n";
        assert!(dump(text).is_empty());
    }

    #[test]
    fn hasher_agrees_with_debug_walker_on_count() {
        let text = "One.\n\nTwo.\n\n> Three.\n";
        assert_eq!(markdown_paragraphs::<ParagraphHasher>(text).len(), dump(text).len());
    }
}
