//! Debugging aids for paragraph based source attribution.

use crate::error::CheckError;
use crate::pool::thread_pool;
use crate::sources::index_sources;
use crate::walk::walk_files;
use hyperlink_domain::constants::{is_html, is_markdown};
use hyperlink_links::{Document, Href, LinkCollector, UsedLinkCollector};
use hyperlink_paragraphs::{DebugParagraphWalker, DocumentSource, ParagraphHasher};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// A used link whose paragraph was not found in any source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnmatchedLink {
    pub path: PathBuf,
    pub href: Href,
}

/// Outcome of [`match_all_paragraphs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphMatchReport {
    /// Used links in the HTML tree, with or without a paragraph.
    pub total: usize,
    pub matched: usize,
    /// Links outside of any paragraph element (navigation, footers, ...).
    pub without_paragraph: usize,
    pub unmatched: Vec<UnmatchedLink>,
}

/// Reports, for every link of the site, whether its paragraph exists in the sources.
pub fn match_all_paragraphs(
    base_path: &Path,
    sources: &Path,
    jobs: Option<usize>,
) -> Result<ParagraphMatchReport, CheckError> {
    let pool = thread_pool(jobs)?;
    pool.install(|| {
        let index = index_sources::<ParagraphHasher>(sources)?;

        info!(path = %base_path.display(), "Reading files");
        let mut files = walk_files(base_path)?;
        files.retain(|path| is_html(path));

        let collector = files
            .par_iter()
            .try_fold(UsedLinkCollector::new, |mut collector: UsedLinkCollector<u64>, path| {
                let mut sink = Vec::new();
                Document::new(base_path, path).links::<ParagraphHasher>(&mut sink, false, true)?;
                for link in sink {
                    collector.ingest(link);
                }
                Ok::<_, CheckError>(collector)
            })
            .try_reduce(UsedLinkCollector::new, |mut left, right| {
                left.merge(right);
                Ok(left)
            })?;

        let mut report = ParagraphMatchReport {
            total: collector.used_links.len(),
            ..ParagraphMatchReport::default()
        };

        for link in collector.used_links {
            match &link.paragraph {
                None => report.without_paragraph += 1,
                Some(paragraph) if !index.sources_of(paragraph).is_empty() => report.matched += 1,
                Some(_) => report
                    .unmatched
                    .push(UnmatchedLink { path: link.path.to_path_buf(), href: link.href }),
            }
        }
        report.unmatched.sort();

        Ok(report)
    })
}

/// Lists the normalized paragraphs of one file, for debugging mismatches.
///
/// Markdown files yield every block. HTML files yield only paragraphs that contain links.
pub fn dump_paragraphs(path: &Path) -> Result<BTreeSet<String>, CheckError> {
    if path.extension().is_none() {
        return Err(CheckError::UnknownFileType {
            path: path.to_path_buf(),
            reason: "file has no extension",
        });
    }

    if is_markdown(path) {
        let paragraphs = DocumentSource::new(path).paragraphs::<DebugParagraphWalker>()?;
        return Ok(paragraphs.into_iter().collect());
    }

    if is_html(path) {
        let mut links = Vec::new();
        Document::new(Path::new(""), path).links::<DebugParagraphWalker>(&mut links, false, true)?;
        return Ok(links.into_iter().filter_map(hyperlink_links::Link::into_paragraph).collect());
    }

    Err(CheckError::UnknownFileType { path: path.to_path_buf(), reason: "unknown file extension" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn markdown_paragraphs_are_deduplicated() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("page.md");
        fs::write(&path, "# Title\n\nSame.\n\nSame.\n")?;

        let paragraphs = dump_paragraphs(&path)?;
        assert_eq!(paragraphs.into_iter().collect::<Vec<_>>(), ["same", "title"]);
        Ok(())
    }

    #[test]
    fn html_yields_only_linked_paragraphs() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("page.html");
        fs::write(&path, r#"<p>No links.</p><p>Read <a href="x.html">this</a>.</p>"#)?;

        let paragraphs = dump_paragraphs(&path)?;
        assert_eq!(paragraphs.into_iter().collect::<Vec<_>>(), ["readthis"]);
        Ok(())
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = dump_paragraphs(Path::new("README")).expect_err("no extension");
        assert!(err.to_string().contains("file has no extension"));

        let err = dump_paragraphs(Path::new("style.css")).expect_err("not a document");
        assert!(matches!(
            err,
            CheckError::UnknownFileType { reason: "unknown file extension", .. }
        ));
    }
}
