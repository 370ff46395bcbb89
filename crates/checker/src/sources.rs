use crate::error::{CheckError, CheckErrorExt};
use crate::walk::collect_files;
use hyperlink_domain::constants::is_markdown;
use hyperlink_paragraphs::{DocumentSource, ParagraphWalker};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paragraph fingerprints of a sources directory, pointing back to the files they came from.
#[derive(Debug)]
pub struct SourceIndex<P> {
    pub paragraphs: BTreeMap<P, Vec<PathBuf>>,
    /// Every regular file found under the sources directory.
    pub file_count: usize,
    /// The Markdown files among them, which are the ones actually indexed.
    pub markdown_count: usize,
}

impl<P: Ord> SourceIndex<P> {
    #[must_use]
    pub fn empty() -> Self {
        Self { paragraphs: BTreeMap::new(), file_count: 0, markdown_count: 0 }
    }

    /// The source files containing `paragraph`, in path order.
    #[must_use]
    pub fn sources_of(&self, paragraph: &P) -> &[PathBuf] {
        self.paragraphs.get(paragraph).map_or(&[], Vec::as_slice)
    }
}

/// Walks `dir` and fingerprints every Markdown file in parallel.
///
/// Runs on the current rayon pool. Symlinks are skipped.
pub fn index_sources<P: ParagraphWalker>(
    dir: &Path,
) -> Result<SourceIndex<P::Paragraph>, CheckError> {
    info!(path = %dir.display(), "Discovering source files");

    let files = collect_files(dir, false)?;
    let file_count = files.len();
    let sources: Vec<DocumentSource> =
        files.into_iter().filter(|path| is_markdown(path)).map(DocumentSource::new).collect();

    info!("Checking {} out of {} files in source folder", sources.len(), file_count);

    let parsed = sources
        .par_iter()
        .map(|source| {
            debug!(path = %source.path().display(), "Reading source");
            source
                .paragraphs::<P>()
                .map(|paragraphs| (source.path(), paragraphs))
                .context(format!("Failed to index {}", dir.display()))
        })
        .collect::<Result<Vec<_>, CheckError>>()?;

    let mut paragraphs: BTreeMap<P::Paragraph, Vec<PathBuf>> = BTreeMap::new();
    for (path, fingerprints) in parsed {
        for paragraph in fingerprints {
            let paths = paragraphs.entry(paragraph).or_default();
            // Repeated paragraphs within one file list the file once.
            if paths.last().is_none_or(|last| last != path) {
                paths.push(path.to_path_buf());
            }
        }
    }

    Ok(SourceIndex { paragraphs, file_count, markdown_count: sources.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperlink_paragraphs::DebugParagraphWalker;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn indexes_markdown_files_only() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("guide"))?;
        fs::write(dir.path().join("a.md"), "Shared text.\n\nOnly in a.\n\nShared text.\n")?;
        fs::write(dir.path().join("guide/b.mdx"), "Shared *text*.\n")?;
        fs::write(dir.path().join("notes.txt"), "Shared text.\n")?;

        let index = index_sources::<DebugParagraphWalker>(dir.path())?;
        assert_eq!(index.file_count, 3);
        assert_eq!(index.markdown_count, 2);
        assert_eq!(
            index.sources_of(&"sharedtext".to_owned()),
            [dir.path().join("a.md"), dir.path().join("guide/b.mdx")]
        );
        assert_eq!(index.sources_of(&"onlyina".to_owned()), [dir.path().join("a.md")]);
        assert!(index.sources_of(&"missing".to_owned()).is_empty());
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let result = index_sources::<DebugParagraphWalker>(&dir.path().join("nope"));
        assert!(matches!(result, Err(CheckError::Walk { .. })));
    }
}
