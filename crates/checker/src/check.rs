use crate::error::CheckError;
use crate::pool::thread_pool;
use crate::sources::{SourceIndex, index_sources};
use crate::walk::walk_files;
use hyperlink_domain::constants::is_html;
use hyperlink_links::{BrokenLinkCollector, DefinedLink, Document, Href, Link, LinkCollector};
use hyperlink_paragraphs::{ParagraphHasher, ParagraphWalker};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Paragraph = <ParagraphHasher as ParagraphWalker>::Paragraph;

/// What to check and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub base_path: PathBuf,
    /// Worker threads. `None` uses one per CPU.
    pub jobs: Option<usize>,
    pub check_anchors: bool,
    /// Markdown sources to attribute broken links to.
    pub sources: Option<PathBuf>,
}

impl CheckOptions {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    #[must_use]
    pub const fn check_anchors(mut self, check_anchors: bool) -> Self {
        self.check_anchors = check_anchors;
        self
    }

    #[must_use]
    pub fn sources(mut self, sources: Option<PathBuf>) -> Self {
        self.sources = sources;
        self
    }
}

/// The broken links of one file: a Markdown source, or the HTML file the link was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: PathBuf,
    /// `true` when `path` is a Markdown source the broken links were attributed to.
    pub is_source: bool,
    pub bad_links: BTreeSet<Href>,
    pub bad_anchors: BTreeSet<Href>,
}

/// Outcome of [`check_links`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Every regular file under the base path.
    pub file_count: usize,
    /// The HTML files among them.
    pub documents_count: usize,
    pub used_links_count: usize,
    /// Distinct hrefs whose document does not exist.
    pub bad_links_count: usize,
    /// Distinct hrefs whose document exists but whose anchor does not.
    pub bad_anchors_count: usize,
    pub check_anchors: bool,
    /// Source entries first, then raw HTML files, each group by path.
    pub entries: Vec<ReportEntry>,
}

impl CheckReport {
    /// `1` for bad links, `2` when only anchors are broken, `0` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.bad_links_count > 0 {
            1
        } else if self.bad_anchors_count > 0 {
            2
        } else {
            0
        }
    }
}

/// Per-worker fold state.
struct Extracted {
    collector: BrokenLinkCollector<Paragraph>,
    file_count: usize,
    documents_count: usize,
}

impl Extracted {
    fn new() -> Self {
        Self { collector: BrokenLinkCollector::new(), file_count: 0, documents_count: 0 }
    }

    fn merge(mut self, other: Self) -> Self {
        self.collector.merge(other.collector);
        self.file_count += other.file_count;
        self.documents_count += other.documents_count;
        self
    }
}

/// Checks every link of the site under `options.base_path`.
///
/// # Errors
/// Fails when the site cannot be walked, contains a symlink, or a file cannot be read.
/// Broken links are not errors; they are listed in the report.
pub fn check_links(options: &CheckOptions) -> Result<CheckReport, CheckError> {
    let pool = thread_pool(options.jobs)?;
    pool.install(|| run(options))
}

fn run(options: &CheckOptions) -> Result<CheckReport, CheckError> {
    let base_path = options.base_path.as_path();
    let check_anchors = options.check_anchors;
    let get_paragraphs = options.sources.is_some();

    info!(path = %base_path.display(), "Reading files");
    let files = walk_files(base_path)?;

    let extracted = files
        .par_iter()
        .try_fold(
            || (Extracted::new(), Vec::new()),
            |(mut state, mut sink), path| {
                extract(base_path, path, &mut state, &mut sink, check_anchors, get_paragraphs)?;
                Ok::<_, CheckError>((state, sink))
            },
        )
        .map(|result| result.map(|(state, _sink)| state))
        .try_reduce(Extracted::new, |left, right| Ok(left.merge(right)))?;

    let index = match &options.sources {
        Some(sources) => index_sources::<ParagraphHasher>(sources)?,
        None => SourceIndex::empty(),
    };

    let used_links_count = extracted.collector.used_links_count();
    info!(
        links = used_links_count,
        files = extracted.file_count,
        documents = extracted.documents_count,
        "Links collected"
    );

    let mut report = attribute(&extracted.collector, &index, check_anchors);
    report.file_count = extracted.file_count;
    report.documents_count = extracted.documents_count;
    report.used_links_count = used_links_count;

    info!(
        bad_links = report.bad_links_count,
        bad_anchors = report.bad_anchors_count,
        "Check finished"
    );
    Ok(report)
}

fn extract(
    base_path: &Path,
    path: &Path,
    state: &mut Extracted,
    sink: &mut Vec<Link<Paragraph>>,
    check_anchors: bool,
    get_paragraphs: bool,
) -> Result<(), CheckError> {
    let document = Document::new(base_path, path);
    state.file_count += 1;

    if is_html(path) {
        debug!(path = %path.display(), "Parsing document");
        document.links::<ParagraphHasher>(sink, check_anchors, get_paragraphs)?;
        state.documents_count += 1;
    } else {
        sink.extend(document.defined_hrefs().map(|href| Link::Defines(DefinedLink { href })));
    }

    for link in sink.drain(..) {
        state.collector.ingest(link);
    }
    Ok(())
}

/// Groups broken links by the file that should be fixed.
fn attribute(
    collector: &BrokenLinkCollector<Paragraph>,
    index: &SourceIndex<Paragraph>,
    check_anchors: bool,
) -> CheckReport {
    // `false` sorts Markdown sources ahead of raw HTML files.
    let mut grouped: BTreeMap<(bool, PathBuf), (BTreeSet<Href>, BTreeSet<Href>)> = BTreeMap::new();
    let mut bad_links = BTreeSet::new();
    let mut bad_anchors = BTreeSet::new();

    for broken in collector.get_broken_links(check_anchors) {
        let href = broken.used_link.href;
        if broken.hard_404 {
            bad_links.insert(href.clone());
        } else {
            bad_anchors.insert(href.clone());
        }

        let sources = broken.used_link.paragraph.as_ref().map_or(&[][..], |p| index.sources_of(p));
        let targets: Vec<(bool, PathBuf)> = if sources.is_empty() {
            vec![(true, broken.used_link.path.to_path_buf())]
        } else {
            sources.iter().map(|source| (false, source.clone())).collect()
        };

        for key in targets {
            let (links, anchors) = grouped.entry(key).or_default();
            let hrefs = if broken.hard_404 { links } else { anchors };
            hrefs.insert(href.clone());
        }
    }

    let entries = grouped
        .into_iter()
        .map(|((is_raw_file, path), (bad_links, bad_anchors))| ReportEntry {
            path,
            is_source: !is_raw_file,
            bad_links,
            bad_anchors,
        })
        .collect();

    CheckReport {
        bad_links_count: bad_links.len(),
        bad_anchors_count: bad_anchors.len(),
        check_anchors,
        entries,
        ..CheckReport::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(bad_links: usize, bad_anchors: usize) -> CheckReport {
        CheckReport {
            bad_links_count: bad_links,
            bad_anchors_count: bad_anchors,
            ..CheckReport::default()
        }
    }

    #[test]
    fn exit_code_prefers_bad_links() {
        assert_eq!(report(0, 0).exit_code(), 0);
        assert_eq!(report(3, 0).exit_code(), 1);
        assert_eq!(report(1, 4).exit_code(), 1);
        assert_eq!(report(0, 2).exit_code(), 2);
    }

    #[test]
    fn options_builder_sets_fields() {
        let options = CheckOptions::new("public")
            .jobs(Some(2))
            .check_anchors(true)
            .sources(Some(PathBuf::from("content")));
        assert_eq!(options.base_path, Path::new("public"));
        assert_eq!(options.jobs, Some(2));
        assert!(options.check_anchors);
        assert_eq!(options.sources.as_deref(), Some(Path::new("content")));
    }
}
