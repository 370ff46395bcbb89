//! Plain text rendering of check results. Everything here goes to stdout.

use hyperlink_checker::{CheckReport, ParagraphMatchReport, ReportEntry};
use hyperlink_links::Href;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

/// Writes the report in the order it should be read: summary line, entries, totals.
pub fn write_check_report(
    out: &mut impl Write,
    report: &CheckReport,
    github_actions: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "Checking {} links from {} files ({} documents)",
        report.used_links_count, report.file_count, report.documents_count
    )?;

    for entry in &report.entries {
        write_entry(out, entry, github_actions)?;
    }

    writeln!(out, "Found {} bad links", report.bad_links_count)?;
    if report.check_anchors {
        writeln!(out, "Found {} bad anchors", report.bad_anchors_count)?;
    }
    Ok(())
}

fn write_entry(out: &mut impl Write, entry: &ReportEntry, github_actions: bool) -> io::Result<()> {
    writeln!(out, "{}", entry.path.display())?;

    for href in &entry.bad_links {
        writeln!(out, "  error: bad link {href}")?;
    }
    for href in &entry.bad_anchors {
        writeln!(out, "  warning: bad anchor {href}")?;
    }

    if github_actions {
        let path = entry.path.canonicalize()?;
        if !entry.bad_links.is_empty() {
            write_annotation(out, &path, "bad links", &entry.bad_links)?;
        }
        if !entry.bad_anchors.is_empty() {
            write_annotation(out, &path, "bad anchors", &entry.bad_anchors)?;
        }
    }

    writeln!(out)
}

/// One `::error` workflow command per entry; `%0A` is an escaped newline.
fn write_annotation(
    out: &mut impl Write,
    path: &Path,
    title: &str,
    hrefs: &BTreeSet<Href>,
) -> io::Result<()> {
    write!(out, "::error file={}::{title}:", path.display())?;
    for href in hrefs {
        write!(out, "%0A  {href}")?;
    }
    writeln!(out)
}

pub fn write_match_report(out: &mut impl Write, report: &ParagraphMatchReport) -> io::Result<()> {
    for link in &report.unmatched {
        writeln!(out, "{}: {}", link.path.display(), link.href)?;
    }
    writeln!(
        out,
        "Matched {} of {} links ({} outside of paragraphs, {} unmatched)",
        report.matched,
        report.total,
        report.without_paragraph,
        report.unmatched.len()
    )
}

pub fn write_paragraphs<'a>(
    out: &mut impl Write,
    paragraphs: impl IntoIterator<Item = &'a String>,
) -> io::Result<()> {
    for paragraph in paragraphs {
        writeln!(out, "{paragraph}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(report: &CheckReport) -> String {
        let mut out = Vec::new();
        write_check_report(&mut out, report, false).expect("write to memory");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn clean_report_has_only_totals() {
        let report = CheckReport {
            used_links_count: 4,
            file_count: 3,
            documents_count: 2,
            ..CheckReport::default()
        };
        assert_eq!(
            render(&report),
            "Checking 4 links from 3 files (2 documents)\nFound 0 bad links\n"
        );
    }

    #[test]
    fn entries_list_links_before_anchors() {
        let report = CheckReport {
            bad_links_count: 1,
            bad_anchors_count: 1,
            check_anchors: true,
            entries: vec![ReportEntry {
                path: PathBuf::from("public/index.html"),
                is_source: false,
                bad_links: BTreeSet::from([Href::from("gone.html")]),
                bad_anchors: BTreeSet::from([Href::from("guide.html#setup")]),
            }],
            ..CheckReport::default()
        };

        assert_eq!(
            render(&report),
            "Checking 0 links from 0 files (0 documents)\n\
             public/index.html\n\
             \x20 error: bad link gone.html\n\
             \x20 warning: bad anchor guide.html#setup\n\
             \n\
             Found 1 bad links\n\
             Found 1 bad anchors\n"
        );
    }

    #[test]
    fn annotations_escape_newlines() {
        let mut out = Vec::new();
        let hrefs = BTreeSet::from([Href::from("a.html"), Href::from("b.html")]);
        write_annotation(&mut out, Path::new("/site/index.html"), "bad links", &hrefs)
            .expect("write to memory");
        assert_eq!(
            String::from_utf8(out).expect("utf-8 output"),
            "::error file=/site/index.html::bad links:%0A  a.html%0A  b.html\n"
        );
    }
}
