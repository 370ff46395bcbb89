use crate::error::{LinkError, LinkErrorExt};
use crate::href::Href;
use html5gum::{DefaultEmitter, Token, Tokenizer};
use hyperlink_domain::constants::is_index_file;
use hyperlink_paragraphs::ParagraphWalker;
use percent_encoding::percent_decode_str;
use std::fs;
use std::path::{Component, Path};
use std::sync::Arc;
use tracing::trace;

/// Elements whose text is fingerprinted for source matching. Must mirror the Markdown blocks.
const PARAGRAPH_TAGS: &[&[u8]] = &[
    b"p",
    b"li",
    b"dt",
    b"dd",
    b"h1",
    b"h2",
    b"h3",
    b"h4",
    b"h5",
    b"h6",
    b"th",
    b"td",
    b"blockquote",
    b"figcaption",
];

/// Elements whose content is script or styling, never markup.
const RAW_TEXT_TAGS: &[&[u8]] = &[b"script", b"style"];

/// A link target that exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefinedLink {
    pub href: Href,
}

/// A link found in `path`, optionally tagged with the paragraph it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsedLink<P> {
    pub href: Href,
    pub path: Arc<Path>,
    pub paragraph: Option<P>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link<P> {
    Uses(UsedLink<P>),
    Defines(DefinedLink),
}

impl<P> Link<P> {
    pub fn into_paragraph(self) -> Option<P> {
        match self {
            Self::Uses(used) => used.paragraph,
            Self::Defines(_) => None,
        }
    }
}

/// A file inside the checked directory.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: Arc<Path>,
    pub href: Href,
    directory: Vec<String>,
    is_index: bool,
}

impl Document {
    /// `path` is expected to live under `base_path`; other paths are used as they are.
    pub fn new(base_path: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(base_path).unwrap_or(path);
        let mut segments: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let href = Href::new(segments.join("/"));
        segments.pop();

        Self { path: Arc::from(path), href, directory: segments, is_index: is_index_file(path) }
    }

    /// The hrefs that reach this document: itself, plus its directory for index files.
    pub fn defined_hrefs(&self) -> impl Iterator<Item = Href> + '_ {
        let directory = self.is_index.then(|| Href::new(self.directory.join("/")));
        std::iter::once(self.href.clone()).chain(directory)
    }

    /// Resolves an attribute value found in this document.
    ///
    /// Returns `None` for empty values and for external links (`//host`, or anything with a
    /// URL scheme such as `https:` or `mailto:`). The query string is dropped, and so is the
    /// fragment unless `keep_anchor` is set.
    pub fn join(&self, value: &str, keep_anchor: bool) -> Option<Href> {
        let value = value.trim_matches(|c: char| c.is_ascii_whitespace());
        if value.is_empty() || is_external(value) {
            return None;
        }

        let (rest, fragment) = value.split_once('#').map_or((value, None), |(r, f)| (r, Some(f)));
        let path = rest.split_once('?').map_or(rest, |(path, _)| path);

        let mut href = if path.is_empty() {
            self.href.as_str().to_owned()
        } else {
            let mut segments =
                if path.starts_with('/') { Vec::new() } else { self.directory.clone() };
            for segment in path.split('/').map(decode) {
                match segment.as_str() {
                    "" | "." => {},
                    ".." => {
                        segments.pop();
                    },
                    _ => segments.push(segment),
                }
            }
            segments.join("/")
        };

        if keep_anchor && let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            href.push('#');
            href.push_str(&decode(fragment));
        }

        Some(Href::new(href))
    }

    /// Reads the file and pushes every link it defines or uses into `sink`.
    pub fn links<P: ParagraphWalker>(
        &self,
        sink: &mut Vec<Link<P::Paragraph>>,
        check_anchors: bool,
        get_paragraphs: bool,
    ) -> Result<(), LinkError> {
        let bytes =
            fs::read(&self.path).context(format!("Failed to read {}", self.path.display()))?;
        let html = String::from_utf8_lossy(&bytes);
        let before = sink.len();
        self.extract_links::<P>(&html, sink, check_anchors, get_paragraphs);
        trace!(path = %self.path.display(), links = sink.len() - before, "Extracted links");
        Ok(())
    }

    /// Same as [`Document::links`] for HTML that is already in memory.
    pub fn extract_links<P: ParagraphWalker>(
        &self,
        html: &str,
        sink: &mut Vec<Link<P::Paragraph>>,
        check_anchors: bool,
        get_paragraphs: bool,
    ) {
        sink.extend(self.defined_hrefs().map(|href| Link::Defines(DefinedLink { href })));

        let mut paragraph = OpenParagraph::<P>::new();
        let mut in_raw_text = false;

        // Switching states keeps `<a href=...>` inside inline scripts from becoming a tag.
        let mut emitter = DefaultEmitter::default();
        emitter.naively_switch_states(true);

        for token in Tokenizer::new_with_emitter(html, emitter) {
            let token = match token {
                Ok(token) => token,
                Err(never) => match never {},
            };

            match token {
                Token::StartTag(tag) => {
                    let name: &[u8] = &tag.name;
                    if in_raw_text {
                        continue;
                    }
                    if RAW_TEXT_TAGS.contains(&name) {
                        in_raw_text = true;
                    }
                    if get_paragraphs && PARAGRAPH_TAGS.contains(&name) {
                        paragraph.close(sink);
                        paragraph.depth += 1;
                    }
                    if name == b"base" {
                        continue;
                    }

                    for (key, value) in &tag.attributes {
                        let key: &[u8] = key;
                        let value = String::from_utf8_lossy(value);
                        match key {
                            b"href" | b"src" => {
                                if let Some(href) = self.join(&value, check_anchors) {
                                    paragraph.push(self.used(href), sink);
                                }
                            },
                            b"srcset" => {
                                for candidate in value.split(',') {
                                    let Some(url) = candidate.split_whitespace().next() else {
                                        continue;
                                    };
                                    if let Some(href) = self.join(url, check_anchors) {
                                        paragraph.push(self.used(href), sink);
                                    }
                                }
                            },
                            b"id" if check_anchors => self.define_anchor(&value, sink),
                            b"name" if check_anchors && name == b"a" => {
                                self.define_anchor(&value, sink);
                            },
                            _ => {},
                        }
                    }
                },
                Token::EndTag(tag) => {
                    let name: &[u8] = &tag.name;
                    if in_raw_text {
                        in_raw_text = !RAW_TEXT_TAGS.contains(&name);
                        continue;
                    }
                    if get_paragraphs && PARAGRAPH_TAGS.contains(&name) {
                        paragraph.close(sink);
                        paragraph.depth = paragraph.depth.saturating_sub(1);
                    }
                },
                Token::String(text) => {
                    if get_paragraphs && paragraph.depth > 0 && !in_raw_text {
                        paragraph.walker.update(&String::from_utf8_lossy(&text));
                    }
                },
                _ => {},
            }
        }

        paragraph.close(sink);
    }

    fn used<P>(&self, href: Href) -> UsedLink<P> {
        UsedLink { href, path: Arc::clone(&self.path), paragraph: None }
    }

    fn define_anchor<P>(&self, anchor: &str, sink: &mut Vec<Link<P>>) {
        if anchor.is_empty() {
            return;
        }
        sink.extend(
            self.defined_hrefs()
                .map(|href| Link::Defines(DefinedLink { href: href.with_anchor(anchor) })),
        );
    }
}

/// Text and links of the paragraph currently being read.
struct OpenParagraph<P: ParagraphWalker> {
    walker: P,
    pending: Vec<UsedLink<P::Paragraph>>,
    depth: usize,
}

impl<P: ParagraphWalker> OpenParagraph<P> {
    fn new() -> Self {
        Self { walker: P::new(), pending: Vec::new(), depth: 0 }
    }

    /// Links inside a paragraph wait until its fingerprint is known.
    fn push(&mut self, link: UsedLink<P::Paragraph>, sink: &mut Vec<Link<P::Paragraph>>) {
        if self.depth > 0 {
            self.pending.push(link);
        } else {
            sink.push(Link::Uses(link));
        }
    }

    fn close(&mut self, sink: &mut Vec<Link<P::Paragraph>>) {
        let paragraph = self.walker.finish_paragraph();
        sink.extend(self.pending.drain(..).map(|mut link| {
            link.paragraph.clone_from(&paragraph);
            Link::Uses(link)
        }));
    }
}

fn is_external(value: &str) -> bool {
    value.starts_with("//")
        || value
            .find([':', '/', '?', '#'])
            .is_some_and(|position| value.as_bytes()[position] == b':')
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
