use crate::document::{Link, UsedLink};
use crate::href::Href;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Folds the links of many documents. One collector runs per worker, then all are merged.
pub trait LinkCollector<P: Send>: Send {
    fn new() -> Self;
    fn ingest(&mut self, link: Link<P>);
    fn merge(&mut self, other: Self);
}

/// Collects only used links, for `match-all-paragraphs`. Discards defined links.
#[derive(Debug)]
pub struct UsedLinkCollector<P> {
    pub used_links: Vec<UsedLink<P>>,
}

impl<P: Send> LinkCollector<P> for UsedLinkCollector<P> {
    fn new() -> Self {
        Self { used_links: Vec::new() }
    }

    fn ingest(&mut self, link: Link<P>) {
        if let Link::Uses(used_link) = link {
            self.used_links.push(used_link);
        }
    }

    fn merge(&mut self, other: Self) {
        self.used_links.extend(other.used_links);
    }
}

#[derive(Debug)]
enum LinkState<P> {
    /// A `DefinedLink` was observed for this href.
    Defined,
    /// Not defined *yet*; keep every usage for error reporting.
    Undefined(Vec<UsedLink<P>>),
}

impl<P> LinkState<P> {
    fn add_usage(&mut self, link: UsedLink<P>) {
        if let Self::Undefined(links) = self {
            links.push(link);
        }
    }

    fn update(&mut self, other: Self) {
        match (self, other) {
            (Self::Defined, _) => {},
            (this, Self::Defined) => *this = Self::Defined,
            (Self::Undefined(links), Self::Undefined(more)) => links.extend(more),
        }
    }
}

/// Link collector used for actual link checking. Keeps track of broken links only.
#[derive(Debug)]
pub struct BrokenLinkCollector<P> {
    links: BTreeMap<Href, LinkState<P>>,
    used_link_count: usize,
}

impl<P: Send> LinkCollector<P> for BrokenLinkCollector<P> {
    fn new() -> Self {
        Self { links: BTreeMap::new(), used_link_count: 0 }
    }

    fn ingest(&mut self, link: Link<P>) {
        match link {
            Link::Uses(used_link) => {
                self.used_link_count += 1;
                self.links
                    .entry(used_link.href.clone())
                    .or_insert_with(|| LinkState::Undefined(Vec::new()))
                    .add_usage(used_link);
            },
            Link::Defines(defined_link) => {
                self.links.insert(defined_link.href, LinkState::Defined);
            },
        }
    }

    fn merge(&mut self, other: Self) {
        self.used_link_count += other.used_link_count;

        for (href, state) in other.links {
            match self.links.entry(href) {
                Entry::Occupied(mut entry) => entry.get_mut().update(state),
                Entry::Vacant(entry) => {
                    entry.insert(state);
                },
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct BrokenLink<P> {
    /// `false` when the document exists and only the anchor is missing.
    pub hard_404: bool,
    pub used_link: UsedLink<P>,
}

impl<P: Clone> BrokenLinkCollector<P> {
    /// Every usage of an href that was never defined, ordered by href.
    #[must_use]
    pub fn get_broken_links(&self, check_anchors: bool) -> Vec<BrokenLink<P>> {
        let mut broken_links = Vec::new();

        for (href, state) in &self.links {
            let LinkState::Undefined(links) = state else { continue };

            let hard_404 = !check_anchors
                || !matches!(self.links.get(&href.without_anchor()), Some(LinkState::Defined));

            broken_links.extend(
                links.iter().map(|used_link| BrokenLink { hard_404, used_link: used_link.clone() }),
            );
        }

        broken_links
    }

    #[must_use]
    pub const fn used_links_count(&self) -> usize {
        self.used_link_count
    }
}
