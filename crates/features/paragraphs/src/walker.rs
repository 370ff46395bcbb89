use fxhash::FxHasher;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::mem;

/// Accumulates the text of one block at a time and turns it into a comparable value.
pub trait ParagraphWalker: Send {
    type Paragraph: Clone + Debug + Eq + Ord + Hash + Send + Sync;

    fn new() -> Self;

    /// Feeds more text of the current block.
    fn update(&mut self, text: &str);

    /// Ends the current block. Blocks without alphanumeric text yield `None`.
    fn finish_paragraph(&mut self) -> Option<Self::Paragraph>;
}

fn normalized(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase)
}

/// Fingerprints paragraphs with FxHash. Collisions only cause a wrong source attribution.
pub struct ParagraphHasher {
    hasher: FxHasher,
    is_empty: bool,
}

impl Default for ParagraphHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ParagraphHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParagraphHasher").field("is_empty", &self.is_empty).finish_non_exhaustive()
    }
}

impl ParagraphWalker for ParagraphHasher {
    type Paragraph = u64;

    fn new() -> Self {
        Self { hasher: FxHasher::default(), is_empty: true }
    }

    fn update(&mut self, text: &str) {
        for c in normalized(text) {
            self.hasher.write_u32(u32::from(c));
            self.is_empty = false;
        }
    }

    fn finish_paragraph(&mut self) -> Option<u64> {
        let hasher = mem::take(&mut self.hasher);
        if mem::replace(&mut self.is_empty, true) { None } else { Some(hasher.finish()) }
    }
}

/// Keeps the normalized text itself, used by `dump-paragraphs`.
#[derive(Debug, Default)]
pub struct DebugParagraphWalker {
    text: String,
}

impl ParagraphWalker for DebugParagraphWalker {
    type Paragraph = String;

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, text: &str) {
        self.text.extend(normalized(text));
    }

    fn finish_paragraph(&mut self) -> Option<String> {
        let text = mem::take(&mut self.text);
        (!text.is_empty()).then_some(text)
    }
}
