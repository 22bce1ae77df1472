//! Render targets.

use std::collections::BTreeSet;

use crate::markup;

/// The element the menu is written into.
///
/// Mirrors the handful of DOM operations the renderer needs, so a page
/// element and an in-memory buffer are interchangeable.
pub trait MenuContainer {
    /// Replaces the whole content with `markup` in a single write.
    fn replace_content(&mut self, markup: &str);

    /// `href` of every link carrying `link_class`, in document order.
    fn nav_link_hrefs(&self, link_class: &str) -> Vec<Option<String>>;

    /// Adds `class` to the `index`-th link carrying `link_class`.
    fn add_link_class(&mut self, link_class: &str, index: usize, class: &str);
}

/// [`MenuContainer`] backed by a string.
///
/// Keeps track of how many times it was written and which links were
/// marked, which is what tests want to look at.
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
    content: String,
    writes: usize,
    marked: BTreeSet<(usize, String)>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container pre-filled with `content`, as a server-rendered page would be.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of [`MenuContainer::replace_content`] calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// `href`s of the links that received `class`, in document order.
    pub fn links_with_class(&self, link_class: &str, class: &str) -> Vec<String> {
        let hrefs = self.nav_link_hrefs(link_class);
        self.marked
            .iter()
            .filter(|(_, marked)| marked == class)
            .filter_map(|(index, _)| hrefs.get(*index).cloned().flatten())
            .collect()
    }
}

impl MenuContainer for MemoryContainer {
    fn replace_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.writes += 1;
        self.marked.clear();
    }

    fn nav_link_hrefs(&self, link_class: &str) -> Vec<Option<String>> {
        markup::nav_link_hrefs(&self.content, link_class)
    }

    fn add_link_class(&mut self, _link_class: &str, index: usize, class: &str) {
        self.marked.insert((index, class.to_string()));
    }
}
