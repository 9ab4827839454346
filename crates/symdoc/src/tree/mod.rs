//! Slash-delimited page tree.
//!
//! Nodes are created lazily as paths are inserted; a node only carries a
//! page when it was addressed explicitly. Children are kept in a `BTreeMap`
//! so enumeration is deterministic between runs.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use crate::error::PathInsertionError;

#[derive(Debug, Clone, PartialEq)]
pub struct PathNode<P> {
    name: String,
    full_path: String,
    children: BTreeMap<String, PathNode<P>>,
    page: Option<P>,
}

impl<P> PathNode<P> {
    fn new(
        name: &str,
        full_path: String,
    ) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            children: BTreeMap::new(),
            page: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed when the node is created; never recomputed.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn page(&self) -> Option<&P> {
        self.page.as_ref()
    }

    pub fn children(&self) -> impl Iterator<Item = &PathNode<P>> {
        self.children.values()
    }

    pub fn child(
        &self,
        name: &str,
    ) -> Option<&PathNode<P>> {
        self.children.get(name)
    }

    /// Node exists only as an ancestor of addressed paths.
    pub fn is_scaffold(&self) -> bool {
        self.page.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathTree<P> {
    root: PathNode<P>,
}

impl<P> PathTree<P> {
    pub fn new(root_name: &str) -> Self {
        Self {
            root: PathNode::new(root_name, root_name.to_string()),
        }
    }

    pub fn root(&self) -> &PathNode<P> {
        &self.root
    }

    /// Attach `page` at `path`, creating missing intermediate nodes.
    ///
    /// Segments are trimmed. An empty segment stops the walk with an error;
    /// nodes created for earlier segments of the same path are kept.
    /// Re-inserting an existing path replaces only its page.
    pub fn insert(
        &mut self,
        path: &str,
        page: P,
    ) -> Result<&PathNode<P>, PathInsertionError> {
        let mut node = &mut self.root;
        for (index, segment) in path.split('/').map(str::trim).enumerate() {
            if segment.is_empty() {
                return Err(PathInsertionError {
                    path: path.to_string(),
                    index,
                });
            }
            node = match node.children.entry(segment.to_string()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let full_path = format!("{}/{segment}", node.full_path);
                    entry.insert(PathNode::new(segment, full_path))
                },
            };
        }

        node.page = Some(page);
        debug!("Inserted page at {}", node.full_path);
        Ok(&*node)
    }

    /// Node at `path`, with or without a page.
    pub fn node(
        &self,
        path: &str,
    ) -> Option<&PathNode<P>> {
        let mut node = &self.root;
        for segment in path.split('/').map(str::trim) {
            if segment.is_empty() {
                return None;
            }
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    pub fn lookup(
        &self,
        path: &str,
    ) -> Option<&P> {
        self.node(path).and_then(PathNode::page)
    }

    /// Lazily walk every node that carries a page. Each call starts over.
    pub fn pages(&self) -> Pages<'_, P> {
        Pages {
            stack: vec![&self.root],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages().count()
    }
}

/// Depth-first iterator over page-bearing nodes.
pub struct Pages<'a, P> {
    stack: Vec<&'a PathNode<P>>,
}

impl<'a, P> Iterator for Pages<'a, P> {
    type Item = &'a PathNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values().rev());
            if node.page.is_some() {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src/tree/tree_tests.rs"]
mod tests;
