//! Browsable directory tree over a zip archive's flat entry list.
//!
//! Zip archives only record entry names. Directories may be explicit
//! (`lib/`) or implied by a file path (`lib/b.jar`), so the tree is rebuilt
//! from the names before walking it. Children keep first-appearance order.

use crate::services::fs_utils::path_utils::is_path_safe;
use crate::types::errors::UnpackFailure;
use std::path::Path;

#[derive(Debug)]
enum NodeKind {
    Dir,
    File { index: usize },
}

#[derive(Debug)]
struct Node {
    name: String,
    /// `/`-separated path from the archive root, without trailing slash.
    path: String,
    kind: NodeKind,
    children: Vec<usize>,
}

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<'a> {
    Dir(&'a str),
    File { path: &'a str, index: usize },
}

#[derive(Debug)]
pub struct ArchiveTree {
    nodes: Vec<Node>,
}

const ROOT: usize = 0;

impl ArchiveTree {
    /// Build from `(entry index, entry name)` pairs. Later duplicates of an
    /// existing file path are dropped.
    ///
    /// Fails on absolute names, names climbing above the root, and a path
    /// used as both a file and a directory.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, UnpackFailure>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut tree = ArchiveTree {
            nodes: vec![Node {
                name: String::new(),
                path: String::new(),
                kind: NodeKind::Dir,
                children: Vec::new(),
            }],
        };

        for (index, name) in entries {
            tree.insert(index, name)?;
        }
        Ok(tree)
    }

    fn insert(&mut self, index: usize, name: &str) -> Result<(), UnpackFailure> {
        // A leading `/` parses as a root component, so this also covers absolute names
        if !is_path_safe(Path::new(name)) {
            return Err(UnpackFailure::UnsafeEntry(name.to_string()));
        }

        let is_dir = name.ends_with('/');
        let parts: Vec<&str> = name.split('/').filter(|p| !p.is_empty()).collect();
        let Some((last, parents)) = parts.split_last() else {
            return Ok(());
        };

        let mut current = ROOT;
        for part in parents {
            current = self.child_dir(current, part)?;
        }

        if is_dir {
            self.child_dir(current, last)?;
            return Ok(());
        }

        match self.find_child(current, last) {
            None => {
                self.push_child(current, last, NodeKind::File { index });
            }
            Some(existing) if matches!(self.nodes[existing].kind, NodeKind::Dir) => {
                return Err(UnpackFailure::NameClash(self.nodes[existing].path.clone()));
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn find_child(&self, parent: usize, name: &str) -> Option<usize> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].name == name)
    }

    fn child_dir(&mut self, parent: usize, name: &str) -> Result<usize, UnpackFailure> {
        match self.find_child(parent, name) {
            Some(existing) => match self.nodes[existing].kind {
                NodeKind::Dir => Ok(existing),
                NodeKind::File { .. } => {
                    Err(UnpackFailure::NameClash(self.nodes[existing].path.clone()))
                }
            },
            None => Ok(self.push_child(parent, name, NodeKind::Dir)),
        }
    }

    fn push_child(&mut self, parent: usize, name: &str, kind: NodeKind) -> usize {
        let parent_path = &self.nodes[parent].path;
        let path = if parent_path.is_empty() {
            name.to_string()
        } else {
            format!("{parent_path}/{name}")
        };

        let id = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            path,
            kind,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Number of file nodes.
    pub fn file_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::File { .. }))
            .count()
    }

    /// Pre-order depth-first walk; a directory is visited before its
    /// children. The root itself is not visited. Stops at the first error.
    pub fn walk<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(Visit<'_>) -> Result<(), E>,
    {
        self.walk_from(ROOT, &mut visitor)
    }

    fn walk_from<E, F>(&self, node: usize, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Visit<'_>) -> Result<(), E>,
    {
        for &child in &self.nodes[node].children {
            let n = &self.nodes[child];
            match n.kind {
                NodeKind::Dir => {
                    visitor(Visit::Dir(&n.path))?;
                    self.walk_from(child, &mut *visitor)?;
                }
                NodeKind::File { index } => visitor(Visit::File {
                    path: &n.path,
                    index,
                })?,
            }
        }
        Ok(())
    }
}
