//! In-memory file system for tests and previews
//!
//! Listing order is the lexicographic order of the child paths, which keeps
//! tests deterministic. Paths can be marked as denied to simulate permission
//! errors on any access.

use crate::{FileSystemGateway, FsError, FsMetadata, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File { data: Vec<u8>, modified: i64 },
}

/// A fake [`FileSystemGateway`] holding everything in a map
#[derive(Debug)]
pub struct MemoryFileSystem {
    nodes: RwLock<BTreeMap<PathBuf, Node>>,
    denied: RwLock<HashSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Create a file system containing only the root directory `/`
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);

        Self {
            nodes: RwLock::new(nodes),
            denied: RwLock::new(HashSet::new()),
        }
    }

    /// Create a directory and any missing parents
    pub fn add_dir<P: AsRef<Path>>(&self, path: P) -> &Self {
        let mut nodes = self.nodes.write();
        Self::insert_with_parents(&mut nodes, path.as_ref(), Node::Dir);
        self
    }

    /// Create (or replace) a file and any missing parent directories
    pub fn add_file<P: AsRef<Path>>(&self, path: P, data: impl Into<Vec<u8>>) -> &Self {
        self.add_file_modified(path, data, 0)
    }

    /// Like [`add_file`](Self::add_file) with an explicit modification time
    pub fn add_file_modified<P: AsRef<Path>>(
        &self,
        path: P,
        data: impl Into<Vec<u8>>,
        modified: i64,
    ) -> &Self {
        let mut nodes = self.nodes.write();
        Self::insert_with_parents(
            &mut nodes,
            path.as_ref(),
            Node::File {
                data: data.into(),
                modified,
            },
        );
        self
    }

    /// Make every access to `path` fail with [`FsError::AccessDenied`]
    pub fn deny<P: AsRef<Path>>(&self, path: P) -> &Self {
        self.denied.write().insert(path.as_ref().to_path_buf());
        self
    }

    /// Contents of a file, if it exists
    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        match self.nodes.read().get(path.as_ref()) {
            Some(Node::File { data, .. }) => Some(data.clone()),
            _ => None,
        }
    }

    /// Every path currently stored, in lexicographic order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.read().keys().cloned().collect()
    }

    fn insert_with_parents(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
        nodes.insert(path.to_path_buf(), node);
    }

    fn check_access(&self, path: &Path) -> Result<()> {
        if self.denied.read().contains(path) {
            return Err(FsError::AccessDenied(path.to_path_buf()));
        }
        Ok(())
    }

    /// `path` itself followed by all of its descendants
    fn subtree(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> Vec<PathBuf> {
        nodes
            .keys()
            .filter(|p| p.starts_with(path))
            .cloned()
            .collect()
    }

    fn require_parent(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> Result<()> {
        match path.parent().map(|p| nodes.get(p)) {
            Some(Some(Node::Dir)) => Ok(()),
            Some(Some(Node::File { .. })) => Err(FsError::InvalidPath(format!(
                "Parent is not a directory: {}",
                path.display()
            ))),
            _ => Err(FsError::NotFound(
                path.parent().unwrap_or(path).to_path_buf(),
            )),
        }
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemGateway for MemoryFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.check_access(dir)?;
        let nodes = self.nodes.read();

        match nodes.get(dir) {
            None => return Err(FsError::NotFound(dir.to_path_buf())),
            Some(Node::File { .. }) => {
                return Err(FsError::InvalidPath(format!(
                    "Not a directory: {}",
                    dir.display()
                )))
            }
            Some(Node::Dir) => {}
        }

        Ok(nodes
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn stat(&self, path: &Path) -> Result<FsMetadata> {
        self.check_access(path)?;

        match self.nodes.read().get(path) {
            None => Err(FsError::NotFound(path.to_path_buf())),
            Some(Node::Dir) => Ok(FsMetadata {
                size: 0,
                modified: None,
                is_dir: true,
            }),
            Some(Node::File { data, modified }) => Ok(FsMetadata {
                size: data.len() as u64,
                modified: Some(*modified),
                is_dir: false,
            }),
        }
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.check_access(path)?;
        let mut nodes = self.nodes.write();

        if !nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }

        for doomed in Self::subtree(&nodes, path) {
            nodes.remove(&doomed);
        }

        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.check_access(from)?;
        self.check_access(to)?;
        let mut nodes = self.nodes.write();

        if !nodes.contains_key(from) {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        if nodes.contains_key(to) {
            return Err(FsError::AlreadyExists(to.to_path_buf()));
        }
        Self::require_parent(&nodes, to)?;

        for old in Self::subtree(&nodes, from) {
            if let Some(node) = nodes.remove(&old) {
                let suffix = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                nodes.insert(new, node);
            }
        }

        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.check_access(from)?;
        self.check_access(to)?;
        let mut nodes = self.nodes.write();

        if !nodes.contains_key(from) {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        Self::require_parent(&nodes, to)?;

        let copies: Vec<(PathBuf, Node)> = Self::subtree(&nodes, from)
            .into_iter()
            .filter_map(|old| {
                let node = nodes.get(&old)?.clone();
                let suffix = old.strip_prefix(from).ok()?;
                let new = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                Some((new, node))
            })
            .collect();

        for (path, node) in copies {
            nodes.insert(path, node);
        }

        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.check_access(path)?;

        match self.nodes.read().get(path) {
            Some(Node::File { data, .. }) => Ok(data.clone()),
            Some(Node::Dir) => Err(FsError::InvalidPath(format!(
                "Is a directory: {}",
                path.display()
            ))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }
}
