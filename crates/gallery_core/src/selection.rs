//! Multi-item selection with an anchor for range clicks
//!
//! Membership is keyed by path. The anchor is the path touched by the most
//! recent single or toggle click; it need not be selected. Range clicks are
//! resolved against the visible, display-ordered listing the caller passes in.

use gallery_fs::PathKey;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    /// Selected paths in insertion order
    selected: Vec<PathBuf>,
    members: HashSet<PathBuf>,
    anchor: Option<PathBuf>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain click: select only `path` and anchor there
    pub fn click_single(&mut self, path: &Path) {
        self.clear();
        self.insert(path);
        self.anchor = Some(path.to_path_buf());
    }

    /// Ctrl-click: flip membership of `path` and anchor there
    pub fn click_toggle(&mut self, path: &Path) {
        if self.members.contains(path) {
            self.remove(path);
        } else {
            self.insert(path);
        }
        self.anchor = Some(path.to_path_buf());
    }

    /// Shift-click: select exactly the span between the anchor and `path`
    ///
    /// Falls back to [`click_single`](Self::click_single) when the anchor is
    /// unset or either end is not in `visible`.
    pub fn click_range_extend<E: PathKey>(&mut self, path: &Path, visible: &[E]) {
        match self.range_bounds(path, visible) {
            Some((lo, hi)) => {
                self.clear();
                for entry in &visible[lo..=hi] {
                    self.insert(entry.path_key());
                }
            }
            None => self.click_single(path),
        }
    }

    /// Ctrl+Shift-click: add the span between the anchor and `path`
    ///
    /// Falls back to [`click_toggle`](Self::click_toggle) when the range
    /// cannot be resolved.
    pub fn click_range_add<E: PathKey>(&mut self, path: &Path, visible: &[E]) {
        match self.range_bounds(path, visible) {
            Some((lo, hi)) => {
                for entry in &visible[lo..=hi] {
                    self.insert(entry.path_key());
                }
            }
            None => self.click_toggle(path),
        }
    }

    /// Deselect everything; the anchor is kept
    pub fn clear(&mut self) {
        self.selected.clear();
        self.members.clear();
    }

    /// Deselect everything and forget the anchor
    pub fn reset(&mut self) {
        self.clear();
        self.anchor = None;
    }

    /// Keep only the selected paths for which `keep` returns true
    pub fn retain<F: FnMut(&Path) -> bool>(&mut self, mut keep: F) {
        let members = &mut self.members;
        self.selected.retain(|p| {
            let kept = keep(p);
            if !kept {
                members.remove(p);
            }
            kept
        });
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.members.contains(path)
    }

    /// Selected paths in the order they were selected
    pub fn selected(&self) -> &[PathBuf] {
        &self.selected
    }

    /// Selected entries of `visible`, in display order
    pub fn selected_in<'a, E: PathKey>(&self, visible: &'a [E]) -> Vec<&'a E> {
        visible
            .iter()
            .filter(|e| self.members.contains(e.path_key()))
            .collect()
    }

    pub fn anchor(&self) -> Option<&Path> {
        self.anchor.as_deref()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn insert(&mut self, path: &Path) {
        if self.members.insert(path.to_path_buf()) {
            self.selected.push(path.to_path_buf());
        }
    }

    fn remove(&mut self, path: &Path) {
        if self.members.remove(path) {
            self.selected.retain(|p| p != path);
        }
    }

    fn range_bounds<E: PathKey>(&self, path: &Path, visible: &[E]) -> Option<(usize, usize)> {
        let anchor = self.anchor.as_deref()?;
        let from = visible.iter().position(|e| e.path_key() == anchor)?;
        let to = visible.iter().position(|e| e.path_key() == path)?;
        Some((from.min(to), from.max(to)))
    }
}
