//! Status bar summary

use crate::SelectionModel;
use gallery_fs::FileEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub image_count: usize,
    pub total_size: u64,
    pub selected_count: usize,
    pub selected_size: u64,
}

impl StatusSummary {
    /// Summarize `images` and the part of `selection` that is among them
    pub fn compute<T: AsRef<FileEntry>>(images: &[T], selection: &SelectionModel) -> Self {
        let mut summary = Self::default();
        for image in images {
            let entry = image.as_ref();
            summary.image_count += 1;
            summary.total_size += entry.size;
            if selection.is_selected(&entry.path) {
                summary.selected_count += 1;
                summary.selected_size += entry.size;
            }
        }
        summary
    }

    /// e.g. `12 images (3.4 MB)` or `2 of 12 selected (1.1 MB)`
    pub fn describe(&self) -> String {
        if self.selected_count == 0 {
            format!(
                "{} images ({})",
                self.image_count,
                format_file_size(self.total_size)
            )
        } else {
            format!(
                "{} of {} selected ({})",
                self.selected_count,
                self.image_count,
                format_file_size(self.selected_size)
            )
        }
    }
}

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable size with 1024-based units and at most one decimal
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.1}", value);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", trimmed, UNITS[unit])
}
