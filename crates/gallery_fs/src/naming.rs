//! File name helpers: extension handling, padding, conflict-free names

use crate::{FileSystemGateway, FsError, Result};
use std::path::{Path, PathBuf};

/// Image extensions the browser shows, lower-case
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Characters that may never appear in a name produced by the engine
const FORBIDDEN_CHARS: &[char] = &['/', '\\'];

/// Check if a path has a supported image extension (case-insensitive)
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Split a file name into its base and extension (without the dot)
///
/// Follows `Path` semantics: the extension is whatever follows the last dot,
/// and a leading dot alone does not start an extension.
/// `"photo.tar.gz"` gives `("photo.tar", Some("gz"))`, `".hidden"` gives
/// `(".hidden", None)`.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    let path = Path::new(name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), ext) => (stem, ext),
        (None, _) => (name, None),
    }
}

/// Join a base name and an optional extension
pub fn compose_file_name(base: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() => format!("{}.{}", base, ext),
        _ => base.to_string(),
    }
}

/// Render `number` with at least `width` digits, left-padded with zeros
pub fn zero_pad(number: u64, width: usize) -> String {
    format!("{:0width$}", number, width = width)
}

/// Find a name in `dir` that does not exist yet
///
/// Tries `base.ext`, then `base_1.ext`, `base_2.ext`, ... and returns the
/// first candidate the gateway reports as absent. The check happens now;
/// a concurrent writer can still take the name before it is used.
pub fn find_non_conflicting_file_name(
    fs: &dyn FileSystemGateway,
    dir: &Path,
    base: &str,
    extension: Option<&str>,
) -> PathBuf {
    let candidate = dir.join(compose_file_name(base, extension));
    if !fs.exists(&candidate) {
        return candidate;
    }

    let mut counter: u64 = 1;
    loop {
        let numbered = format!("{}_{}", base, counter);
        let candidate = dir.join(compose_file_name(&numbered, extension));
        if !fs.exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Validate a user-supplied base name and return it trimmed
///
/// Rejects names that are empty after trimming, contain path separators or
/// control characters, or are `.` / `..`.
pub fn validate_base_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(FsError::InvalidName(name.to_string()));
    }

    if trimmed
        .chars()
        .any(|c| FORBIDDEN_CHARS.contains(&c) || c.is_control())
    {
        return Err(FsError::InvalidName(name.to_string()));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryFileSystem;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("/x/y/Photo.Png")));
        assert!(is_supported_image(Path::new("anim.gif")));
        assert!(is_supported_image(Path::new("old.BMP")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("modern.webp")));
        assert!(!is_supported_image(Path::new("jpg")));
    }

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("photo.jpg"), ("photo", Some("jpg")));
        assert_eq!(split_file_name("photo.tar.gz"), ("photo.tar", Some("gz")));
        assert_eq!(split_file_name("README"), ("README", None));
        assert_eq!(split_file_name(".hidden"), (".hidden", None));
    }

    #[test]
    fn test_compose_file_name() {
        assert_eq!(compose_file_name("img_001", Some("jpg")), "img_001.jpg");
        assert_eq!(compose_file_name("README", None), "README");
        assert_eq!(compose_file_name("odd", Some("")), "odd");
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(1, 3), "001");
        assert_eq!(zero_pad(42, 1), "42");
        assert_eq!(zero_pad(1234, 3), "1234");
        assert_eq!(zero_pad(0, 10), "0000000000");
    }

    #[test]
    fn test_non_conflicting_name_counts_up() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/dst");
        let dir = Path::new("/dst");

        let first = find_non_conflicting_file_name(&fs, dir, "photo", Some("jpg"));
        assert_eq!(first, PathBuf::from("/dst/photo.jpg"));
        fs.add_file(&first, b"1".to_vec());

        let second = find_non_conflicting_file_name(&fs, dir, "photo", Some("jpg"));
        assert_eq!(second, PathBuf::from("/dst/photo_1.jpg"));
        fs.add_file(&second, b"2".to_vec());

        let third = find_non_conflicting_file_name(&fs, dir, "photo", Some("jpg"));
        assert_eq!(third, PathBuf::from("/dst/photo_2.jpg"));
    }

    #[test]
    fn test_non_conflicting_name_without_extension() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/dst/README", b"x".to_vec());

        let name = find_non_conflicting_file_name(&fs, Path::new("/dst"), "README", None);
        assert_eq!(name, PathBuf::from("/dst/README_1"));
    }

    #[test]
    fn test_validate_base_name() {
        assert_eq!(validate_base_name("  holiday ").unwrap(), "holiday");
        assert!(validate_base_name("").is_err());
        assert!(validate_base_name("   ").is_err());
        assert!(validate_base_name("..").is_err());
        assert!(validate_base_name("a/b").is_err());
        assert!(validate_base_name("a\\b").is_err());
        assert!(validate_base_name("tab\there").is_err());
    }
}
