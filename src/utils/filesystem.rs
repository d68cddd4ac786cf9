//! File system utility functions

use std::io;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Whether `path` is occupied: a file, or a directory with any entry in it
pub fn is_occupied(path: &Path) -> bool {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(true),
        Ok(_) => true,
        Err(_) => false,
    }
}

/// Remove a file or directory tree; an absent path is not an error
pub fn remove_path_if_exists(path: &Path) -> io::Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_exists_nested_path() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("level1").join("level2");

        assert!(!nested_path.exists());
        ensure_directory_exists(&nested_path).unwrap();
        assert!(nested_path.is_dir());

        // Existing directory is fine
        ensure_directory_exists(&nested_path).unwrap();
    }

    #[test]
    fn test_is_occupied() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(!is_occupied(&missing));

        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).unwrap();
        assert!(!is_occupied(&empty));

        fs::write(empty.join("file.txt"), "content").unwrap();
        assert!(is_occupied(&empty));

        let file = temp_dir.path().join("plain-file");
        fs::write(&file, "x").unwrap();
        assert!(is_occupied(&file));
    }

    #[test]
    fn test_remove_path_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("repo");
        fs::create_dir_all(dir.join(".git").join("objects")).unwrap();
        fs::write(dir.join("README.md"), "# readme").unwrap();

        remove_path_if_exists(&dir).unwrap();
        assert!(!dir.exists());

        // Second call on the now absent directory is a no-op
        remove_path_if_exists(&dir).unwrap();
    }

    #[test]
    fn test_remove_path_if_exists_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("stray");
        fs::write(&file, "x").unwrap();

        remove_path_if_exists(&file).unwrap();
        assert!(!file.exists());
    }
}
