use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `path` atomically by writing to a temporary file
/// first, syncing to disk, then renaming into place.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;

    // Ensure data is persisted to disk before rename
    file.sync_all()?;

    // Drop file handle before rename (Windows compatibility)
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("snapshot.json");

        atomic_write(&test_file, "test content").unwrap();

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("snapshot.json");

        fs::write(&test_file, "old content").unwrap();
        atomic_write(&test_file, "new content").unwrap();

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn atomic_write_does_not_leave_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("snapshot.json");
        let temp_file = test_file.with_extension("tmp");

        atomic_write(&test_file, "content").unwrap();

        assert!(!temp_file.exists());
        assert!(test_file.exists());
    }
}
