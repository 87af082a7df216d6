//! Small text-file storage
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves the previous contents intact.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Read a whole file. A missing file is `Ok(None)`, not an error.
pub fn read_text(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace the file's contents (tmp -> rename)
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_text(&dir.path().join("nope.txt")).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("score.txt");
        write_text(&path, "120").unwrap();
        write_text(&path, "240").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("240"));
        assert!(!tmp_path(&path).exists());
    }
}
