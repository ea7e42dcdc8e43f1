use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a content file and return its text
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for text files (`.txt`, `.md`) in the content directory
pub fn scan_content_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && (ext == "txt" || ext == "md")
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_content_dir() -> TempDir {
        TempDir::new().expect("temp content dir")
    }

    fn create_file(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).expect("write test file");
    }

    #[test]
    fn scan_finds_text_files() {
        let dir = create_content_dir();
        create_file(&dir, "pricing.txt", "Laptop\t1200");
        create_file(&dir, "terms.md", "1. Net 30");

        let files = scan_content_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "pricing.txt"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "terms.md"));
    }

    #[test]
    fn scan_recurses_and_skips_other_extensions() {
        let dir = create_content_dir();
        create_file(&dir, "root.txt", "root");
        create_file(&dir, "image.png", "not text");
        let sub = dir.path().join("sections");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("nested.txt"), "nested").unwrap();

        let files = scan_content_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.txt"));
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let result = scan_content_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidContentDir(_))));
    }

    #[test]
    fn read_file_roundtrip() {
        let dir = create_content_dir();
        create_file(&dir, "section.txt", "Overview\n\nBody text");

        let content = read_file(RelativePath::new("section.txt"), dir.path()).unwrap();
        assert_eq!(content, "Overview\n\nBody text");
    }

    #[test]
    fn read_file_not_found() {
        let dir = create_content_dir();
        let result = read_file(RelativePath::new("missing.txt"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn validate_content_dir_checks_existence() {
        let dir = create_content_dir();
        assert!(validate_content_dir(dir.path()).is_ok());
        assert!(matches!(
            validate_content_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidContentDir(_))
        ));
    }
}
