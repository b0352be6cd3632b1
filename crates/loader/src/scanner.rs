use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for finding document JSON files in a directory.
pub struct DocumentScanner {
    root: PathBuf,
}

impl DocumentScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Enumerate `*.json` files directly under the root, sorted
    /// lexicographically by filename so processing order is deterministic
    /// regardless of how the host filesystem lists entries.
    pub fn scan(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            log::warn!("Document directory {} does not exist", self.root.display());
            return Vec::new();
        }

        let mut files = Vec::new();
        for result in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    if Self::is_json_file(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        if files.is_empty() {
            log::warn!("No document files found in {}", self.root.display());
        } else {
            log::info!("Found {} document files", files.len());
        }
        files
    }

    fn is_json_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentScanner;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_only_json_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.json"), b"{}").unwrap();
        fs::write(temp.path().join("notes.txt"), b"skip").unwrap();
        fs::write(temp.path().join("b.JSON"), b"{}").unwrap();

        let files = DocumentScanner::new(temp.path()).scan();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        }));
    }

    #[test]
    fn sorts_files_lexicographically() {
        let temp = tempdir().unwrap();
        for name in ["c.json", "a.json", "b.json"] {
            fs::write(temp.path().join(name), b"{}").unwrap();
        }

        let files = DocumentScanner::new(temp.path()).scan();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    }

    #[test]
    fn skips_subdirectories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.json"), b"{}").unwrap();
        fs::write(temp.path().join("top.json"), b"{}").unwrap();

        let files = DocumentScanner::new(temp.path()).scan();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.json"));
    }

    #[test]
    fn missing_directory_yields_empty() {
        let temp = tempdir().unwrap();
        let files = DocumentScanner::new(temp.path().join("absent")).scan();
        assert!(files.is_empty());
    }
}
