use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Replace the contents of a file.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Move a file. The destination directory must already exist.
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;

    /// List all files with the given extension under the root directory.
    /// This should be a recursive search. Hidden directories are skipped.
    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        std::fs::rename(from, to)
    }

    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }

        files
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_skips_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".obsidian")).unwrap();
        fs::create_dir_all(root.join("movies")).unwrap();
        fs::write(root.join(".obsidian").join("workspace.md"), "").unwrap();
        fs::write(root.join("movies").join("Jaws.md"), "").unwrap();
        fs::write(root.join("poster.jpg"), "").unwrap();

        let files = PhysicalFileSystem.list_files(root, "md");

        assert_eq!(files, vec![root.join("movies").join("Jaws.md")]);
    }

    #[test]
    fn test_rename_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.jpg");
        let to_dir = temp_dir.path().join("posters");
        fs::write(&from, "img").unwrap();

        let fs_impl = PhysicalFileSystem;
        fs_impl.create_dir_all(&to_dir).unwrap();
        fs_impl.rename(&from, &to_dir.join("a.jpg")).unwrap();

        assert!(!fs_impl.exists(&from));
        assert_eq!(fs::read_to_string(to_dir.join("a.jpg")).unwrap(), "img");
    }
}
