use crate::frontmatter::parse_frontmatter;
use crate::model::{NoteFile, VaultPath};
use crate::vfs::FileSystem;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Everything the grid synchronizer needs from the host.
///
/// Paths are vault-relative and `/`-separated. Implementations decide how
/// they map onto real storage.
pub trait NoteStore {
    /// All markdown notes in the vault.
    fn list_notes(&self) -> Vec<NoteFile>;

    /// Parsed frontmatter of a note, `None` if it has none.
    fn read_metadata(&self, note: &NoteFile) -> Option<serde_json::Value>;

    fn read_content(&self, path: &str) -> io::Result<String>;

    fn write_content(&self, path: &str, content: &str) -> io::Result<()>;

    fn path_exists(&self, path: &str) -> bool;

    fn make_directory(&self, path: &str) -> io::Result<()>;

    fn move_file(&self, from: &str, to: &str) -> io::Result<()>;

    /// Resolve a link written inside `from` to an existing vault path.
    ///
    /// Tries the link as a vault-root path first, then relative to the note's folder.
    fn resolve_link(&self, link: &str, from: &NoteFile) -> Option<VaultPath> {
        let link = link.trim_start_matches("./").trim_start_matches('/');
        if link.is_empty() {
            return None;
        }
        if self.path_exists(link) {
            return Some(link.to_string());
        }
        let folder = from.folder();
        if folder.is_empty() {
            return None;
        }
        let relative = format!("{}/{}", folder, link);
        self.path_exists(&relative).then_some(relative)
    }
}

/// A vault rooted in a directory, accessed through a [`FileSystem`].
pub struct Vault {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl Vault {
    pub fn new(root: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { root, fs }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault path.
    pub fn absolute(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    /// Vault path of an absolute location, `None` outside the vault.
    pub fn relative(&self, path: &Path) -> Option<VaultPath> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<_> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(segments.join("/"))
    }
}

impl NoteStore for Vault {
    fn list_notes(&self) -> Vec<NoteFile> {
        let mut notes: Vec<NoteFile> = self
            .fs
            .list_files(&self.root, "md")
            .iter()
            .filter_map(|path| self.relative(path))
            .map(NoteFile::from_path)
            .collect();
        notes.sort_by(|a, b| a.path.cmp(&b.path));
        notes
    }

    fn read_metadata(&self, note: &NoteFile) -> Option<serde_json::Value> {
        let content = self.read_content(&note.path).ok()?;
        parse_frontmatter(&content)
    }

    fn read_content(&self, path: &str) -> io::Result<String> {
        self.fs.read_to_string(&self.absolute(path))
    }

    fn write_content(&self, path: &str, content: &str) -> io::Result<()> {
        self.fs.write(&self.absolute(path), content)
    }

    fn path_exists(&self, path: &str) -> bool {
        self.fs.exists(&self.absolute(path))
    }

    fn make_directory(&self, path: &str) -> io::Result<()> {
        self.fs.create_dir_all(&self.absolute(path))
    }

    fn move_file(&self, from: &str, to: &str) -> io::Result<()> {
        self.fs.rename(&self.absolute(from), &self.absolute(to))
    }
}
