use serde::{Deserialize, Serialize};

/// Vault-relative, `/`-separated path, as the host addresses files.
pub type VaultPath = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteFile {
    pub path: VaultPath,
    /// File name without extension.
    pub title: String,
}

impl NoteFile {
    pub fn from_path(path: impl Into<VaultPath>) -> Self {
        let path = path.into();
        let file_name = path.rsplit('/').next().unwrap_or(&path);
        let title = file_name
            .strip_suffix(".md")
            .unwrap_or(file_name)
            .to_string();
        Self { path, title }
    }

    /// Folder containing the note, empty at the vault root.
    pub fn folder(&self) -> &str {
        match self.path.rfind('/') {
            Some(pos) => &self.path[..pos],
            None => "",
        }
    }
}

/// Counts reported after a synchronisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub added: usize,
    pub moved: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_file_from_path() {
        let note = NoteFile::from_path("movies/classics/Jaws.md");
        assert_eq!(note.title, "Jaws");
        assert_eq!(note.folder(), "movies/classics");

        let root_note = NoteFile::from_path("list of all movies.md");
        assert_eq!(root_note.title, "list of all movies");
        assert_eq!(root_note.folder(), "");
    }
}
