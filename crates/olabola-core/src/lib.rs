//! Olabola Core Library
//!
//! Keeps the movie grid of a markdown vault in sync with the movie notes.
//! Storage is reached only through the `FileSystem` and `NoteStore` traits.
//!

pub mod config;
pub mod frontmatter;
pub mod grid;
pub mod model;
pub mod poster;
pub mod sync;
pub mod vault;
pub mod vfs;

pub use config::{ConfigError, GridConfig};
pub use model::{NoteFile, SyncReport};
pub use sync::{GridSynchronizer, SkipReason, SyncError, SyncOutcome};
pub use vault::{NoteStore, Vault};
pub use vfs::{FileSystem, PhysicalFileSystem};
