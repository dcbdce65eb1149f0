use serde::{Deserialize, Serialize};

/// `workspace/executeCommand` name of the grid synchronisation. Takes no arguments.
pub const SYNC_GRID_COMMAND: &str = "olabola.syncGrid";

/// Settings section read from `workspace/didChangeConfiguration`
pub const SETTINGS_SECTION: &str = "olabola";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncGridResult {
    /// Movies appended to the grid block
    pub added: usize,

    /// Poster files physically moved
    pub moved: usize,

    /// Same text as the notice shown to the user
    pub message: String,
}
