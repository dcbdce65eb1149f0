use olabola_core::{FileSystem, Vault};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ServerSettings;

/// Global state for LSP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// Vault opened on `initialize`; `None` without a root folder
    pub vault: Arc<RwLock<Option<Arc<Vault>>>>,
    pub config: Arc<RwLock<ServerSettings>>,
    pub fs: Arc<dyn FileSystem>,
}

impl GlobalState {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            vault: Arc::new(RwLock::new(None)),
            config: Arc::new(RwLock::new(ServerSettings::default())),
            fs,
        }
    }
}
