//! Olabola LSP Library
//!
//! Exposes the grid synchronizer to an editor as a language server command.

use olabola_core::{FileSystem, PhysicalFileSystem};
use std::sync::Arc;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LspService};

use crate::state::GlobalState;

pub mod config;
mod handlers;
pub mod protocol;
mod state;


/// LSP backend implementation
pub struct Backend {
    client: Client,
    state: GlobalState,
}

impl Backend {
    pub fn new(client: Client, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            client,
            state: GlobalState::new(fs),
        }
    }
}

#[tower_lsp::async_trait]
impl tower_lsp::LanguageServer for Backend {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        handlers::handle_initialize(&self.client, &self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Olabola server initialized")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        log::info!("Shutdown requested");
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handlers::handle_did_change_configuration(&self.client, &self.state, params).await
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> tower_lsp::jsonrpc::Result<Option<serde_json::Value>> {
        handlers::handle_execute_command(&self.client, &self.state, params).await
    }
}

/// Create and return LSP service and client socket
pub fn create_lsp_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    let fs: Arc<dyn FileSystem> = Arc::new(PhysicalFileSystem);
    LspService::new(move |client| Backend::new(client, fs.clone()))
}
