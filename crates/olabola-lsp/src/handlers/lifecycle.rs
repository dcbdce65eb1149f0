use crate::protocol::SYNC_GRID_COMMAND;
use crate::state::GlobalState;
use olabola_core::{GridConfig, NoteStore, Vault};
use std::path::PathBuf;
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle "initialize" request
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    if let Some(root_path) = root_path(&params) {
        client
            .log_message(
                MessageType::INFO,
                format!("Initializing vault at: {:?}", root_path),
            )
            .await;

        match GridConfig::load(&*state.fs, &root_path) {
            Ok(grid) => {
                state.config.write().await.grid = grid;
            }
            Err(e) => {
                client
                    .log_message(
                        MessageType::WARNING,
                        format!("Ignoring vault config, using defaults: {}", e),
                    )
                    .await;
            }
        }

        let vault = Vault::new(root_path, state.fs.clone());
        client
            .log_message(
                MessageType::INFO,
                format!("Found {} markdown notes", vault.list_notes().len()),
            )
            .await;

        let mut vault_lock = state.vault.write().await;
        *vault_lock = Some(Arc::new(vault));
    } else {
        client
            .log_message(MessageType::WARNING, "No rootUri provided!")
            .await;
    }

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![SYNC_GRID_COMMAND.to_string()],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: "olabola".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    })
}

/// The vault root: first workspace folder, else the deprecated `rootUri`.
#[allow(deprecated)]
fn root_path(params: &InitializeParams) -> Option<PathBuf> {
    params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri)
        .or(params.root_uri.as_ref())
        .and_then(|uri| uri.to_file_path().ok())
}
