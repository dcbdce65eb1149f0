use crate::protocol::{SyncGridResult, SYNC_GRID_COMMAND};
use crate::state::GlobalState;
use olabola_core::GridSynchronizer;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle "workspace/executeCommand" request
pub async fn handle_execute_command(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    match params.command.as_str() {
        SYNC_GRID_COMMAND => handle_sync_grid_command(client, state).await,
        other => {
            log::debug!("Unknown command: {}", other);
            Ok(None)
        }
    }
}

pub async fn handle_sync_grid_command(
    client: &Client,
    state: &GlobalState,
) -> Result<Option<serde_json::Value>> {
    let vault = state.vault.read().await.clone();
    let Some(vault) = vault else {
        client
            .show_message(MessageType::WARNING, "No vault open, grid not synced")
            .await;
        return Ok(None);
    };
    let config = state.config.read().await.grid.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        GridSynchronizer::new(&*vault, &config).sync()
    })
    .await
    .map_err(|e| Error {
        code: ErrorCode::InternalError,
        message: format!("Grid sync task failed: {}", e).into(),
        data: None,
    })?;

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            client
                .show_message(MessageType::ERROR, format!("Grid sync failed: {}", e))
                .await;
            return Err(Error {
                code: ErrorCode::InternalError,
                message: e.to_string().into(),
                data: None,
            });
        }
    };

    let message = outcome.message();
    let typ = if outcome.is_warning() {
        MessageType::WARNING
    } else {
        MessageType::INFO
    };
    client.show_message(typ, message.clone()).await;

    let report = outcome.report();
    let result = SyncGridResult {
        added: report.added,
        moved: report.moved,
        message,
    };
    serde_json::to_value(result).map(Some).map_err(|e| Error {
        code: ErrorCode::InternalError,
        message: format!("Failed to serialize results: {}", e).into(),
        data: None,
    })
}
