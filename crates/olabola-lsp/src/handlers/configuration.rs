use crate::config::ServerSettings;
use crate::protocol::SETTINGS_SECTION;
use crate::state::GlobalState;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    client
        .log_message(MessageType::INFO, "Configuration changed")
        .await;

    // Settings arrive under the "olabola" section; anything else is not ours.
    let serde_json::Value::Object(map) = params.settings else {
        return;
    };
    let Some(section) = map.get(SETTINGS_SECTION) else {
        return;
    };

    let mut config_lock = state.config.write().await;
    match merged_settings(&config_lock, section) {
        Ok(new_settings) => {
            log::set_max_level(new_settings.log_level.to_filter());
            *config_lock = new_settings;
            drop(config_lock);

            client
                .log_message(MessageType::INFO, "Settings updated")
                .await;
        }
        Err(e) => {
            drop(config_lock);
            client
                .log_message(
                    MessageType::ERROR,
                    format!("Failed to parse updated settings: {}", e),
                )
                .await;
        }
    }
}

/// Apply the keys present in `update` on top of `current`.
///
/// Absent keys keep their current value, so values loaded from the vault's
/// `.olabola.yml` survive partial updates.
fn merged_settings(
    current: &ServerSettings,
    update: &serde_json::Value,
) -> serde_json::Result<ServerSettings> {
    let mut merged = serde_json::to_value(current)?;
    merge_json(&mut merged, update);
    serde_json::from_value(merged)
}

fn merge_json(base: &mut serde_json::Value, update: &serde_json::Value) {
    match (base, update) {
        (serde_json::Value::Object(base_map), serde_json::Value::Object(update_map)) => {
            for (key, value) in update_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, update) => *base = update.clone(),
    }
}
