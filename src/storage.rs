use crate::errors::GenerateError;
use crate::models::MenuSnapshot;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("MENU_DATA_PATH") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from("data/menu-data.json")
}

/// Read the menu cache. A missing, unreadable or unparsable file degrades to
/// an empty snapshot so the page can render its placeholder state.
pub async fn load_snapshot(path: &Path) -> MenuSnapshot {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("failed to parse menu cache: {err}");
                MenuSnapshot::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MenuSnapshot::default(),
        Err(err) => {
            error!("failed to read menu cache: {err}");
            MenuSnapshot::default()
        }
    }
}

/// Write the cache pretty-printed with a trailing newline, creating parent
/// directories as needed.
pub async fn write_snapshot(path: &Path, snapshot: &MenuSnapshot) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let mut payload = serde_json::to_vec_pretty(snapshot)?;
    payload.push(b'\n');
    fs::write(path, payload).await?;
    Ok(())
}
