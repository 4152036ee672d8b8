use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::model::Event;

/// Writes the pasteable marker fragment atomically. A non-empty fragment
/// gains a trailing newline so the paste target keeps its line structure.
#[instrument(skip(fragment), fields(path = %path.display(), bytes = fragment.len()))]
pub fn save_marker_fragment(path: &Path, fragment: &str) -> Result<()> {
    let mut payload = fragment.to_owned();
    if !payload.is_empty() && !payload.ends_with('\n') {
        payload.push('\n');
    }

    write_atomic(path, payload.as_bytes())
        .with_context(|| format!("failed to persist marker fragment: {}", path.display()))?;

    info!("marker fragment saved");
    Ok(())
}

#[instrument(skip(event), fields(path = %path.display(), leaves = event.leaf_count()))]
pub fn save_event(path: &Path, event: &Event) -> Result<()> {
    let json = serde_json::to_vec_pretty(event).context("failed to serialize event tree")?;
    write_atomic(path, &json)
        .with_context(|| format!("failed to persist event tree: {}", path.display()))?;

    info!("event tree saved");
    Ok(())
}

#[instrument(fields(path = %path.display()))]
pub fn load_event(path: &Path) -> Result<Event> {
    let content =
        fs::read(path).with_context(|| format!("failed to read event tree: {}", path.display()))?;
    let event: Event = serde_json::from_slice(&content).context("invalid event tree json")?;
    info!(leaves = event.leaf_count(), "event tree loaded");
    Ok(event)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let mut temp_file = tempfile::NamedTempFile::new_in(
        path.parent()
            .map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf),
    )
    .context("failed to create temp file")?;

    use std::io::Write;
    temp_file
        .write_all(bytes)
        .context("failed to write temp file")?;
    temp_file
        .persist(path)
        .map_err(|error| anyhow::anyhow!(error.error))
        .with_context(|| format!("failed to persist file: {}", path.display()))?;

    Ok(())
}
