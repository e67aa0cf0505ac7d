use libgraphql_language::Source;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Reads the file at `path` into a [`Source`] named after the path, so
/// syntax errors point back at the file they came from.
pub(crate) fn read_source(path: &Path) -> anyhow::Result<Source> {
    let body = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {}: {e}", path.display())
    })?;
    Ok(Source::with_name(body, path.display().to_string()))
}
