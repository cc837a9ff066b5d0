use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to `path`; the terminal itself is owned by the UI.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Could not install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = init(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Could not open log file"));
    }

    #[test]
    fn test_events_reach_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasklist.log");
        init(&path).unwrap();

        tracing::error!("log file smoke line");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log file smoke line"));
    }
}
