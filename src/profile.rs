use crate::install::GoEnv;
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shell startup files the exports are persisted to, relative to the home
/// directory. Files that do not exist are skipped, never created.
pub const PROFILE_FILES: [&str; 2] = [".bash_profile", ".bashrc"];

/// Sentinel line that keys the appended block. A file already containing it
/// is left untouched, so repeated installs do not stack duplicate exports.
pub const EXPORT_MARKER: &str = "# Go environment (managed by getgo)";

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("could not update {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append the Go environment exports to each existing shell startup file
/// that does not carry them yet. Returns the files that were written.
pub fn persist_exports(home: &Path, go_env: &GoEnv) -> Result<Vec<PathBuf>, ProfileError> {
    let mut updated = Vec::new();

    for name in PROFILE_FILES {
        let path = home.join(name);
        if !path.exists() {
            tracing::debug!("Skipping missing startup file: {}", path.display());
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|source| ProfileError::Io {
            path: path.clone(),
            source,
        })?;

        if content.contains(EXPORT_MARKER) {
            tracing::debug!("Exports already present in {}", path.display());
            continue;
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| ProfileError::Io {
                path: path.clone(),
                source,
            })?;

        write!(file, "\n{}\n{}", EXPORT_MARKER, go_env.export_block()).map_err(|source| {
            ProfileError::Io {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!("Added Go exports to {}", path.display());
        updated.push(path);
    }

    Ok(updated)
}
