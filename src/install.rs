use crate::command::run_shell;
use crate::config::Settings;
use crate::profile;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Local filename the archive is fetched to, in the current directory.
/// Removed again as the last installation step.
pub const ARCHIVE_NAME: &str = "go.tar.gz";

/// The environment a finished installation wants exported. Returned to the
/// caller instead of mutating this process's environment table, since
/// `std::env::set_var` cannot reach the parent shell anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoEnv {
    /// Root of the extracted toolchain; `<go_root>/bin` joins PATH.
    pub go_root: PathBuf,
    /// Module/workspace root, `$HOME/go`.
    pub go_path: PathBuf,
    /// Binary install directory, `<go_path>/bin`.
    pub go_bin: PathBuf,
}

impl GoEnv {
    pub fn new(install_dir: &Path, home: &Path) -> Self {
        let go_path = home.join("go");
        GoEnv {
            go_root: install_dir.to_path_buf(),
            go_bin: go_path.join("bin"),
            go_path,
        }
    }

    /// The export statements persisted to shell startup files and echoed on
    /// stdout for the current session.
    pub fn export_block(&self) -> String {
        format!(
            "export PATH=$PATH:{}/bin\nexport GOPATH={}\nexport GOBIN={}\n",
            self.go_root.display(),
            self.go_path.display(),
            self.go_bin.display()
        )
    }
}

/// Archive URL for a version, derived from the listing URL. The version is
/// substituted into the fixed linux-amd64 template exactly once.
pub fn download_url(listing_url: &str, version: &str) -> String {
    format!(
        "{}/go{}.linux-amd64.tar.gz",
        listing_url.trim_end_matches('/'),
        version
    )
}

/// Download and unpack the requested version, then persist the environment
/// exports. Steps run in strict sequence; the first failing external command
/// aborts the remainder, leaving any earlier side effects in place.
pub fn install(settings: &Settings, version: &str) -> Result<GoEnv> {
    let url = download_url(&settings.listing_url, version);
    let install_dir = &settings.install_dir;

    eprintln!("Downloading Go version {}...", version);
    run_shell(&format!("wget {} -O {}", url, ARCHIVE_NAME))?;

    eprintln!("Extracting Go...");
    run_shell(&format!(
        "rm -rf {dir} && mkdir -p {dir}",
        dir = install_dir
    ))?;
    run_shell(&format!(
        "tar -C {} -xzf {} --strip-components=1",
        install_dir, ARCHIVE_NAME
    ))?;
    run_shell(&format!("rm {}", ARCHIVE_NAME))?;

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    let go_env = GoEnv::new(Path::new(install_dir), &home);

    // Profile failures are reported but never undo a completed install.
    match profile::persist_exports(&home, &go_env) {
        Ok(updated) if updated.is_empty() => {
            eprintln!("No shell startup files were updated; add the exports below manually.");
        }
        Ok(updated) => {
            for path in &updated {
                eprintln!("Go paths added to {}.", path.display());
            }
            eprintln!("Restart your terminal or source the files manually.");
        }
        Err(e) => {
            tracing::warn!("Failed to update shell startup files: {}", e);
        }
    }

    tracing::info!("Installed Go {} to {}", version, install_dir);
    Ok(go_env)
}
