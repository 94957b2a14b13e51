//! Project path resolution.

use std::path::{Path, PathBuf};

/// Name of the app configuration file at the project root.
pub const CONFIG_FILE: &str = "sherpa.json";

/// Resolved locations for a Sherpa app.
///
/// All working directories are carried here explicitly and threaded
/// through function parameters; nothing changes the process-wide
/// current directory.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Root of the app being deployed.
    pub app_path: PathBuf,

    /// The app configuration file.
    pub config_path: PathBuf,

    /// Directory where the prepared app is staged for the toolchain.
    pub build_path: PathBuf,
}

impl ProjectPaths {
    /// Resolve paths for an app rooted at `app_path`.
    pub fn resolve(app_path: &Path) -> Self {
        Self {
            app_path: app_path.to_path_buf(),
            config_path: app_path.join(CONFIG_FILE),
            build_path: app_path.join(".sherpa").join("build"),
        }
    }

    /// Locate the underlying CDK CLI binary.
    ///
    /// Resolution order: the `SHERPA_CDK_BIN` environment variable, the
    /// app-local `node_modules/.bin/cdk`, then `cdk` on PATH.
    pub fn cdk_bin(&self) -> PathBuf {
        if let Ok(bin) = std::env::var("SHERPA_CDK_BIN") {
            return PathBuf::from(bin);
        }

        let local = self.app_path.join("node_modules").join(".bin").join("cdk");
        if local.exists() {
            return local;
        }

        PathBuf::from("cdk")
    }
}
