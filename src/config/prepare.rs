//! App configuration loading and build preparation.
//!
//! `prepare` is the step that runs before every in-process command: it
//! loads `sherpa.json`, merges CLI overrides, stages the build directory,
//! and writes the merged config for the infrastructure app to read.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::paths::ProjectPaths;
use crate::error::{Result, SherpaError};

/// Stage used when neither `--stage` nor `sherpa.json` provides one.
pub const DEFAULT_STAGE: &str = "dev";

/// Region used when neither `--region` nor `sherpa.json` provides one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// App names and stages are used in stack names, so they are restricted
/// to characters every downstream tool accepts.
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("IDENT_REGEX must compile"));

/// Contents of `sherpa.json` at the app root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// App name, used to namespace deployed stacks.
    pub name: String,

    /// Default stage when `--stage` is not given.
    #[serde(default)]
    pub stage: Option<String>,

    /// Default region when `--region` is not given.
    #[serde(default)]
    pub region: Option<String>,
}

/// Fully merged configuration handed to the in-process handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub name: String,
    pub stage: String,
    pub region: String,
}

/// Load the app config and stage the build directory.
///
/// CLI flags win over `sherpa.json` defaults, which win over the built-in
/// defaults. The merged config is written to `<build>/config.json`.
pub fn prepare(
    paths: &ProjectPaths,
    stage: Option<&str>,
    region: Option<&str>,
) -> Result<BuildConfig> {
    let app = load_app_config(&paths.config_path)?;

    let config = BuildConfig {
        name: app.name,
        stage: stage
            .map(str::to_string)
            .or(app.stage)
            .unwrap_or_else(|| DEFAULT_STAGE.to_string()),
        region: region
            .map(str::to_string)
            .or(app.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    };
    validate_ident("stage", &config.stage)?;

    fs::create_dir_all(&paths.build_path)?;
    let merged = serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?;
    fs::write(paths.build_path.join("config.json"), merged)?;

    tracing::debug!(
        "prepared {} for stage {} in region {}",
        config.name,
        config.stage,
        config.region
    );

    Ok(config)
}

/// Load and validate `sherpa.json`.
pub fn load_app_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(SherpaError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let app: AppConfig =
        serde_json::from_str(&raw).map_err(|e| SherpaError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_ident("name", &app.name)?;
    Ok(app)
}

fn validate_ident(field: &str, value: &str) -> Result<()> {
    if !IDENT_REGEX.is_match(value) {
        return Err(SherpaError::ConfigValidationError {
            message: format!(
                "{field} must contain only letters, numbers, and hyphens, got {value:?}"
            ),
        });
    }
    Ok(())
}
