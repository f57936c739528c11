use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the optional per-project configuration.
pub const CONFIG_FILE: &str = "local-push.toml";

/// Non-root user the buildstep image runs the app as.
pub const SERVICE_USER: &str = "vcap";

/// local-push.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalPushConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Port published from the container and exported as PORT / VCAP_APP_PORT
    #[serde(default = "default_port")]
    pub port: String,
    /// Image tag, also used as the container name
    #[serde(default = "default_image")]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Buildstep image providing the buildpack build and start lifecycle
    #[serde(default = "default_base_image")]
    pub base_image: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            image: default_image(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_image: default_base_image(),
        }
    }
}

impl LocalPushConfig {
    /// Load from local-push.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            let config = toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path.clone(),
                source: e,
            })?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

pub fn default_port() -> String {
    "8080".to_owned()
}

pub fn default_image() -> String {
    "cf-local-push".to_owned()
}

pub fn default_base_image() -> String {
    "tcnksm/cf-buildstep:latest".to_owned()
}
