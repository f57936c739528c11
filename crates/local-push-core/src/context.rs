use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Session context of the cf command that invoked local-push.
///
/// Currently nothing in the push flow reads these values, but they are
/// resolved up front so later commands can target the same endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user: Option<String>,
    pub endpoint: Option<String>,
}

/// Subset of `~/.cf/config.json` written by the cf CLI.
#[derive(Debug, Deserialize)]
struct CfConfigFile {
    #[serde(rename = "Target", default)]
    target: Option<String>,
}

impl SessionContext {
    /// Resolve the context from the cf CLI home (`$CF_HOME`, falling back to `$HOME`).
    pub fn discover() -> crate::Result<Self> {
        let user = std::env::var("CF_USERNAME")
            // arch-lint: allow(no-silent-result-drop) reason="unset CF_USERNAME means the host did not export a user"
            .ok()
            .filter(|u| !u.is_empty());
        match cf_home() {
            Some(home) => Self::load(&home, user),
            None => Ok(Self {
                user,
                endpoint: None,
            }),
        }
    }

    /// Load from `<cf_home>/.cf/config.json`. A missing file yields an empty endpoint.
    pub fn load(cf_home: &Path, user: Option<String>) -> crate::Result<Self> {
        let path = cf_home.join(".cf").join("config.json");
        if !path.exists() {
            return Ok(Self {
                user,
                endpoint: None,
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::ContextLoad {
            path: path.clone(),
            source: e,
        })?;
        let file: CfConfigFile =
            serde_json::from_str(&content).map_err(|e| crate::Error::ContextParse {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self {
            user,
            endpoint: file.target.filter(|t| !t.is_empty()),
        })
    }
}

fn cf_home() -> Option<PathBuf> {
    std::env::var_os("CF_HOME")
        .or_else(|| std::env::var_os("HOME"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
