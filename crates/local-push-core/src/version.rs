use std::fmt;

/// Command name, as registered with the host CLI.
pub const NAME: &str = "local-push";

/// Identity of this build, created once at startup and passed down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub major: &'static str,
    pub minor: &'static str,
    pub build: &'static str,
    /// Latest commit hash, extracted by `git describe --always` at build time.
    pub commit: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            major: env!("CARGO_PKG_VERSION_MAJOR"),
            minor: env!("CARGO_PKG_VERSION_MINOR"),
            build: env!("CARGO_PKG_VERSION_PATCH"),
            commit: option_env!("GIT_COMMIT").filter(|c| !c.is_empty()),
        }
    }

    /// `MAJOR.MINOR.BUILD`
    pub fn version_str(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.build)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version_str())?;
        if let Some(commit) = self.commit {
            write!(f, " ({commit})")?;
        }
        Ok(())
    }
}
