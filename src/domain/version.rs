//! Build identification printed by `--version`.

const UNKNOWN: &str = "unknown";

/// Crate version from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, injected via `SET_PROPERTY_COMMIT` at build time.
pub const COMMIT: Option<&str> = option_env!("SET_PROPERTY_COMMIT");

/// Build date, injected via `SET_PROPERTY_BUILD_DATE` at build time.
pub const BUILD_DATE: Option<&str> = option_env!("SET_PROPERTY_BUILD_DATE");

/// Build information for one binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo<'a> {
    pub version: &'a str,
    pub commit: &'a str,
    pub date: &'a str,
}

impl BuildInfo<'static> {
    /// Information baked into the running binary.
    pub fn current() -> Self {
        Self {
            version: VERSION,
            commit: COMMIT.unwrap_or(UNKNOWN),
            date: BUILD_DATE.unwrap_or(UNKNOWN),
        }
    }
}

impl std::fmt::Display for BuildInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "set-property {} ({} @ {})", self.version, self.commit, self.date)
    }
}
