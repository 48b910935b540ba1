use std::env;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use super::log::{log, LogLevel};

/// Per-user defaults stored in a toml file under the platform config
/// directory. Anything absent falls back to a built in default, a broken
/// file is treated as empty.
#[derive(Serialize, Deserialize, Default)]
pub struct GlobalConfig {
    /// Root of the SDKs tree when `BURGER_SDKS` is not set.
    pub sdks_folder: Option<String>,
    /// IDE to generate for when a project list does not name one.
    pub default_ide: Option<String>,
}

impl GlobalConfig {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "burgerbuild")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = GlobalConfig::config_path() else {
            return GlobalConfig::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return GlobalConfig::default();
        };
        toml::from_str(&contents).unwrap_or_else(|why| {
            log(
                LogLevel::Warn,
                &format!("Ignoring malformed global config {}: {}", path.display(), why),
            );
            GlobalConfig::default()
        })
    }
}

/// Everything the rule hooks need to know about the environment, computed
/// once at process start and passed down explicitly.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Directory the rules operate on.
    pub working_dir: PathBuf,
    /// Configuration requested on the command line, `all` by default.
    pub configuration: String,
    /// Root of the per-platform SDK tree being populated.
    pub sdks_folder: PathBuf,
    /// The tree is managed by Perforce, so copies must respect checkouts.
    pub perforce: bool,
    /// Legacy DirectX SDK install, appended to include paths for old IDEs.
    pub dx_sdk: Option<PathBuf>,
    /// Running under a hosted docs build, suppress log file side effects.
    pub docs_build: bool,
}

impl BuildContext {
    pub fn new(working_dir: PathBuf, configuration: &str) -> Self {
        let perforce = detect_perforce(&working_dir);
        let sdks_folder = find_sdks_folder(&working_dir);
        let dx_sdk = env::var_os("DXSDK_DIR").map(PathBuf::from);
        let docs_build = env::var_os("BURGER_DOCS_BUILD").is_some();
        BuildContext {
            working_dir,
            configuration: configuration.to_string(),
            sdks_folder,
            perforce,
            dx_sdk,
            docs_build,
        }
    }

    /// Same environment, different directory. Used when one rule set
    /// delegates to the rules of a neighboring folder.
    pub fn for_dir(&self, dir: &Path) -> Self {
        let mut ctx = self.clone();
        ctx.working_dir = dir.to_path_buf();
        ctx
    }
}

fn detect_perforce(working_dir: &Path) -> bool {
    if env::var_os("P4CLIENT").is_some() {
        return true;
    }
    // A .p4config anywhere above the working directory also counts.
    let mut dir = Some(working_dir);
    while let Some(current) = dir {
        if current.join(".p4config").is_file() {
            return true;
        }
        dir = current.parent();
    }
    false
}

/// Locate the SDKs tree: `BURGER_SDKS`, then the global config, then an
/// `sdks` folder above the working directory, then `<home>/sdks`.
fn find_sdks_folder(working_dir: &Path) -> PathBuf {
    if let Some(sdks) = env::var_os("BURGER_SDKS") {
        return PathBuf::from(sdks);
    }
    if let Some(sdks) = GlobalConfig::load().sdks_folder {
        return PathBuf::from(sdks);
    }
    let mut dir = Some(working_dir);
    while let Some(current) = dir {
        let candidate = current.join("sdks");
        if candidate.is_dir() {
            return candidate;
        }
        dir = current.parent();
    }
    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    home.join("sdks")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_config_parses_partial_file() {
        let config: GlobalConfig = toml::from_str("sdks_folder = \"/opt/sdks\"").unwrap();
        assert_eq!(config.sdks_folder.as_deref(), Some("/opt/sdks"));
        assert!(config.default_ide.is_none());
    }

    #[test]
    fn global_config_empty_file_is_default() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.sdks_folder.is_none());
    }

    #[test]
    fn for_dir_keeps_environment() {
        let ctx = BuildContext::new(PathBuf::from("/tmp/a"), "all");
        let other = ctx.for_dir(Path::new("/tmp/b"));
        assert_eq!(other.working_dir, Path::new("/tmp/b"));
        assert_eq!(other.configuration, ctx.configuration);
        assert_eq!(other.sdks_folder, ctx.sdks_folder);
    }
}
