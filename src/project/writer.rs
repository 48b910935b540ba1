//! Hands assembled configurations off to the project file generator.

use std::path::Path;

use crate::errors::{BuildError, BuildResult};
use crate::sync::save_text_file_if_changed;
use crate::utils::log::{log, LogLevel};

use super::assemble::ProjectConfig;

/// Output seam for the generation matrix. Swapped out in tests to
/// capture configurations without touching the disk.
pub trait ProjectWriter {
    fn write(&self, working_dir: &Path, config: &ProjectConfig) -> BuildResult<()>;
}

/// Serializes each configuration to a toml file next to the project
/// files, change-gated so regeneration leaves untouched files alone.
pub struct TomlWriter;

impl ProjectWriter for TomlWriter {
    fn write(&self, working_dir: &Path, config: &ProjectConfig) -> BuildResult<()> {
        let file_name = format!(
            "{}{}{}.toml",
            config.name,
            config.ide.as_str(),
            config.platform.as_str()
        );
        let dest = working_dir.join(&file_name);
        let contents = toml::to_string_pretty(config).map_err(|why| {
            BuildError::io(&dest, std::io::Error::new(std::io::ErrorKind::Other, why))
        })?;
        if save_text_file_if_changed(&dest, &contents, false)? {
            log(LogLevel::Debug, &format!("Wrote {}", dest.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::assemble::{assemble, ProjectRequest};
    use crate::project::types::{IdeType, Platform, ProjectType};
    use crate::utils::configs::BuildContext;
    use std::path::PathBuf;

    fn sample_config() -> ProjectConfig {
        let ctx = BuildContext::new(PathBuf::from("projects"), "all");
        assemble(
            &ctx,
            &ProjectRequest {
                platform: Platform::Windows,
                ide: IdeType::Vs2019,
                project_type: ProjectType::Library,
                name: "burger".to_string(),
            },
        )
    }

    #[test]
    fn writes_once_and_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config();
        TomlWriter.write(dir.path(), &config).unwrap();
        let dest = dir.path().join("burgervs2019windows.toml");
        assert!(dest.is_file());
        let first = std::fs::read_to_string(&dest).unwrap();
        TomlWriter.write(dir.path(), &config).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), first);
    }

    #[test]
    fn serialized_config_round_trips_as_toml() {
        let config = sample_config();
        let text = toml::to_string_pretty(&config).unwrap();
        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(
            value.get("name").and_then(|v| v.as_str()),
            Some("burger")
        );
        assert!(value.get("deploy_folder").is_some());
    }
}
