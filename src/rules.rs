//! Per-directory build hooks.
//!
//! Each directory of the source tree that participates in the build has
//! a rule set with prebuild, postbuild and clean hooks. The rule set is
//! picked from the directory name, so the tool can be pointed at any
//! folder and do the right thing.

use std::path::Path;

use crate::charsets;
use crate::docs;
use crate::errors::{BuildError, BuildResult};
use crate::headers;
use crate::sync;
use crate::utils::configs::BuildContext;
use crate::utils::log::{log, LogLevel};

/// Folders cleanme removes wherever they appear.
const CLEAN_DIRECTORIES: &[&str] = &[
    ".vscode",
    "appfolder",
    "temp",
    "ipch",
    "bin",
    ".vs",
    "*_Data",
    "* Data",
    "__pycache__",
];

/// Files cleanme removes wherever they appear.
const CLEAN_FILES: &[&str] = &[
    ".DS_Store",
    "*.suo",
    "*.user",
    "*.ncb",
    "*.err",
    "*.sdf",
    "*.layout.cbTemp",
    "*.VC.db",
    "*.pyc",
    "*.pyo",
];

/// CodeWarrior for Windows library builds copied into the SDK tree.
const WINDOWS_LIB_FILES: &[&str] = &[
    "burgerc50w32rel.lib",
    "burgerc50w32dbg.lib",
    "burgerc50w32int.lib",
];

/// CodeWarrior for Mac 68k library builds copied into the SDK tree.
const MAC68K_LIB_FILES: &[&str] = &[
    "burgerc58mac68krel.lib",
    "burgerc58mac68kdbg.lib",
    "burgerc58mac68kint.lib",
    "burgerc58mac68kfardbg.lib",
    "burgerc58mac68kfarint.lib",
    "burgerc58mac68kfarrel.lib",
    "burgerc58mac68kfpudbg.lib",
    "burgerc58mac68kfpuint.lib",
    "burgerc58mac68kfpurel.lib",
    "burgerc58mac68kfarfpudbg.lib",
    "burgerc58mac68kfarfpuint.lib",
    "burgerc58mac68kfarfpurel.lib",
    "burgerc58car68kfarfpudbg.lib",
    "burgerc58car68kfarfpuint.lib",
    "burgerc58car68kfarfpurel.lib",
];

/// Hooks a directory's rule set can implement. Every hook defaults to a
/// no-op so a rule set only writes the stages it participates in.
pub trait Rules {
    fn prebuild(&self, _ctx: &BuildContext) -> BuildResult<()> {
        Ok(())
    }

    fn postbuild(&self, _ctx: &BuildContext) -> BuildResult<()> {
        Ok(())
    }

    fn clean(&self, ctx: &BuildContext) -> BuildResult<()> {
        clean_build_residue(ctx)
    }
}

/// Removes the temporary folders and editor droppings every rule set
/// shares.
pub fn clean_build_residue(ctx: &BuildContext) -> BuildResult<()> {
    sync::clean_directories(&ctx.working_dir, CLEAN_DIRECTORIES)?;
    sync::clean_files(&ctx.working_dir, CLEAN_FILES)
}

/// Rules for the library root: generate the version and super headers
/// before any project builds, distribute them into the SDK tree after.
pub struct RootRules;

impl Rules for RootRules {
    fn prebuild(&self, ctx: &BuildContext) -> BuildResult<()> {
        headers::create_generated_folders(ctx)?;
        headers::make_version_header(ctx)?;
        sync::create_folder_if_needed(&ctx.working_dir.join("bin"))?;
        headers::make_super_header(ctx)?;
        Ok(())
    }

    fn postbuild(&self, ctx: &BuildContext) -> BuildResult<()> {
        headers::distribute_headers(ctx)?;
        headers::copy_mac_resources(ctx)
    }
}

/// Rules for the docs folder: the root headers have to exist before the
/// doc extractor runs, so prebuild delegates to the parent first.
pub struct DocsRules;

impl Rules for DocsRules {
    fn prebuild(&self, ctx: &BuildContext) -> BuildResult<()> {
        let Some(parent) = ctx.working_dir.parent() else {
            return Err(BuildError::MissingRules(
                ctx.working_dir.display().to_string(),
            ));
        };
        let rules = rules_for(parent)?;
        rules.prebuild(&ctx.for_dir(parent))?;
        charsets::generate(ctx)
    }

    fn postbuild(&self, ctx: &BuildContext) -> BuildResult<()> {
        docs::run_doxygen(ctx)?;
        docs::unlock_doxygen_files(ctx)?;
        docs::publish_html(ctx)?;
        if ctx.working_dir.join("burgerlib.tex").is_file() {
            docs::build_pdf(ctx, "burgerlib.tex")?;
        }
        Ok(())
    }
}

/// Rules for the projects folder: after a CodeWarrior build, push the
/// static libraries into the SDK tree.
pub struct ProjectRules;

/// Whether this host can have run CodeWarrior for Windows.
fn windows_host() -> bool {
    cfg!(target_os = "windows")
}

/// Whether this host can have run CodeWarrior for MacOS Carbon.
fn codewarrior_mac_allowed() -> bool {
    cfg!(all(target_os = "macos", target_arch = "powerpc"))
}

impl ProjectRules {
    fn copy_libraries(
        &self,
        ctx: &BuildContext,
        sdk_platform: &str,
        lib_files: &[&str],
    ) -> BuildResult<()> {
        let output_folder = ctx.working_dir.join("bin");
        let dest_folder = ctx.sdks_folder.join(sdk_platform).join("burgerlib");
        for item in lib_files {
            let source = output_folder.join(item);
            let dest = dest_folder.join(item);
            if sync::copy_file_if_needed(&source, &dest)? {
                log(LogLevel::Log, &format!("Updated {}", dest.display()));
            }
        }
        Ok(())
    }
}

impl Rules for ProjectRules {
    fn postbuild(&self, ctx: &BuildContext) -> BuildResult<()> {
        if windows_host() || codewarrior_mac_allowed() {
            self.copy_libraries(ctx, "windows", WINDOWS_LIB_FILES)?;
        }
        if codewarrior_mac_allowed() {
            self.copy_libraries(ctx, "mac", MAC68K_LIB_FILES)?;
        }
        Ok(())
    }
}

/// Picks the rule set for a directory. The docs and projects folders are
/// recognized by name, a folder carrying a `source` tree is the library
/// root, anything else has no rules.
pub fn rules_for(working_dir: &Path) -> BuildResult<Box<dyn Rules>> {
    let name = working_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    match name {
        "docs" => Ok(Box::new(DocsRules)),
        "projects" => Ok(Box::new(ProjectRules)),
        _ => {
            if working_dir.join("source").is_dir() {
                Ok(Box::new(RootRules))
            } else {
                Err(BuildError::MissingRules(
                    working_dir.display().to_string(),
                ))
            }
        }
    }
}

/// Runs the full build for one directory: prebuild, then postbuild.
/// The separate IDE build step in between is out of the tool's hands.
pub fn build(ctx: &BuildContext) -> BuildResult<()> {
    let rules = rules_for(&ctx.working_dir)?;
    rules.prebuild(ctx)?;
    rules.postbuild(ctx)
}

/// Cleans a directory, then runs the full build.
pub fn rebuild(ctx: &BuildContext) -> BuildResult<()> {
    let rules = rules_for(&ctx.working_dir)?;
    rules.clean(ctx)?;
    rules.prebuild(ctx)?;
    rules.postbuild(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rules_dispatch_on_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        let projects = dir.path().join("projects");
        let root = dir.path().join("burgerlib");
        std::fs::create_dir_all(root.join("source")).unwrap();
        std::fs::create_dir(&docs).unwrap();
        std::fs::create_dir(&projects).unwrap();

        assert!(rules_for(&docs).is_ok());
        assert!(rules_for(&projects).is_ok());
        assert!(rules_for(&root).is_ok());
    }

    #[test]
    fn unknown_directory_has_no_rules() {
        let dir = tempfile::tempdir().unwrap();
        let stray = dir.path().join("stray");
        std::fs::create_dir(&stray).unwrap();
        let Err(error) = rules_for(&stray) else {
            panic!("stray directory must not have rules");
        };
        assert_eq!(error.exit_code(), 10);
    }

    #[test]
    fn clean_removes_residue_but_keeps_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("temp")).unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        std::fs::write(dir.path().join("junk.suo"), "x").unwrap();
        std::fs::write(dir.path().join("main.cpp"), "int main(){}").unwrap();

        let ctx = BuildContext::new(PathBuf::from(dir.path()), "all");
        clean_build_residue(&ctx).unwrap();

        assert!(!dir.path().join("temp").exists());
        assert!(!dir.path().join("bin").exists());
        assert!(!dir.path().join("junk.suo").exists());
        assert!(dir.path().join("main.cpp").is_file());
    }

    #[test]
    fn docs_prebuild_needs_rules_for_the_parent() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();

        // The parent has no source tree, so there is nothing to delegate to.
        let ctx = BuildContext::new(docs, "all");
        let Err(error) = DocsRules.prebuild(&ctx) else {
            panic!("docs under a strange parent must not build");
        };
        assert_eq!(error.exit_code(), 10);
    }

    #[test]
    fn docs_prebuild_delegates_to_the_library_root() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        std::fs::create_dir_all(dir.path().join("source")).unwrap();

        let ctx = BuildContext::new(docs.clone(), "all");
        DocsRules.prebuild(&ctx).unwrap();

        // Root headers exist and the charset pages were rendered.
        assert!(dir
            .path()
            .join("source")
            .join("generated")
            .join("version.h")
            .is_file());
        assert!(docs
            .join("temp")
            .join("charsets")
            .join("isolatin1.htm")
            .is_file());
    }

    #[test]
    fn root_prebuild_creates_headers_without_tools() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("source")).unwrap();
        let ctx = BuildContext::new(PathBuf::from(dir.path()), "all");

        // makeheader is not installed on the test host, the hook still
        // succeeds and produces the version header.
        RootRules.prebuild(&ctx).unwrap();
        assert!(dir
            .path()
            .join("source")
            .join("generated")
            .join("version.h")
            .is_file());
        assert!(dir.path().join("bin").is_dir());
    }
}
