//! Super header aggregation and distribution into the SDK tree.
//!
//! `prebuild` flattens the template into a single `burger.h` with the
//! external `makeheader` tool, `postbuild` pushes it and the per-platform
//! special headers into `sdks/<platform>/burgerlib`, copying only what
//! changed.

use std::path::{Path, PathBuf};

use crate::errors::{BuildResult, ToolStatus};
use crate::sync;
use crate::utils::configs::BuildContext;
use crate::utils::log::{log, LogLevel};
use crate::utils::{query_tool, run_tool};

/// Folders for all the target operating systems supported.
pub const TARGET_FOLDERS: &[&str] = &[
    "windows",
    "dos",
    "mac",
    "macosx",
    "linux",
    "beos",
    "ps2",
    "ps3",
    "ps4",
    "vita",
    "gamecube",
    "wii",
    "dsi",
    "xbox",
    "xbox360",
    "xboxone",
    "ios",
    "android",
    "shield",
    "ouya",
    "switch",
];

/// Headers that may carry a platform specific override.
pub const SPECIAL_HEADERS: &[&str] = &[
    "brstartup.h",
    "brgl.h",
    "brglext.h",
    "brglut.h",
    "brglxext.h",
    "brstdint.h",
];

/// Folders that hold generated shader headers and version stamps.
pub const GENERATED_FOLDERS: &[&str] = &[
    "source/generated",
    "source/graphics/shadersdx9/generated",
    "source/graphics/shadersopengl/generated",
    "source/graphics/shadersvita/generated",
    "source/graphics/shadersxbox360/generated",
    "source/windows/generated",
];

/// Creates the folders generated headers land in.
pub fn create_generated_folders(ctx: &BuildContext) -> BuildResult<()> {
    for item in GENERATED_FOLDERS {
        sync::create_folder_if_needed(&ctx.working_dir.join(item))?;
    }
    Ok(())
}

/// Queries source control for the current revision number. Perforce
/// changelist when available, git commit count otherwise, zero when the
/// tree is not under source control at all.
fn source_revision(ctx: &BuildContext) -> u64 {
    if ctx.perforce {
        if let Some(text) = query_tool(
            "p4",
            &["changes", "-m1", "-s", "submitted", "...#have"],
            &ctx.working_dir,
        ) {
            // Line format: "Change 12345 on ..."
            if let Some(number) = text.split_whitespace().nth(1) {
                if let Ok(value) = number.parse() {
                    return value;
                }
            }
        }
    }
    if let Some(text) = query_tool("git", &["rev-list", "--count", "HEAD"], &ctx.working_dir) {
        if let Ok(value) = text.trim().parse() {
            return value;
        }
    }
    0
}

/// Stamps `source/generated/version.h` with the source control revision,
/// rewriting the file only when the number moved.
pub fn make_version_header(ctx: &BuildContext) -> BuildResult<()> {
    let revision = source_revision(ctx);
    let text = format!(
        "/***************************************\n\
         \n\
         \tThis file was generated by burgerbuild\n\
         \n\
         ***************************************/\n\
         \n\
         #ifndef __VERSION_H__\n\
         #define __VERSION_H__\n\
         #define BURGER_CHANGELIST {}\n\
         #endif\n",
        revision
    );
    let dest = ctx.working_dir.join("source").join("generated").join("version.h");
    sync::save_text_file_if_changed(&dest, &text, false)?;
    Ok(())
}

/// Flattens the template into the super header `bin/burger.h` with the
/// external `makeheader` tool.
pub fn make_super_header(ctx: &BuildContext) -> BuildResult<ToolStatus> {
    let bin_folder = ctx.working_dir.join("bin");
    sync::create_folder_if_needed(&bin_folder)?;
    let template = ctx.working_dir.join("source").join("templateburgerbase.h");
    let dest = bin_folder.join("burger.h");
    run_tool(
        "makeheader",
        &[
            &template.to_string_lossy(),
            &dest.to_string_lossy(),
        ],
        &ctx.working_dir,
    )
}

/// Resolves a special header to its platform override when one exists,
/// the generic header otherwise.
///
/// Burgerlib stores its MS-DOS sources under `msdos` while the SDK tree
/// calls the platform `dos`. That alias lives here and nowhere else.
pub fn resolve_special_header(working_dir: &Path, platform: &str, name: &str) -> PathBuf {
    let source_name = if platform == "dos" { "msdos" } else { platform };
    let platform_folder = working_dir.join("source").join(source_name);
    if platform_folder.is_dir() {
        let override_file = platform_folder.join(name);
        if override_file.is_file() {
            return override_file;
        }
    }
    working_dir.join("source").join(name)
}

/// Pushes the super header and the resolved special headers into every
/// platform's `burgerlib` SDK folder. Fail fast on the first copy error.
pub fn distribute_headers(ctx: &BuildContext) -> BuildResult<()> {
    let super_header = ctx.working_dir.join("bin").join("burger.h");
    for platform in TARGET_FOLDERS {
        let dest_folder = ctx.sdks_folder.join(platform).join("burgerlib");
        sync::create_folder_if_needed(&dest_folder)?;
        if super_header.is_file() {
            sync::copy_file_if_needed(&super_header, &dest_folder.join("burger.h"))?;
        }
    }
    if !super_header.is_file() {
        log(
            LogLevel::Warn,
            "bin/burger.h missing, only special headers were distributed",
        );
    }
    for platform in TARGET_FOLDERS {
        let dest_folder = ctx.sdks_folder.join(platform).join("burgerlib");
        for name in SPECIAL_HEADERS {
            let source = resolve_special_header(&ctx.working_dir, platform, name);
            if !source.is_file() {
                continue;
            }
            sync::copy_file_if_needed(&source, &dest_folder.join(name))?;
        }
    }
    Ok(())
}

/// Copies the Mac Carbon/Classic `.r` resource files next to the mac
/// headers, change-gated like everything else.
pub fn copy_mac_resources(ctx: &BuildContext) -> BuildResult<()> {
    let source_folder = ctx.working_dir.join("source").join("mac");
    if !source_folder.is_dir() {
        return Ok(());
    }
    let dest_folder = ctx.sdks_folder.join("mac").join("burgerlib");
    let entries = std::fs::read_dir(&source_folder)
        .map_err(|why| crate::errors::BuildError::io(&source_folder, why))?;
    for entry in entries {
        let entry = entry.map_err(|why| crate::errors::BuildError::io(&source_folder, why))?;
        let path = entry.path();
        let is_resource = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("r"))
            .unwrap_or(false);
        if !path.is_file() || !is_resource {
            continue;
        }
        let dest = dest_folder.join(entry.file_name());
        sync::copy_file_if_needed(&path, &dest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn generic_header_wins_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("windows")).unwrap();
        fs::write(source.join("brgl.h"), "generic").unwrap();

        let resolved = resolve_special_header(dir.path(), "windows", "brgl.h");
        assert_eq!(resolved, source.join("brgl.h"));
    }

    #[test]
    fn platform_override_wins_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("mac")).unwrap();
        fs::write(source.join("brgl.h"), "generic").unwrap();
        fs::write(source.join("mac").join("brgl.h"), "mac override").unwrap();

        let resolved = resolve_special_header(dir.path(), "mac", "brgl.h");
        assert_eq!(resolved, source.join("mac").join("brgl.h"));
    }

    #[test]
    fn dos_platform_reads_the_msdos_folder() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("msdos")).unwrap();
        fs::write(source.join("brstartup.h"), "generic").unwrap();
        fs::write(source.join("msdos").join("brstartup.h"), "dos").unwrap();

        let resolved = resolve_special_header(dir.path(), "dos", "brstartup.h");
        assert_eq!(resolved, source.join("msdos").join("brstartup.h"));
    }

    #[test]
    fn distribute_copies_overrides_into_the_sdk_tree() {
        let root = tempfile::tempdir().unwrap();
        let working = root.path().join("burgerlib");
        let sdks = root.path().join("sdks");
        fs::create_dir_all(working.join("source").join("mac")).unwrap();
        fs::write(working.join("source").join("brgl.h"), "generic").unwrap();
        fs::write(working.join("source").join("mac").join("brgl.h"), "mac").unwrap();

        let mut ctx = crate::utils::configs::BuildContext::new(working, "all");
        ctx.sdks_folder = sdks.clone();
        distribute_headers(&ctx).unwrap();

        assert_eq!(
            fs::read_to_string(sdks.join("mac").join("burgerlib").join("brgl.h")).unwrap(),
            "mac"
        );
        assert_eq!(
            fs::read_to_string(sdks.join("windows").join("burgerlib").join("brgl.h")).unwrap(),
            "generic"
        );
    }

    #[test]
    fn mac_resources_are_copied_change_gated() {
        let root = tempfile::tempdir().unwrap();
        let working = root.path().join("burgerlib");
        fs::create_dir_all(working.join("source").join("mac")).unwrap();
        fs::write(working.join("source").join("mac").join("burger.r"), "rsrc").unwrap();
        fs::write(working.join("source").join("mac").join("notes.txt"), "no").unwrap();

        let mut ctx = crate::utils::configs::BuildContext::new(working, "all");
        ctx.sdks_folder = root.path().join("sdks");
        copy_mac_resources(&ctx).unwrap();

        let dest = ctx.sdks_folder.join("mac").join("burgerlib");
        assert!(dest.join("burger.r").is_file());
        assert!(!dest.join("notes.txt").exists());
    }
}
