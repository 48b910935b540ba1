//! Documentation pipeline: doxygen post-processing, HTML publishing and
//! the PDF build.

use std::fs;
use std::path::Path;

use crate::errors::{BuildError, BuildResult, ToolStatus};
use crate::sync;
use crate::utils::configs::BuildContext;
use crate::utils::log::{log, LogLevel};
use crate::utils::run_tool_captured;

/// Asset files doxygen copies into its output while keeping their
/// read-only attribute. Once read-only, doxygen can never overwrite them
/// on the next run, so they are unlocked after every build.
const RETAINED_FILES: &[&str] = &[
    "docs.css",
    "burger.png",
    "oldeskuul.png",
    "sourceforge.jpg",
    "twitter.jpg",
    "facebook.png",
    "linkedin.png",
    "github.png",
    "burgerbackground.png",
    "spec-gif89a.txt",
    "swf-file-format-spec.pdf",
    "avm2overview.pdf",
    "qtff-2001.pdf",
    "mpeg-2_audio_is.pdf",
    "11172-3.pdf",
    "aiff-1.3.pdf",
    "aiff-c.9.26.91.pdf",
    "creative voice file format.txt",
    "3dnow.pdf",
    "avx.pdf",
    "m68000prm.pdf",
    "powerpc-cwg.pdf",
    "qt6apiref.pdf",
    "qt4reference-extract.pdf",
    "MacintoshToolboxEssentials.pdf",
    "Sound_Manager.pdf",
    "macos_sound-extract.pdf",
    "mp3_theory.pdf",
    "lfsr04.pdf",
    "is138181.pdf",
    "is138182.pdf",
];

/// Names never deleted or overwritten by the mirror publish step.
const PROTECTED_NAMES: &[&str] = &["search", ".pyftpsync-meta.json"];

/// Log substrings that mean the LaTeX output has unresolved references.
const RERUN_MARKERS: &[&str] = &["Rerun LaTeX", "Rerun to get cross-references"];

/// Upper bound of convergence passes after the first one.
const MAX_EXTRA_PASSES: u32 = 8;

/// Runs doxygen over the working directory's Doxyfile. Doxygen not being
/// installed is a skip.
pub fn run_doxygen(ctx: &BuildContext) -> BuildResult<ToolStatus> {
    if !ctx.working_dir.join("Doxyfile").is_file() {
        return Ok(ToolStatus::Missing);
    }
    run_tool_captured("doxygen", &["Doxyfile"], &ctx.working_dir).map(|(status, _)| status)
}

/// Clears the read-only attribute on the retained doxygen assets.
/// The first missing file ends the loop, matching a fresh output tree.
pub fn unlock_doxygen_files(ctx: &BuildContext) -> BuildResult<()> {
    let raw_dir = ctx.working_dir.join("temp").join("burgerlibdoxygenraw");
    for item in RETAINED_FILES {
        let filename = raw_dir.join(item);
        let Ok(metadata) = fs::metadata(&filename) else {
            break;
        };
        let mut permissions = metadata.permissions();
        if permissions.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            permissions.set_readonly(false);
            fs::set_permissions(&filename, permissions)
                .map_err(|why| BuildError::io(&filename, why))?;
        }
    }
    Ok(())
}

/// Mirrors the raw doxygen output into the published HTML folder:
/// stale files are pruned, new or changed files copied, the search index
/// cache and sync metadata left alone.
pub fn publish_html(ctx: &BuildContext) -> BuildResult<()> {
    let raw_dir = ctx.working_dir.join("temp").join("burgerlibdoxygenraw");
    let html_dir = ctx.working_dir.join("temp").join("burgerlibdoxygen");
    let raw_search = raw_dir.join("search");
    let html_search = html_dir.join("search");

    sync::create_folder_if_needed(&html_dir)?;
    sync::create_folder_if_needed(&html_search)?;

    sync::remove_missing(&html_dir, &raw_dir, PROTECTED_NAMES)?;
    sync::remove_missing(&html_search, &raw_search, PROTECTED_NAMES)?;

    sync::copy_if_changed(&html_dir, &raw_dir, PROTECTED_NAMES)?;
    sync::copy_if_changed(&html_search, &raw_search, PROTECTED_NAMES)?;
    Ok(())
}

/// True when the LaTeX log asks for another pass.
pub fn needs_rerun(log_text: &str) -> bool {
    RERUN_MARKERS.iter().any(|marker| log_text.contains(marker))
}

fn latex_pass(ctx: &BuildContext, tex_name: &str, pass: u32) -> BuildResult<ToolStatus> {
    let (status, output) = run_tool_captured(
        "pdflatex",
        &["-interaction=nonstopmode", tex_name],
        &ctx.working_dir,
    )?;
    if status == ToolStatus::Ran && !ctx.docs_build {
        let log_file = ctx
            .working_dir
            .join("temp")
            .join(format!("latex_pass{}.txt", pass));
        sync::save_text_file_if_changed(&log_file, &output, false)?;
    }
    Ok(status)
}

fn run_makeindex(ctx: &BuildContext, stem: &str) -> BuildResult<ToolStatus> {
    let idx_name = format!("{}.idx", stem);
    if !ctx.working_dir.join(&idx_name).is_file() {
        return Ok(ToolStatus::Missing);
    }
    run_tool_captured("makeindex", &[idx_name.as_str()], &ctx.working_dir)
        .map(|(status, _)| status)
}

fn log_wants_rerun(working_dir: &Path, stem: &str) -> bool {
    let log_path = working_dir.join(format!("{}.log", stem));
    match fs::read_to_string(&log_path) {
        Ok(text) => needs_rerun(&text),
        // No log means nothing asked for a rerun.
        Err(_) => false,
    }
}

/// Builds the PDF manual: LaTeX passes repeated while the log carries a
/// rerun marker, bounded at eight extra passes, then always one final
/// compile and index regeneration. A missing LaTeX install is a skip.
pub fn build_pdf(ctx: &BuildContext, tex_name: &str) -> BuildResult<ToolStatus> {
    let stem = tex_name.strip_suffix(".tex").unwrap_or(tex_name);
    sync::create_folder_if_needed(&ctx.working_dir.join("temp"))?;

    let mut pass = 1;
    if latex_pass(ctx, tex_name, pass)? == ToolStatus::Missing {
        return Ok(ToolStatus::Missing);
    }
    run_makeindex(ctx, stem)?;

    let mut extra = 0;
    while extra < MAX_EXTRA_PASSES && log_wants_rerun(&ctx.working_dir, stem) {
        extra += 1;
        pass += 1;
        log(
            LogLevel::Info,
            &format!("References unresolved, LaTeX pass {}", pass),
        );
        latex_pass(ctx, tex_name, pass)?;
    }

    // One more compile and a fresh index, converged or not.
    latex_pass(ctx, tex_name, pass + 1)?;
    run_makeindex(ctx, stem)?;
    Ok(ToolStatus::Ran)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rerun_markers_are_detected() {
        assert!(needs_rerun(
            "LaTeX Warning: Label(s) may have changed. Rerun to get cross-references right."
        ));
        assert!(needs_rerun("Package rerunfilecheck: Rerun LaTeX."));
        assert!(!needs_rerun("Output written on burgerlib.pdf (312 pages)."));
    }

    #[test]
    fn missing_log_means_converged() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!log_wants_rerun(dir.path(), "burgerlib"));
    }

    #[test]
    fn log_file_drives_the_loop_decision() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("burgerlib.log"), "Rerun LaTeX").unwrap();
        assert!(log_wants_rerun(dir.path(), "burgerlib"));
        std::fs::write(dir.path().join("burgerlib.log"), "all good").unwrap();
        assert!(!log_wants_rerun(dir.path(), "burgerlib"));
    }

    #[test]
    fn publish_mirror_keeps_search_cache() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("temp");
        let raw = temp.join("burgerlibdoxygenraw");
        std::fs::create_dir_all(raw.join("search")).unwrap();
        std::fs::write(raw.join("index.html"), "new").unwrap();
        std::fs::write(raw.join("search").join("all.js"), "idx").unwrap();

        let html = temp.join("burgerlibdoxygen");
        std::fs::create_dir_all(html.join("search")).unwrap();
        std::fs::write(html.join("gone.html"), "old").unwrap();
        std::fs::write(html.join(".pyftpsync-meta.json"), "{}").unwrap();

        let ctx = BuildContext::new(PathBuf::from(dir.path()), "all");
        publish_html(&ctx).unwrap();

        assert!(html.join("index.html").is_file());
        assert!(html.join("search").join("all.js").is_file());
        assert!(!html.join("gone.html").exists());
        assert!(html.join(".pyftpsync-meta.json").is_file());
    }

    #[test]
    fn unlock_clears_readonly_until_first_missing() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("temp").join("burgerlibdoxygenraw");
        std::fs::create_dir_all(&raw).unwrap();
        let css = raw.join("docs.css");
        std::fs::write(&css, "body {}").unwrap();
        let mut perms = std::fs::metadata(&css).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&css, perms).unwrap();

        let ctx = BuildContext::new(PathBuf::from(dir.path()), "all");
        unlock_doxygen_files(&ctx).unwrap();
        assert!(!std::fs::metadata(&css).unwrap().permissions().readonly());
    }
}
