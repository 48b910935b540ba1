//! Change-gated file synchronization.
//!
//! Every copy in the build pipeline is gated on byte content: a file is
//! only written when the destination is missing or actually differs.
//! Repeated runs with unchanged inputs touch nothing, which keeps
//! Perforce checkouts and file server mirrors quiet.

use std::fs;
use std::path::Path;

use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;

use crate::errors::{BuildError, BuildResult};
use crate::hasher;
use crate::utils::log::{log, LogLevel};

/// Returns true when both files exist and carry identical bytes.
pub fn compare_files(file_a: &Path, file_b: &Path) -> BuildResult<bool> {
    let meta_a = fs::metadata(file_a).map_err(|why| BuildError::io(file_a, why))?;
    let meta_b = fs::metadata(file_b).map_err(|why| BuildError::io(file_b, why))?;
    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }
    Ok(hasher::hash_file(file_a)? == hasher::hash_file(file_b)?)
}

/// Creates the folder and any missing parents.
pub fn create_folder_if_needed(path: &Path) -> BuildResult<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|why| BuildError::io(path, why))?;
    }
    Ok(())
}

/// Copies `source` over `dest` when the destination is missing or its
/// content differs. Returns true when a copy actually happened.
pub fn copy_file_if_needed(source: &Path, dest: &Path) -> BuildResult<bool> {
    if dest.is_file() && compare_files(source, dest)? {
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        create_folder_if_needed(parent)?;
    }
    log(
        LogLevel::Log,
        &format!("Copying {} -> {}", source.display(), dest.display()),
    );
    fs::copy(source, dest).map_err(|why| BuildError::io(source, why))?;
    Ok(true)
}

/// Writes `text` to `dest` only when the current content differs.
/// `bom` prefixes the UTF-8 byte order mark the doc tools expect.
pub fn save_text_file_if_changed(dest: &Path, text: &str, bom: bool) -> BuildResult<bool> {
    let mut bytes = Vec::new();
    if bom {
        bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
    }
    bytes.extend_from_slice(text.as_bytes());
    if let Ok(existing) = fs::read(dest) {
        if existing == bytes {
            return Ok(false);
        }
    }
    if let Some(parent) = dest.parent() {
        create_folder_if_needed(parent)?;
    }
    log(LogLevel::Log, &format!("Saving {}", dest.display()));
    fs::write(dest, bytes).map_err(|why| BuildError::io(dest, why))?;
    Ok(true)
}

fn dir_file_names(dir: &Path) -> BuildResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|why| BuildError::io(dir, why))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|why| BuildError::io(dir, why))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names.into_iter().sorted().collect())
}

/// Copies every file in `source_dir` that is new or changed into
/// `dest_dir`. Names in `protected` are never touched. The first I/O
/// error aborts the batch.
pub fn copy_if_changed(dest_dir: &Path, source_dir: &Path, protected: &[&str]) -> BuildResult<()> {
    let source_files = dir_file_names(source_dir)?;
    let bar = ProgressBar::new(source_files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Syncing");
    for item in &source_files {
        bar.inc(1);
        if protected.contains(&item.as_str()) {
            continue;
        }
        let source = source_dir.join(item);
        if !source.is_file() {
            continue;
        }
        let destination = dest_dir.join(item);
        copy_file_if_needed(&source, &destination)?;
    }
    bar.finish_and_clear();
    Ok(())
}

/// Mirror mode: deletes destination files that no longer exist in the
/// source directory, keeping the protected names.
pub fn remove_missing(dest_dir: &Path, source_dir: &Path, protected: &[&str]) -> BuildResult<()> {
    let source_files = dir_file_names(source_dir)?;
    for item in dir_file_names(dest_dir)? {
        if protected.contains(&item.as_str()) {
            continue;
        }
        if source_files.contains(&item) {
            continue;
        }
        let victim = dest_dir.join(item);
        if !victim.is_file() {
            continue;
        }
        log(LogLevel::Log, &format!("Removing {}", victim.display()));
        fs::remove_file(&victim).map_err(|why| BuildError::io(&victim, why))?;
    }
    Ok(())
}

/// Removes any directory in `working_dir` whose name matches one of the
/// glob patterns. Used by `clean` to drop temp and IDE droppings.
pub fn clean_directories(working_dir: &Path, patterns: &[&str]) -> BuildResult<()> {
    clean_entries(working_dir, patterns, true)
}

/// Removes any file in `working_dir` whose name matches one of the glob
/// patterns.
pub fn clean_files(working_dir: &Path, patterns: &[&str]) -> BuildResult<()> {
    clean_entries(working_dir, patterns, false)
}

fn clean_entries(working_dir: &Path, patterns: &[&str], dirs: bool) -> BuildResult<()> {
    if !working_dir.is_dir() {
        return Ok(());
    }
    let compiled: Vec<Pattern> = patterns
        .iter()
        .filter_map(|item| Pattern::new(item).ok())
        .collect();
    for name in dir_file_names(working_dir)? {
        if !compiled.iter().any(|pattern| pattern.matches(&name)) {
            continue;
        }
        let victim = working_dir.join(&name);
        if dirs && victim.is_dir() {
            log(LogLevel::Log, &format!("Removing {}", victim.display()));
            fs::remove_dir_all(&victim).map_err(|why| BuildError::io(&victim, why))?;
        } else if !dirs && victim.is_file() {
            log(LogLevel::Log, &format!("Removing {}", victim.display()));
            fs::remove_file(&victim).map_err(|why| BuildError::io(&victim, why))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn mtime(path: &Path) -> SystemTime {
        fs::metadata(path).unwrap().modified().unwrap()
    }

    #[test]
    fn identical_files_are_not_copied() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("burger.h");
        let dest = dir.path().join("out").join("burger.h");
        fs::write(&source, "content").unwrap();
        assert!(copy_file_if_needed(&source, &dest).unwrap());
        let stamp = mtime(&dest);
        // Second run must be a no-op.
        assert!(!copy_file_if_needed(&source, &dest).unwrap());
        assert_eq!(mtime(&dest), stamp);
    }

    #[test]
    fn changed_file_is_refreshed() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("burger.h");
        let dest = dir.path().join("copy.h");
        fs::write(&source, "new").unwrap();
        fs::write(&dest, "old").unwrap();
        assert!(copy_file_if_needed(&source, &dest).unwrap());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn mirror_sync_removes_orphans_but_keeps_protected() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("raw");
        let dest = root.path().join("html");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(source.join("index.html"), "a").unwrap();
        fs::write(dest.join("stale.html"), "b").unwrap();
        fs::write(dest.join(".pyftpsync-meta.json"), "{}").unwrap();

        let protected = ["search", ".pyftpsync-meta.json"];
        remove_missing(&dest, &source, &protected).unwrap();
        copy_if_changed(&dest, &source, &protected).unwrap();

        assert!(dest.join("index.html").is_file());
        assert!(!dest.join("stale.html").exists());
        assert!(dest.join(".pyftpsync-meta.json").is_file());
        assert_eq!(fs::read_to_string(dest.join("index.html")).unwrap(), "a");
    }

    #[test]
    fn save_text_is_change_gated() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("table.htm");
        assert!(save_text_file_if_changed(&dest, "hello", true).unwrap());
        assert!(!save_text_file_if_changed(&dest, "hello", true).unwrap());
        let bytes = fs::read(&dest).unwrap();
        assert_eq!(&bytes[0..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn clean_matches_glob_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("temp")).unwrap();
        fs::create_dir(dir.path().join("Game_Data")).unwrap();
        fs::create_dir(dir.path().join("source")).unwrap();
        fs::write(dir.path().join("proj.suo"), "x").unwrap();
        fs::write(dir.path().join("keep.cpp"), "x").unwrap();

        clean_directories(dir.path(), &["temp", "*_Data"]).unwrap();
        clean_files(dir.path(), &["*.suo"]).unwrap();

        assert!(!dir.path().join("temp").exists());
        assert!(!dir.path().join("Game_Data").exists());
        assert!(dir.path().join("source").exists());
        assert!(!dir.path().join("proj.suo").exists());
        assert!(dir.path().join("keep.cpp").exists());
    }
}
