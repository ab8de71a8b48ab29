//! File-system resource helpers.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Hidden directories that [`scan_directory`] still descends into.
const SCANNED_HIDDEN_DIRS: &[&str] = &[".git", ".ssh", ".npm"];

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Whether `a` and `b` resolve to the same filesystem entry.
///
/// Both paths must exist. Symlinks and `..` components are resolved first.
///
/// # Errors
///
/// Returns an error if either path cannot be canonicalised.
pub fn same_file(a: &Path, b: &Path) -> Result<bool> {
    let a = std::fs::canonicalize(a).with_context(|| format!("resolving {}", a.display()))?;
    let b = std::fs::canonicalize(b).with_context(|| format!("resolving {}", b.display()))?;
    Ok(a == b)
}

/// Recursively copy a directory tree, merging into `dst` if it exists.
///
/// Symlinks within the source tree are *followed*: the function uses
/// [`Path::is_dir`] (which follows symlinks) so directory symlinks are
/// recursed into and their contents materialised rather than copying the
/// link itself.
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created, a source
/// entry cannot be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)
        .with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in
        std::fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).with_context(|| {
                format!("copying {} to {}", src_path.display(), dst_path.display())
            })?;
        }
    }
    Ok(())
}

/// Recursively list the files under `base` that match one of `patterns`.
///
/// A pattern matches when it equals the file's dotted extension (`.json`)
/// or its whole name (`config`). Hidden directories are skipped, except
/// for `.git`, `.ssh` and `.npm`; this includes `base` itself, so scanning a
/// hidden base such as `~/.config` finds nothing. Entries are visited in
/// lexical order.
///
/// # Errors
///
/// Returns an error if `base` or any visited subdirectory cannot be read.
pub fn scan_directory(base: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let base_name = base.file_name().map(|n| n.to_string_lossy().into_owned());
    if base.is_dir() && base_name.is_some_and(|n| is_skipped_hidden_dir(&n)) {
        return Ok(found);
    }
    scan_into(base, patterns, &mut found)?;
    Ok(found)
}

fn is_skipped_hidden_dir(name: &str) -> bool {
    name.starts_with('.') && !SCANNED_HIDDEN_DIRS.contains(&name)
}

fn scan_into(dir: &Path, patterns: &[&str], found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("reading entry in {}", dir.display()))?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            if is_skipped_hidden_dir(&name) {
                continue;
            }
            scan_into(&path, patterns, found)?;
        } else if matches_pattern(&name, patterns) {
            found.push(path);
        }
    }
    Ok(())
}

fn matches_pattern(name: &str, patterns: &[&str]) -> bool {
    let extension = name.rfind('.').and_then(|i| name.get(i..));
    patterns
        .iter()
        .any(|p| *p == name || extension.is_some_and(|ext| ext == *p))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn copies_files_and_subdirectories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("a.txt"), b"aaa").unwrap();
        std::fs::create_dir(src.path().join("sub")).unwrap();
        std::fs::write(src.path().join("sub/b.txt"), b"bbb").unwrap();

        let target = dst.path().join("out");
        copy_dir_recursive(src.path(), &target).unwrap();

        assert_eq!(std::fs::read(target.join("a.txt")).unwrap(), b"aaa");
        assert_eq!(std::fs::read(target.join("sub/b.txt")).unwrap(), b"bbb");
    }

    #[test]
    fn copy_merges_into_existing_directory() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("new.txt"), b"new").unwrap();
        std::fs::write(dst.path().join("kept.txt"), b"kept").unwrap();

        copy_dir_recursive(src.path(), dst.path()).unwrap();

        assert!(dst.path().join("new.txt").exists());
        assert!(dst.path().join("kept.txt").exists());
    }

    #[test]
    fn copy_fails_for_missing_source() {
        let dst = tempfile::tempdir().unwrap();
        let err = copy_dir_recursive(&dst.path().join("absent"), &dst.path().join("out"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("reading directory"));
    }

    // -----------------------------------------------------------------------
    // same_file
    // -----------------------------------------------------------------------

    #[test]
    fn same_file_detects_identical_and_aliased_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(same_file(&file, &file).unwrap());
        assert!(same_file(&file, &dir.path().join("sub/../a.txt")).unwrap());
    }

    #[test]
    fn same_file_false_for_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), "x").unwrap();
        std::fs::write(dir.path().join("b"), "x").unwrap();

        assert!(!same_file(&dir.path().join("a"), &dir.path().join("b")).unwrap());
    }

    // -----------------------------------------------------------------------
    // ensure_parent_dir
    // -----------------------------------------------------------------------

    #[test]
    fn ensure_parent_dir_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("file.txt");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").exists());
    }

    #[test]
    fn ensure_parent_dir_noop_when_parent_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        ensure_parent_dir(&file).unwrap();
        assert!(dir.path().exists());
    }

    #[test]
    fn ensure_parent_dir_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocker"), "x").unwrap();
        let err = ensure_parent_dir(&dir.path().join("blocker").join("file")).unwrap_err();
        assert!(err.to_string().contains("create parent"));
    }

    // -----------------------------------------------------------------------
    // scan_directory
    // -----------------------------------------------------------------------

    /// Visible scan root; temp dirs themselves are named `.tmp*`.
    fn scan_root() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        std::fs::create_dir(&home).unwrap();
        (dir, home)
    }

    #[test]
    fn scan_matches_extension_and_exact_name() {
        let (_dir, home) = scan_root();
        std::fs::write(home.join("settings.json"), "{}").unwrap();
        std::fs::write(home.join("config"), "").unwrap();
        std::fs::write(home.join("notes.txt"), "").unwrap();

        let found = scan_directory(&home, &[".json", "config"]).unwrap();

        assert_eq!(found, vec![home.join("config"), home.join("settings.json")]);
    }

    #[test]
    fn scan_treats_dotfile_name_as_extension() {
        let (_dir, home) = scan_root();
        std::fs::write(home.join(".bashrc"), "").unwrap();

        let found = scan_directory(&home, &[".bashrc"]).unwrap();

        assert_eq!(found, vec![home.join(".bashrc")]);
    }

    #[test]
    fn scan_skips_hidden_directories_except_allowed() {
        let (_dir, home) = scan_root();
        for sub in [".cache", ".ssh", ".git", "visible"] {
            std::fs::create_dir(home.join(sub)).unwrap();
            std::fs::write(home.join(sub).join("config"), "").unwrap();
        }

        let found = scan_directory(&home, &["config"]).unwrap();

        assert_eq!(
            found,
            vec![
                home.join(".git/config"),
                home.join(".ssh/config"),
                home.join("visible/config"),
            ]
        );
    }

    #[test]
    fn scan_skips_hidden_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(".config");
        std::fs::create_dir_all(base.join("nvim")).unwrap();
        std::fs::write(base.join("nvim/init.lua"), "").unwrap();

        let found = scan_directory(&base, &[".lua"]).unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn scan_descends_into_allowed_hidden_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(".ssh");
        std::fs::create_dir_all(&base).unwrap();
        std::fs::write(base.join("config"), "Host *").unwrap();

        let found = scan_directory(&base, &["config"]).unwrap();

        assert_eq!(found, vec![base.join("config")]);
    }

    #[test]
    fn scan_missing_base_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(&dir.path().join("absent"), &[".json"]).is_err());
    }
}
