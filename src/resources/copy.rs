//! File copy resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::helpers::fs::{copy_dir_recursive, ensure_parent_dir, same_file};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A source file (or directory tree) copied to a target path.
#[derive(Debug, Clone)]
pub struct FileCopy {
    /// The path copied from.
    pub source: PathBuf,
    /// The path copied to.
    pub target: PathBuf,
}

impl FileCopy {
    /// Create a new copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Applicable for FileCopy {
    fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.target.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        let existed = self.target.symlink_metadata().is_ok();
        if self.target.exists() && same_file(&self.source, &self.target)? {
            anyhow::bail!(
                "source and destination are the same file: {}",
                self.target.display()
            );
        }
        ensure_parent_dir(&self.target)?;

        if self.source.is_dir() {
            copy_dir_recursive(&self.source, &self.target)?;
        } else {
            std::fs::copy(&self.source, &self.target).with_context(|| {
                format!(
                    "copying {} to {}",
                    self.source.display(),
                    self.target.display()
                )
            })?;
        }

        Ok(if existed {
            ResourceChange::Overwritten
        } else {
            ResourceChange::Created
        })
    }
}

impl Resource for FileCopy {
    fn current_state(&self) -> Result<ResourceState> {
        let source_exists = self
            .source
            .try_exists()
            .with_context(|| format!("checking source {}", self.source.display()))?;
        if !source_exists {
            return Ok(ResourceState::SourceMissing);
        }

        // Unreadable targets count as absent; apply() reports the real error.
        if self.target.exists() {
            if same_file(&self.source, &self.target)? {
                return Ok(ResourceState::SameFile);
            }
            return Ok(ResourceState::TargetExists);
        }

        let parent_missing = self.target.parent().is_some_and(|p| !p.is_dir());
        Ok(ResourceState::Ready { parent_missing })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src/.gitconfig");
        let target = dir.path().join("dst/nested/.gitconfig");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        (dir, source, target)
    }

    #[test]
    fn description_names_both_paths() {
        let copy = FileCopy::new(PathBuf::from("/a/x"), PathBuf::from("/b/x"));
        assert_eq!(copy.description(), "/a/x -> /b/x");
    }

    #[test]
    fn state_source_missing() {
        let (_dir, source, target) = setup();
        let copy = FileCopy::new(source, target);
        assert_eq!(copy.current_state().unwrap(), ResourceState::SourceMissing);
    }

    #[test]
    fn state_target_exists() {
        let (_dir, source, target) = setup();
        fs::write(&source, "a").unwrap();
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "b").unwrap();
        let copy = FileCopy::new(source, target);
        assert_eq!(copy.current_state().unwrap(), ResourceState::TargetExists);
    }

    #[test]
    fn state_same_file_when_paths_coincide() {
        let (dir, source, _target) = setup();
        fs::write(&source, "a").unwrap();
        let alias = dir.path().join("src/../src/.gitconfig");

        let copy = FileCopy::new(source.clone(), source.clone());
        assert_eq!(copy.current_state().unwrap(), ResourceState::SameFile);
        let copy = FileCopy::new(source, alias);
        assert_eq!(copy.current_state().unwrap(), ResourceState::SameFile);
    }

    #[test]
    fn apply_refuses_to_copy_onto_itself() {
        let (_dir, source, _target) = setup();
        fs::write(&source, "[user]\n\tname = test\n").unwrap();
        let copy = FileCopy::new(source.clone(), source.clone());

        let err = copy.apply().unwrap_err();

        assert!(err.to_string().contains("same file"));
        assert_eq!(fs::read_to_string(&source).unwrap(), "[user]\n\tname = test\n");
    }

    #[test]
    fn apply_refuses_directory_onto_itself() {
        let dir = tempfile::tempdir().unwrap();
        let tree = dir.path().join(".vim");
        fs::create_dir_all(tree.join("plugin")).unwrap();
        fs::write(tree.join("plugin/x.vim"), "set nu").unwrap();
        let copy = FileCopy::new(tree.clone(), tree.clone());

        assert_eq!(copy.current_state().unwrap(), ResourceState::SameFile);
        assert!(copy.apply().is_err());
        assert_eq!(fs::read_to_string(tree.join("plugin/x.vim")).unwrap(), "set nu");
    }

    #[test]
    fn state_ready_reports_missing_parent() {
        let (_dir, source, target) = setup();
        fs::write(&source, "a").unwrap();
        let copy = FileCopy::new(source, target.clone());
        assert_eq!(
            copy.current_state().unwrap(),
            ResourceState::Ready {
                parent_missing: true
            }
        );

        fs::create_dir_all(target.parent().unwrap()).unwrap();
        assert_eq!(
            copy.current_state().unwrap(),
            ResourceState::Ready {
                parent_missing: false
            }
        );
    }

    #[test]
    fn apply_creates_parents_and_copies_bytes() {
        let (_dir, source, target) = setup();
        fs::write(&source, "[user]\n\tname = test\n").unwrap();
        let copy = FileCopy::new(source.clone(), target.clone());

        assert_eq!(copy.apply().unwrap(), ResourceChange::Created);
        assert_eq!(fs::read(&target).unwrap(), fs::read(&source).unwrap());
    }

    #[test]
    fn apply_overwrites_existing_target() {
        let (_dir, source, target) = setup();
        fs::write(&source, "new").unwrap();
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "old contents that are longer").unwrap();
        let copy = FileCopy::new(source, target.clone());

        assert_eq!(copy.apply().unwrap(), ResourceChange::Overwritten);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn apply_copies_directory_tree() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src/.ssh");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("config"), "Host *").unwrap();
        let target = dir.path().join("dst/.ssh");
        let copy = FileCopy::new(source, target.clone());

        assert_eq!(copy.apply().unwrap(), ResourceChange::Created);
        assert_eq!(fs::read_to_string(target.join("config")).unwrap(), "Host *");
    }

    #[test]
    fn state_ready_when_target_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".gitconfig");
        fs::write(&source, "a").unwrap();
        fs::write(dir.path().join("blocker"), "x").unwrap();
        let copy = FileCopy::new(source, dir.path().join("blocker/.gitconfig"));

        assert_eq!(
            copy.current_state().unwrap(),
            ResourceState::Ready {
                parent_missing: true
            }
        );
    }

    #[test]
    fn apply_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".gitconfig");
        fs::write(&source, "a").unwrap();
        fs::write(dir.path().join("blocker"), "x").unwrap();
        let copy = FileCopy::new(source, dir.path().join("blocker/.gitconfig"));

        let err = copy.apply().unwrap_err();
        assert!(format!("{err:#}").contains("create parent"));
    }
}
