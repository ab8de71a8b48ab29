//! Idempotent resource primitives (check + apply pattern).
pub mod copy;
pub mod helpers;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// This method should:
    /// - Create parent directories if needed
    /// - Update the resource to match the desired state
    /// - Return the appropriate `ResourceChange` result
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O failures,
    /// permission issues, invalid paths, or other system errors.
    fn apply(&self) -> Result<ResourceChange>;
}

/// State of a copy resource before it is applied.
///
/// # Examples
///
/// ```
/// use profilesync::resources::ResourceState;
///
/// let missing = ResourceState::SourceMissing;
/// let ready = ResourceState::Ready { parent_missing: true };
///
/// assert_ne!(missing, ready);
/// assert_eq!(ResourceState::TargetExists, ResourceState::TargetExists);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// The source does not exist; nothing to copy.
    SourceMissing,
    /// The target already exists.
    TargetExists,
    /// Source and target resolve to the same file or directory.
    SameFile,
    /// The source exists and the target does not.
    Ready {
        /// The target's parent directory has to be created first.
        parent_missing: bool,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceChange {
    /// The target did not exist and was created.
    Created,
    /// An existing target was replaced.
    Overwritten,
}

/// A resource that can report its state before being applied.
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O failures
    /// or permission issues.
    fn current_state(&self) -> Result<ResourceState>;
}
