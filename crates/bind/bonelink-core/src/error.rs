//! Error types for the binding layer.

use thiserror::Error;

/// Errors surfaced by the binding layer.
///
/// The sync path itself never fails: a missing bone is a deliberate no-op,
/// not an error. These variants cover the configuration surface instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A stringly-keyed override named a field the animation engine does not
    /// recognize on a bone.
    #[error("unknown bone field '{0}'")]
    UnknownBoneField(String),

    /// A bone follower has no animated element anywhere above it in the
    /// component tree.
    #[error("no animated element found above this bone follower")]
    MissingContext,
}
