//! Error types for the trellis core.

use thiserror::Error;

/// Errors from id-addressed document operations.
///
/// The translation core itself is total (the parser degrades to an empty
/// forest, the emitter degrades to comments), so errors only arise at the
/// editing surface where a caller names a node that does not exist.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No node with id '{0}' in the document")]
    UnknownId(String),

    #[error("No parent node with id '{0}' in the document")]
    UnknownParent(String),
}
