//! Fatal errors for one file's analysis.
//!
//! Missing whitespace is never an error; it is a diagnostic. These variants
//! mean the walker handed us coordinates that cannot be right, and the
//! file's analysis stops.

use opspace_source::SourceError;
use thiserror::Error;

use crate::Category;

/// Precondition violation raised while checking a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LintError {
    /// An anchor or position fell outside the indexed source.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The keyword check was asked to look before the first byte.
    #[error("no byte precedes offset {offset}; cannot check keyword spacing")]
    NoPrecedingByte { offset: u32 },

    /// The node's site shape does not fit its category's anchor rule.
    #[error("site does not match the anchor rule for `{category}`")]
    SiteMismatch { category: Category },
}

/// A category name that is not in the rule table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unknown syntactic category `{0}`")]
pub struct UnknownCategory(pub String);
