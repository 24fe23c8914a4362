//! Defines [`Gml2Error`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// The codec is deliberately permissive: malformed coordinate tokens, unknown
/// reference systems and unrecognized elements degrade silently instead of
/// erroring. The variants here cover the few conditions that cannot.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Gml2Error {
    /// The XML tree collaborator failed a mandatory operation, e.g. it had no
    /// document to create an element into.
    #[error("XML tree error: {0}")]
    Tree(String),

    /// A `Box` element carried fewer than the two corner tuples needed to
    /// form an extent.
    #[error("Box requires two coordinate tuples, found {0}")]
    InvalidBox(usize),

    #[error("General error: {0}")]
    General(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Gml2Error>;
