//! Error types for environment binding

/// Errors that can occur when binding environment variables into a record.
///
/// Only structural misuse is reported. Value-level problems (unset variables,
/// malformed numbers, bad sequence elements) never produce an error: the
/// affected field is left as it was, or the element is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// No target was supplied, or the supplied reference was null.
    #[error("bind target must be a non-null mutable reference")]
    NotAPointer,

    /// The referenced value is not a record that can be bound.
    #[error("bind target must refer to a record type")]
    NotAStruct,
}
