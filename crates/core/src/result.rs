//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Provides combinators for structure mutations, where a `NoOp` is a
//! distinct, usually ignorable outcome rather than a failure.

use crate::error::Error;

/// The standard Result type for algoviz operations.
///
/// All fallible operations return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```ignore
/// // Using the ? operator
/// fn grow(tree: &BinaryTree) -> Result<BinaryTree> {
///     let tree = tree.insert(NodeValue::from(1), InsertPosition::Auto)?;
///     tree.insert(NodeValue::from(2), InsertPosition::Auto)
/// }
///
/// // Treating a no-op as "keep the current snapshot"
/// let next = tree.insert(value, position).or_unchanged(&tree)?;
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for the result of a structure mutation.
pub trait MutationExt<T> {
    /// Replace a `NoOp` with a clone of the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns every error other than `Error::NoOp` unchanged.
    fn or_unchanged(self, current: &T) -> Result<T>;
}

impl<T: Clone> MutationExt<T> for Result<T> {
    fn or_unchanged(self, current: &T) -> Result<T> {
        match self {
            Err(e) if e.is_noop() => {
                tracing::debug!(reason = %e, "Mutation had no effect");
                Ok(current.clone())
            }
            other => other,
        }
    }
}

/// Extension trait for Option types providing Railway-style lookups.
pub trait OptionExt<T> {
    /// Convert `None` into a not-found error for the described entity.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when the option is `None`.
    fn or_not_found<F: FnOnce() -> String>(self, what: F) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found<F: FnOnce() -> String>(self, what: F) -> Result<T> {
        self.ok_or_else(|| Error::not_found(what()))
    }
}
