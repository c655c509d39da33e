//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In the shell
/// the transient form captures are value objects: the UI builds a fresh
/// one per keystroke and hands it to a pure validator instead of mutating
/// shared form state.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Email(String);
///
/// impl ValueObject for Email {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
