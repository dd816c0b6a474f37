//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// instances with the same values are the same value. Entities, by contrast,
/// are identified by an id regardless of their current attribute values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
