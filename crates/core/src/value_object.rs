//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attribute values
/// are interchangeable. A price, a slug or a product's specification sheet are
/// value objects; a product or a category is an entity (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
