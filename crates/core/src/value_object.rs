//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Readings, practice descriptions and prediction outputs are all values: they
/// carry no identity, are never mutated after construction, and two instances
/// with the same fields are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct SoilReading {
///     ph: f64,
///     nitrogen: f64,
/// }
///
/// impl ValueObject for SoilReading {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
