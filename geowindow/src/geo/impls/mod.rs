//! Implementations of the geographic traits.

pub(crate) mod point;

pub use point::LatLng;
