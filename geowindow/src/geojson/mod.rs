//! Interoperability with the [`geojson`] crate.

mod point;

pub use point::GeoJsonPoint;
