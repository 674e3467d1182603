//! Geographic coordinates (see [`LatLng`] and [`GeoPoint`]), their canonical ranges and conversion
//! between lengths on the surface of the Earth and angular deltas (see [`Datum`]).

mod datum;
pub mod impls;
mod length;
mod normalize;
mod traits;

pub use datum::Datum;
pub use impls::LatLng;
pub use length::LengthUnit;
pub use normalize::{normalize_latitude, normalize_longitude};
pub use traits::point::GeoPoint;
